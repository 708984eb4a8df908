//! Reading imported documents.

use crate::error::{ExtractError, Result};
use crate::extractor::extract_operations;
use crate::operation::OperationDescriptor;
use std::path::Path;

/// Source of GraphQL document text, keyed by resolved path.
///
/// The linter only ever reads documents through this trait, so tests and
/// editor integrations can serve unsaved buffers without touching disk.
pub trait DocumentLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<String>;
}

/// Loads documents from the local file system as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentLoader;

impl DocumentLoader for FsDocumentLoader {
    fn load(&self, path: &Path) -> Result<String> {
        // read_to_string reports invalid UTF-8 as an InvalidData io::Error
        std::fs::read_to_string(path).map_err(|source| ExtractError::DocumentAccess {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a document through `loader` and enumerate its named operations.
pub fn load_operations(
    loader: &dyn DocumentLoader,
    path: &Path,
) -> Result<Vec<OperationDescriptor>> {
    let text = loader.load(path)?;
    extract_operations(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationKind;
    use std::io::Write;

    #[test]
    fn test_fs_loader_reads_document() {
        let mut file = tempfile::NamedTempFile::with_suffix(".graphql").unwrap();
        file.write_all(b"mutation Save { save }").unwrap();
        file.flush().unwrap();

        let ops = load_operations(&FsDocumentLoader, file.path()).unwrap();
        assert_eq!(ops, vec![OperationDescriptor::new("Save", OperationKind::Mutation)]);
    }

    #[test]
    fn test_fs_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.graphql");

        let err = load_operations(&FsDocumentLoader, &path).unwrap_err();
        assert!(matches!(err, ExtractError::DocumentAccess { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_fs_loader_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::with_suffix(".gql").unwrap();
        file.write_all(&[0x71, 0xff, 0xfe, 0x00]).unwrap();
        file.flush().unwrap();

        let err = FsDocumentLoader.load(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::DocumentAccess { .. }));
    }
}

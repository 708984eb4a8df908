use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failure to turn an imported GraphQL document into operations.
///
/// Neither variant is fatal to the analysis of the importing file: callers
/// treat both as "this import contributes no operations".
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document is missing, unreadable, or not valid UTF-8
    #[error("failed to read GraphQL document {}: {source}", path.display())]
    DocumentAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not syntactically valid GraphQL
    #[error("failed to parse GraphQL document {}: {message}", path.display())]
    DocumentParse { path: PathBuf, message: String },
}

impl ExtractError {
    /// Path of the document that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::DocumentAccess { path, .. } | Self::DocumentParse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ExtractError::DocumentParse {
            path: PathBuf::from("ops/user.graphql"),
            message: "expected a Name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse GraphQL document ops/user.graphql: expected a Name"
        );
        assert_eq!(err.path(), Path::new("ops/user.graphql"));
    }

    #[test]
    fn test_access_error_keeps_source() {
        let err = ExtractError::DocumentAccess {
            path: PathBuf::from("missing.gql"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.gql"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

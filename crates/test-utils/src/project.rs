use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project laid out in a temporary directory, removed on drop.
///
/// ```ignore
/// let project = TestProject::new()
///     .file("src/user.graphql", "query GetUser { user { id } }")
///     .file("src/user.ts", "import './user.graphql';");
/// let result = linter.lint_file(&project.path("src/user.ts"))?;
/// ```
pub struct TestProject {
    dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Write a file relative to the project root, creating parent directories.
    #[must_use]
    pub fn file(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("failed to write fixture file");
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

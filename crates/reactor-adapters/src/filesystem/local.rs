//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use reactor_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, WriteOutcome},
    },
    error::{ReactorError, ReactorResult},
};

use super::ConflictPolicy;

/// Production filesystem rooted at the project directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
    policy: ConflictPolicy,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: ConflictPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Filesystem for LocalFilesystem {
    fn write(&self, path: &Path, content: &str) -> ReactorResult<WriteOutcome> {
        let target = self.resolve(path);
        let existed = target.exists();

        if existed && self.policy == ConflictPolicy::Skip {
            debug!(path = %target.display(), "exists, skipping");
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::write(&target, content).map_err(|e| map_io_error(&target, e, "write file"))?;

        Ok(if existed {
            WriteOutcome::Overwritten
        } else {
            WriteOutcome::Created
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ReactorError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new(dir.path());

        let outcome = fs
            .write(Path::new("src/scripts/stores/TestStore.js"), "let TestStore;")
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        let written =
            std::fs::read_to_string(dir.path().join("src/scripts/stores/TestStore.js")).unwrap();
        assert_eq!(written, "let TestStore;");
        assert!(fs.exists(Path::new("src/scripts/stores")));
    }

    #[test]
    fn skip_policy_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "mine").unwrap();
        let fs = LocalFilesystem::new(dir.path());

        let outcome = fs.write(Path::new("package.json"), "generated").unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "mine"
        );
    }

    #[test]
    fn overwrite_policy_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "mine").unwrap();
        let fs = LocalFilesystem::new(dir.path()).with_policy(ConflictPolicy::Overwrite);

        let outcome = fs.write(Path::new("package.json"), "generated").unwrap();

        assert_eq!(outcome, WriteOutcome::Overwritten);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "generated"
        );
    }

    #[test]
    fn write_into_a_file_path_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("src"), "not a directory").unwrap();
        let fs = LocalFilesystem::new(dir.path());

        let err = fs.write(Path::new("src/index.html"), "x").unwrap_err();
        assert!(matches!(
            err,
            ReactorError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}

//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use reactor_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, WriteOutcome},
    },
    error::ReactorResult,
};

use super::ConflictPolicy;

const RESOURCE: &str = "memory filesystem";

/// In-memory filesystem for testing. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    policy: ConflictPolicy,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.read().ok()?;
        files.get(path.as_ref()).cloned()
    }

    /// All written paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) -> ReactorResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        files.clear();
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn write(&self, path: &Path, content: &str) -> ReactorResult<WriteOutcome> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;

        let existed = files.contains_key(path);
        if existed && self.policy == ConflictPolicy::Skip {
            return Ok(WriteOutcome::Skipped);
        }

        files.insert(path.to_path_buf(), content.to_string());
        Ok(if existed {
            WriteOutcome::Overwritten
        } else {
            WriteOutcome::Created
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.keys().any(|p| p.starts_with(path)))
            .unwrap_or(false)
    }
}

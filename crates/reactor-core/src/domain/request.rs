use std::collections::HashSet;
use std::fmt;
use std::path::{Component, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

/// One `generate` call: what to create and under which name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub kind: ArtifactKind,
    /// May contain `/` separators for sub-paths (`Card/CardItem`).
    pub base_name: String,
    /// Overrides the kind's default directory under `scripts/`.
    pub target_subdirectory: Option<String>,
}

impl ArtifactRequest {
    pub fn new(kind: ArtifactKind, base_name: impl Into<String>) -> Self {
        Self {
            kind,
            base_name: base_name.into(),
            target_subdirectory: None,
        }
    }

    pub fn with_subdirectory(mut self, subdirectory: impl Into<String>) -> Self {
        self.target_subdirectory = Some(subdirectory.into());
        self
    }

    /// Directory under `scripts/` and `test/spec/`; empty for config assets.
    pub fn subdirectory(&self) -> &str {
        self.target_subdirectory
            .as_deref()
            .map(|s| s.trim_matches('/'))
            .filter(|s| !s.is_empty())
            .or(self.kind.default_subdirectory())
            .unwrap_or("")
    }
}

/// What a rendered file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputRole {
    Source,
    Test,
    Style,
    Config,
}

impl OutputRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Test => "test",
            Self::Style => "style",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for OutputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file ready to be handed to the filesystem, path relative to the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub path: PathBuf,
    pub content: String,
    pub role: OutputRole,
}

impl RenderedOutput {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, role: OutputRole) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            role,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Reject output sets that would clobber themselves or escape the root.
pub fn validate_outputs(outputs: &[RenderedOutput]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for output in outputs {
        let path_str = output.path.display().to_string();

        if output.path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
        }
        if output
            .path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::PathOutsideProject { path: path_str });
        }
        if !seen.insert(output.path.clone()) {
            return Err(DomainError::DuplicatePath { path: path_str });
        }
    }
    Ok(())
}

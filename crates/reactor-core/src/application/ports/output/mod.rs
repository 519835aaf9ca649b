//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `reactor-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::RenderContext;
use crate::error::ReactorResult;

/// Port for the persistent project configuration.
///
/// Implemented by:
/// - `reactor_adapters::config_store::JsonConfigStore` (`.yo-rc.json`)
/// - `reactor_adapters::config_store::MemoryConfigStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Read one key, `None` when unset.
    fn get(&self, key: &str) -> ReactorResult<Option<String>>;

    /// Write one key. The only mutation point for project configuration.
    fn set(&self, key: &str, value: &str) -> ReactorResult<()>;

    /// All stored `(key, value)` pairs.
    fn entries(&self) -> ReactorResult<Vec<(String, String)>>;

    /// Where the configuration lives, if it is backed by a file.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}

/// Where a template body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Builtin,
    Override(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Override(path) => write!(f, "override ({})", path.display()),
        }
    }
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `reactor_adapters::template_store::BuiltinTemplateStore` (embedded bodies)
/// - `reactor_adapters::template_store::LayeredTemplateStore` (directory overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Body of a template.
    ///
    /// # Errors
    ///
    /// `ApplicationError::TemplateNotFound` when `id` is unknown.
    fn get(&self, id: &str) -> ReactorResult<String>;

    /// Every id this store can serve, sorted.
    fn ids(&self) -> ReactorResult<Vec<String>>;

    fn origin(&self, _id: &str) -> TemplateOrigin {
        TemplateOrigin::Builtin
    }
}

/// Port for template rendering.
///
/// Implemented by:
/// - `reactor_adapters::renderer::PlaceholderRenderer` (`{{VAR}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template body with the given context.
    fn render(&self, body: &str, context: &RenderContext) -> ReactorResult<String>;
}

/// Result of handing one file to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    /// The file existed and the adapter's policy left it alone.
    Skipped,
}

impl WriteOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "create",
            Self::Overwritten => "force",
            Self::Skipped => "skip",
        }
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `reactor_adapters::filesystem::LocalFilesystem` (production)
/// - `reactor_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are relative to the adapter's project root
/// - Parent directories are created as needed
/// - Whether an existing file is replaced is the adapter's decision
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Write content to a file.
    fn write(&self, path: &Path, content: &str) -> ReactorResult<WriteOutcome>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

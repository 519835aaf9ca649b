//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template id the resolver produced has no body in the store.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// A rendered source/test pair disagrees on the exported name.
    #[error("Templates for {class_name} are inconsistent: {reason}")]
    InconsistentTemplatePair { class_name: String, reason: String },

    /// Template override directory could not be read.
    #[error("Failed to load templates from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project configuration could not be read or written.
    #[error("Project config error: {reason}")]
    ConfigStoreError { reason: String },

    /// An in-memory adapter's lock was poisoned by a panicking writer.
    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No body registered for '{id}'"),
                "Check REACTOR_TEMPLATES_DIR for a misnamed override".into(),
            ],
            Self::InconsistentTemplatePair { .. } => vec![
                "The test template must import CLASS_NAME from MODULE_PATH".into(),
                "Check your template overrides against the built-ins (reactor list)".into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Unset REACTOR_TEMPLATES_DIR to use the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ConfigStoreError { .. } => vec![
                "Check that .yo-rc.json is valid JSON".into(),
                "Try: reactor init to recreate it".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::InconsistentTemplatePair { .. } => {
                ErrorCategory::Internal
            }
            Self::TemplateLoad { .. } | Self::ConfigStoreError { .. } => {
                ErrorCategory::Configuration
            }
            Self::FilesystemError { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `ReactorError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("unknown config asset '{name}'")]
    UnknownConfigAsset { name: String },

    #[error("unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    #[error("invalid value '{value}' for '{key}' (expected {expected})")]
    InvalidConfigValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unknown artifact kind '{kind}'")]
    UnknownArtifactKind { kind: String },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("{kind} has no template for architecture '{}'", .architecture.as_deref().unwrap_or("<unset>"))]
    UnsupportedArchitecture {
        kind: &'static str,
        architecture: Option<String>,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("two outputs target the same path: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("path leaves the project directory: {path}")]
    PathOutsideProject { path: String },
}

impl DomainError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Names must be non-empty JavaScript identifiers".into(),
                "Use '/' to place an artifact in a sub-directory, e.g. Card/CardItem".into(),
            ],
            Self::UnknownConfigAsset { .. } => vec![
                "Known config assets: package, webpack, webpack-development, webpack-production,"
                    .into(),
                "  karma, makefile, babelrc, editorconfig, eslintignore, gitignore, jshintrc,"
                    .into(),
                "  nvmrc, index, main-style, main-script, routers, constants, url-helper,".into(),
                "  phantomjs-shims, react-addons, mock-app".into(),
            ],
            Self::InvalidConfigValue { key, expected, .. } => vec![
                format!("'{key}' must be one of: {expected}"),
                format!("Try: reactor config set {key} <value>"),
            ],
            Self::UnknownConfigKey { .. } => vec![
                "Known keys: app-name, architecture, styles-language, styles-extension, appPath"
                    .into(),
            ],
            Self::UnknownArtifactKind { .. } => vec![
                "Known kinds: store, action, component, class, dispatcher, config".into(),
            ],
            Self::UnsupportedArchitecture { kind, architecture } => match architecture {
                None => vec![
                    format!("Generating a {kind} requires an architecture"),
                    "Try: reactor config set architecture flux".into(),
                ],
                Some(_) if *kind == "dispatcher" => vec![
                    "Dispatchers only exist in flux projects".into(),
                    "Reflux actions dispatch directly to stores".into(),
                ],
                Some(_) => vec!["Supported architectures: flux, reflux".into()],
            },
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec!["Generated output paths must be unique and relative".into()]
            }
            Self::PathOutsideProject { .. } => vec![
                "'..' is not allowed in appPath or --subdir".into(),
                "Try: reactor config get appPath".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidConfigValue { .. }
            | Self::UnknownArtifactKind { .. }
            | Self::PathOutsideProject { .. } => ErrorCategory::Validation,
            Self::UnsupportedArchitecture { .. } => ErrorCategory::Compatibility,
            Self::UnknownConfigAsset { .. } | Self::UnknownConfigKey { .. } => {
                ErrorCategory::NotFound
            }
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}

//! Immutable snapshot of a project's persisted configuration.
//!
//! Values are kept exactly as stored. Parsing into enums happens in the
//! accessors so that a bad value surfaces where it matters: an unknown
//! architecture only fails when a store, action or dispatcher is requested.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::names::{capitalize_file, validate_app_name};
use crate::domain::value_objects::{Architecture, ExtensionPolicy, StylesLanguage};

pub const KEY_ARCHITECTURE: &str = "architecture";
pub const KEY_STYLES_LANGUAGE: &str = "styles-language";
pub const KEY_STYLES_EXTENSION: &str = "styles-extension";
pub const KEY_APP_NAME: &str = "app-name";
pub const KEY_APP_PATH: &str = "appPath";

/// Style keys written alongside `styles-language` for projects created by
/// the original generator. Derived at init time, never set directly.
pub const KEY_LEGACY_STYLES_LANGUAGE: &str = "stylesLanguage";
pub const KEY_CSS_EXTENSION: &str = "cssExtension";
pub const DERIVED_KEYS: [&str; 2] = [KEY_LEGACY_STYLES_LANGUAGE, KEY_CSS_EXTENSION];

/// Every key the tool reads or writes, in display order.
pub const KNOWN_KEYS: [&str; 5] = [
    KEY_APP_NAME,
    KEY_ARCHITECTURE,
    KEY_STYLES_LANGUAGE,
    KEY_STYLES_EXTENSION,
    KEY_APP_PATH,
];

pub const DEFAULT_APP_PATH: &str = "src";

const DISPATCHER_SUFFIX: &str = "AppDispatcher";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(rename = "app-name", default, skip_serializing_if = "Option::is_none")]
    app_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    architecture: Option<String>,

    #[serde(
        rename = "styles-language",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    styles_language: Option<String>,

    #[serde(
        rename = "styles-extension",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    styles_extension: Option<String>,

    #[serde(rename = "appPath", default, skip_serializing_if = "Option::is_none")]
    app_path: Option<String>,
}

impl ProjectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot by reading each known key through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            app_name: lookup(KEY_APP_NAME),
            architecture: lookup(KEY_ARCHITECTURE),
            styles_language: lookup(KEY_STYLES_LANGUAGE)
                .or_else(|| lookup(KEY_LEGACY_STYLES_LANGUAGE)),
            styles_extension: lookup(KEY_STYLES_EXTENSION),
            app_path: lookup(KEY_APP_PATH),
        }
    }

    pub fn with_app_name(mut self, value: impl Into<String>) -> Self {
        self.app_name = Some(value.into());
        self
    }

    pub fn with_architecture(mut self, value: impl Into<String>) -> Self {
        self.architecture = Some(value.into());
        self
    }

    pub fn with_styles_language(mut self, value: impl Into<String>) -> Self {
        self.styles_language = Some(value.into());
        self
    }

    pub fn with_styles_extension(mut self, value: impl Into<String>) -> Self {
        self.styles_extension = Some(value.into());
        self
    }

    pub fn with_app_path(mut self, value: impl Into<String>) -> Self {
        self.app_path = Some(value.into());
        self
    }

    /// Raw value of a known key, `None` when unset or unknown.
    pub fn raw(&self, key: &str) -> Option<&str> {
        match key {
            KEY_APP_NAME => self.app_name.as_deref(),
            KEY_ARCHITECTURE => self.architecture.as_deref(),
            KEY_STYLES_LANGUAGE => self.styles_language.as_deref(),
            KEY_STYLES_EXTENSION => self.styles_extension.as_deref(),
            KEY_APP_PATH => self.app_path.as_deref(),
            _ => None,
        }
    }

    /// Set `(key, value)` pairs, skipping unset keys.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        KNOWN_KEYS
            .iter()
            .filter_map(|k| self.raw(k).map(|v| (*k, v)))
            .collect()
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn app_path(&self) -> &str {
        self.app_path
            .as_deref()
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_APP_PATH)
    }

    /// The architecture a `kind` needs.
    ///
    /// # Errors
    ///
    /// `UnsupportedArchitecture` when the key is unset or holds a value no
    /// template exists for.
    pub fn architecture_for(&self, kind: &'static str) -> Result<Architecture, DomainError> {
        let raw = self.architecture.as_deref().map(str::trim).filter(|s| !s.is_empty());
        raw.and_then(|value| value.parse().ok())
            .ok_or_else(|| DomainError::UnsupportedArchitecture {
                kind,
                architecture: raw.map(str::to_string),
            })
    }

    /// The architecture, if one is configured.
    ///
    /// Config assets render for any project; an unset architecture means a
    /// plain React project, but a set-but-unknown value is still rejected.
    pub fn architecture(&self) -> Result<Option<Architecture>, DomainError> {
        match self.architecture.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }

    pub fn styles_language(&self) -> Result<StylesLanguage, DomainError> {
        match self.styles_language.as_deref() {
            Some(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(StylesLanguage::default()),
        }
    }

    pub fn extension_policy(&self) -> Result<ExtensionPolicy, DomainError> {
        match self.styles_extension.as_deref() {
            Some(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(ExtensionPolicy::default()),
        }
    }

    /// File extension of style assets (`css`, `scss`, `styl`, ...).
    pub fn style_extension(&self) -> Result<&'static str, DomainError> {
        Ok(self.styles_language()?.extension(self.extension_policy()?))
    }

    /// Exported name of the flux dispatcher: `capitalize_file(app-name)`
    /// followed by `AppDispatcher`.
    ///
    /// # Errors
    ///
    /// `InvalidName` when `app-name` is unset or fails [`validate_app_name`].
    pub fn dispatcher_name(&self) -> Result<String, DomainError> {
        let app_name = self.app_name().ok_or_else(|| {
            DomainError::invalid_name("", "a dispatcher name needs 'app-name' to be set")
        })?;
        validate_app_name(app_name)?;
        Ok(format!("{}{DISPATCHER_SUFFIX}", capitalize_file(app_name)))
    }
}

//! User configuration.
//!
//! [`AppConfig`] holds per-user defaults for `reactor init` and output
//! settings. It is loaded once at startup and passed down by value. It is
//! unrelated to the per-project `.yo-rc.json`, which the core crate owns
//! through its `ConfigStore` port.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `REACTOR__DEFAULTS__ARCHITECTURE=flux`
//! 3. Config file: `--config FILE`, else `<config dir>/config.toml`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_PREFIX: &str = "REACTOR";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for `reactor init`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// `flux`, `reflux` or `none`.
    pub architecture: Option<String>,
    pub styles_language: Option<String>,
    pub app_path: Option<String>,
    pub full_extensions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Override directory; `REACTOR_TEMPLATES_DIR` is used when unset.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// A file given with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading user configuration");

        Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode default config")?,
            )
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .with_context(|| format!("Failed to read config from '{}'", path.display()))?
            .try_deserialize()
            .context("Failed to deserialize config")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.reactor.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "reactor", "reactor")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".reactor.toml"))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise config")
    }

    /// Write this configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let body = self.to_toml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, body)
            .with_context(|| format!("Failed to write config to '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.architecture, None);
        assert!(!cfg.defaults.full_extensions);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\narchitecture = \"reflux\"\nstyles_language = \"less\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.architecture.as_deref(), Some("reflux"));
        assert_eq!(cfg.defaults.styles_language.as_deref(), Some("less"));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.templates.dir, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut cfg = AppConfig::default();
        cfg.defaults.architecture = Some("flux".into());
        cfg.defaults.full_extensions = true;

        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}

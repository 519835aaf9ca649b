//! Filesystem-based template override loader.
//!
//! Walks an override directory and maps every file to a template id equal
//! to its path relative to the directory, with `/` separators.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! ├── templates.toml          ← manifest (optional)
//! ├── store/
//! │   └── flux.js             ← shadows the built-in `store/flux.js`
//! └── shared/
//!     └── component.jsx       ← mapped by the manifest
//! ```
//!
//! # `templates.toml` format
//!
//! ```toml
//! # Serve a file under a different id.
//! [aliases]
//! "component/component.js" = "shared/component.jsx"
//! ```
//!
//! Hidden files and the manifest itself are never served as templates.

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use reactor_core::{application::ApplicationError, domain::variant::catalog_entry};

pub const MANIFEST_FILE: &str = "templates.toml";

/// Deserialised representation of `templates.toml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct TemplateManifest {
    /// `template id → file path relative to the override directory`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// One override body and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub path: PathBuf,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("templates directory not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to walk '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{}': {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LoadError {
    fn path(&self) -> &Path {
        match self {
            Self::Missing(path)
            | Self::Walk { path, .. }
            | Self::Read { path, .. }
            | Self::Manifest { path, .. } => path,
        }
    }
}

impl From<LoadError> for ApplicationError {
    fn from(e: LoadError) -> Self {
        ApplicationError::TemplateLoad {
            path: e.path().to_path_buf(),
            reason: e.to_string(),
        }
    }
}

/// Loads override bodies from one directory.
pub struct TemplateDirLoader {
    templates_dir: PathBuf,
}

impl TemplateDirLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Load every file under the directory, then apply manifest aliases.
    ///
    /// # Errors
    ///
    /// Fails when the directory is missing, unreadable, or the manifest does
    /// not parse. Ids no resolver asks for are kept but logged.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> Result<HashMap<String, LoadedTemplate>, LoadError> {
        if !self.templates_dir.is_dir() {
            return Err(LoadError::Missing(self.templates_dir.clone()));
        }

        let mut templates = HashMap::new();

        let walker = WalkDir::new(&self.templates_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        for entry in walker {
            let entry = entry.map_err(|source| LoadError::Walk {
                path: self.templates_dir.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(id) = self.template_id(entry.path()) else {
                continue;
            };
            if id == MANIFEST_FILE {
                continue;
            }

            let body = read(entry.path())?;
            debug!(%id, "loaded override");
            templates.insert(
                id,
                LoadedTemplate {
                    path: entry.path().to_path_buf(),
                    body,
                },
            );
        }

        for (id, relative) in self.manifest()?.aliases {
            let path = self.templates_dir.join(&relative);
            let body = read(&path)?;
            debug!(%id, file = %relative, "loaded aliased override");
            templates.insert(id, LoadedTemplate { path, body });
        }

        for id in templates.keys() {
            if catalog_entry(id).is_none() {
                warn!(%id, "override does not shadow any known template");
            }
        }

        debug!(count = templates.len(), "finished loading overrides");
        Ok(templates)
    }

    fn manifest(&self) -> Result<TemplateManifest, LoadError> {
        let path = self.templates_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(TemplateManifest::default());
        }
        let raw = read(&path)?;
        toml::from_str(&raw).map_err(|source| LoadError::Manifest { path, source })
    }

    /// Relative path with `/` separators, `None` for non-UTF-8 names.
    fn template_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.templates_dir).ok()?;
        let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
        Some(parts?.join("/"))
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, body: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn ids_are_relative_paths() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "store/flux.js", "custom flux store");
        write(dir.path(), "styles/main.css", ".x {}");

        let loaded = TemplateDirLoader::new(dir.path()).load_all().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["store/flux.js"].body, "custom flux store");
        assert_eq!(loaded["store/flux.js"].path, dir.path().join("store/flux.js"));
    }

    #[test]
    fn hidden_files_and_manifest_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".git/config", "x");
        write(dir.path(), ".DS_Store", "x");
        write(dir.path(), MANIFEST_FILE, "");

        let loaded = TemplateDirLoader::new(dir.path()).load_all().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn manifest_aliases_map_ids_to_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "shared/component.jsx", "aliased");
        write(
            dir.path(),
            MANIFEST_FILE,
            "[aliases]\n\"component/component.js\" = \"shared/component.jsx\"\n",
        );

        let loaded = TemplateDirLoader::new(dir.path()).load_all().unwrap();
        assert_eq!(loaded["component/component.js"].body, "aliased");
    }

    #[test]
    fn broken_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_FILE, "[aliases\n");

        let err = TemplateDirLoader::new(dir.path()).load_all().unwrap_err();
        assert!(matches!(err, LoadError::Manifest { .. }));
    }

    #[test]
    fn missing_alias_target_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "[aliases]\n\"store/flux.js\" = \"nope.js\"\n",
        );

        let err = TemplateDirLoader::new(dir.path()).load_all().unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = TemplateDirLoader::new(dir.path().join("absent"))
            .load_all()
            .unwrap_err();
        assert!(matches!(err, LoadError::Missing(_)));

        let app_err: ApplicationError = err.into();
        assert!(matches!(app_err, ApplicationError::TemplateLoad { .. }));
    }
}

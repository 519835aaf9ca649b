//! `.yo-rc.json` backed configuration.
//!
//! The file holds one object per generator namespace:
//!
//! ```json
//! {
//!   "generator-reactor": {
//!     "architecture": "flux",
//!     "app-name": "temp-test"
//!   }
//! }
//! ```
//!
//! Only the `generator-reactor` object is read or written. Other namespaces
//! are preserved when saving.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use reactor_core::{
    application::{ApplicationError, ports::ConfigStore},
    error::ReactorResult,
};

pub const CONFIG_FILE: &str = ".yo-rc.json";
pub const NAMESPACE: &str = "generator-reactor";

/// Configuration stored in `<project>/.yo-rc.json`.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Store for the project rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(CONFIG_FILE),
        }
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk up from `start` to the nearest directory holding `.yo-rc.json`.
    pub fn find_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }

    fn load_document(&self) -> ReactorResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.error(format!("failed to read: {e}"))),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(self.error("top level is not a JSON object".into())),
            Err(e) => Err(self.error(format!("invalid JSON: {e}"))),
        }
    }

    fn namespace(&self) -> ReactorResult<Map<String, Value>> {
        let mut document = self.load_document()?;
        match document.remove(NAMESPACE) {
            None => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(self.error(format!("'{NAMESPACE}' is not a JSON object"))),
        }
    }

    fn error(&self, reason: String) -> reactor_core::error::ReactorError {
        ApplicationError::ConfigStoreError {
            reason: format!("{}: {reason}", self.path.display()),
        }
        .into()
    }
}

/// Non-string scalars written by hand are read back as their JSON text.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        _ => None,
    }
}

impl ConfigStore for JsonConfigStore {
    fn get(&self, key: &str) -> ReactorResult<Option<String>> {
        Ok(self.namespace()?.get(key).and_then(as_text))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn set(&self, key: &str, value: &str) -> ReactorResult<()> {
        let mut document = self.load_document()?;

        let entry = document
            .entry(NAMESPACE)
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(namespace) = entry else {
            return Err(self.error(format!("'{NAMESPACE}' is not a JSON object")));
        };
        namespace.insert(key.to_string(), Value::String(value.to_string()));

        let mut body = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| self.error(format!("failed to serialize: {e}")))?;
        body.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| self.error(format!("failed to create directory: {e}")))?;
        }
        fs::write(&self.path, body).map_err(|e| self.error(format!("failed to write: {e}")))?;

        debug!("config value stored");
        Ok(())
    }

    fn entries(&self) -> ReactorResult<Vec<(String, String)>> {
        Ok(self
            .namespace()?
            .iter()
            .filter_map(|(k, v)| as_text(v).map(|v| (k.clone(), v)))
            .collect())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactor_core::error::ReactorError;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path());

        assert_eq!(store.get("architecture").unwrap(), None);
        assert!(store.entries().unwrap().is_empty());
        assert_eq!(store.location(), Some(dir.path().join(CONFIG_FILE)));
    }

    #[test]
    fn set_then_get_round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path());

        store.set("architecture", "flux").unwrap();
        store.set("app-name", "temp-test").unwrap();

        let reopened = JsonConfigStore::new(dir.path());
        assert_eq!(reopened.get("architecture").unwrap().as_deref(), Some("flux"));

        let raw = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc[NAMESPACE]["app-name"], "temp-test");
    }

    #[test]
    fn other_namespaces_are_preserved() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"generator-other": {"x": 1}, "generator-reactor": {"appPath": "app"}}"#,
        )
        .unwrap();
        let store = JsonConfigStore::new(dir.path());

        store.set("architecture", "reflux").unwrap();

        let raw = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["generator-other"]["x"], 1);
        assert_eq!(doc[NAMESPACE]["appPath"], "app");
        assert_eq!(doc[NAMESPACE]["architecture"], "reflux");
    }

    #[test]
    fn invalid_json_is_a_config_store_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ nope").unwrap();

        let err = JsonConfigStore::new(dir.path()).get("architecture").unwrap_err();
        assert!(matches!(
            err,
            ReactorError::Application(ApplicationError::ConfigStoreError { .. })
        ));
    }

    #[test]
    fn find_root_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{}").unwrap();
        let nested = dir.path().join("src/scripts/stores");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            JsonConfigStore::find_root(&nested).as_deref(),
            Some(dir.path())
        );
    }
}

//! In-memory configuration for tests and dry runs.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use reactor_core::{
    application::{ApplicationError, ports::ConfigStore},
    error::ReactorResult,
};

const RESOURCE: &str = "memory config store";

/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `pairs`.
    pub fn with_entries<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> ReactorResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ReactorResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self) -> ReactorResult<Vec<(String, String)>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        Ok(entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

//! Built-in templates shadowed by files from an override directory.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::{debug, info, instrument};

use reactor_core::{
    application::{
        ApplicationError,
        ports::{TemplateOrigin, TemplateStore},
    },
    error::ReactorResult,
};

use crate::{
    builtin_templates,
    template_loader::{LoadedTemplate, TemplateDirLoader},
};

const RESOURCE: &str = "template overrides";

/// Thread-safe store that answers from overrides first, then built-ins.
#[derive(Clone)]
pub struct LayeredTemplateStore {
    loader: Option<Arc<TemplateDirLoader>>,
    overrides: Arc<RwLock<HashMap<String, LoadedTemplate>>>,
}

impl LayeredTemplateStore {
    /// Store with no override directory.
    pub fn builtin_only() -> Self {
        Self {
            loader: None,
            overrides: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store layered over `dir`, loaded eagerly.
    ///
    /// # Errors
    ///
    /// `ApplicationError::TemplateLoad` when the directory cannot be read.
    pub fn with_overrides(dir: impl Into<PathBuf>) -> ReactorResult<Self> {
        let store = Self {
            loader: Some(Arc::new(TemplateDirLoader::new(dir))),
            overrides: Arc::new(RwLock::new(HashMap::new())),
        };
        store.reload()?;
        Ok(store)
    }

    /// Pick the override directory with [`builtin_templates::override_dir`]
    /// and build the store from it.
    pub fn discover(explicit: Option<&Path>) -> ReactorResult<Self> {
        match builtin_templates::override_dir(explicit) {
            Some(dir) => Self::with_overrides(dir),
            None => Ok(Self::builtin_only()),
        }
    }

    /// Re-read the override directory, replacing every loaded override.
    #[instrument(skip(self))]
    pub fn reload(&self) -> ReactorResult<usize> {
        let Some(loader) = &self.loader else {
            return Ok(0);
        };

        let loaded = loader.load_all().map_err(ApplicationError::from)?;
        let count = loaded.len();

        let mut overrides = self
            .overrides
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        *overrides = loaded;

        info!(count, dir = %loader.templates_dir().display(), "template overrides loaded");
        Ok(count)
    }

    pub fn override_count(&self) -> ReactorResult<usize> {
        let overrides = self
            .overrides
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        Ok(overrides.len())
    }
}

impl Default for LayeredTemplateStore {
    fn default() -> Self {
        Self::builtin_only()
    }
}

impl TemplateStore for LayeredTemplateStore {
    fn get(&self, id: &str) -> ReactorResult<String> {
        let overrides = self
            .overrides
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;

        if let Some(template) = overrides.get(id) {
            debug!(%id, path = %template.path.display(), "serving override");
            return Ok(template.body.clone());
        }

        builtin_templates::get(id)
            .map(str::to_string)
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() }.into())
    }

    fn ids(&self) -> ReactorResult<Vec<String>> {
        let overrides = self
            .overrides
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;

        let mut ids: Vec<String> = builtin_templates::ids()
            .map(str::to_string)
            .chain(overrides.keys().cloned())
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    fn origin(&self, id: &str) -> TemplateOrigin {
        self.overrides
            .read()
            .ok()
            .and_then(|overrides| overrides.get(id).map(|t| t.path.clone()))
            .map_or(TemplateOrigin::Builtin, TemplateOrigin::Override)
    }
}

//! Project Service - project-level use cases.
//!
//! Owns the `ConfigStore` port: takes configuration snapshots for
//! generation, persists settings at init time and backs `reactor config`.

use tracing::{info, instrument};

use crate::{
    application::{
        ports::ConfigStore,
        services::generator_service::{GeneratorService, WriteReport},
    },
    domain::{
        Architecture, ArtifactKind, ArtifactRequest, ConfigAsset, DomainError, ExtensionPolicy,
        ProjectConfig, RenderedOutput, StylesLanguage,
        config::{
            DEFAULT_APP_PATH, DERIVED_KEYS, KEY_APP_NAME, KEY_APP_PATH, KEY_ARCHITECTURE,
            KEY_CSS_EXTENSION, KEY_LEGACY_STYLES_LANGUAGE, KEY_STYLES_EXTENSION,
            KEY_STYLES_LANGUAGE, KNOWN_KEYS,
        },
        names::{validate_app_name, validate_relative_dir},
    },
    error::ReactorResult,
};

/// Answers collected by `reactor init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub app_name: String,
    /// `None` for a plain React project without flux or reflux.
    pub architecture: Option<Architecture>,
    pub styles_language: StylesLanguage,
    pub extension_policy: ExtensionPolicy,
    pub app_path: String,
}

impl ProjectSettings {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            architecture: None,
            styles_language: StylesLanguage::default(),
            extension_policy: ExtensionPolicy::default(),
            app_path: DEFAULT_APP_PATH.to_string(),
        }
    }

    pub fn with_architecture(mut self, architecture: Option<Architecture>) -> Self {
        self.architecture = architecture;
        self
    }

    pub fn with_styles_language(mut self, language: StylesLanguage) -> Self {
        self.styles_language = language;
        self
    }

    pub fn with_extension_policy(mut self, policy: ExtensionPolicy) -> Self {
        self.extension_policy = policy;
        self
    }

    pub fn with_app_path(mut self, app_path: impl Into<String>) -> Self {
        self.app_path = app_path.into();
        self
    }

    /// Reject settings that would produce broken identifiers or write
    /// outside the project.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_app_name(&self.app_name)?;
        validate_relative_dir(self.app_path.trim_matches('/'))
    }

    /// Key/value pairs persisted by `init`.
    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (KEY_APP_NAME, self.app_name.clone()),
            (KEY_STYLES_LANGUAGE, self.styles_language.to_string()),
            (KEY_STYLES_EXTENSION, self.extension_policy.to_string()),
            (KEY_APP_PATH, self.app_path.clone()),
            (KEY_LEGACY_STYLES_LANGUAGE, self.styles_language.to_string()),
            (
                KEY_CSS_EXTENSION,
                self.styles_language
                    .extension(self.extension_policy)
                    .to_string(),
            ),
        ];
        if let Some(architecture) = self.architecture {
            entries.push((KEY_ARCHITECTURE, architecture.to_string()));
        }
        entries
    }

    /// The snapshot `init` would produce, without touching the store.
    pub fn to_config(&self) -> ProjectConfig {
        let entries = self.entries();
        ProjectConfig::from_lookup(|key| {
            entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        })
    }
}

/// Read the store into an immutable snapshot.
pub fn snapshot(store: &dyn ConfigStore) -> ReactorResult<ProjectConfig> {
    let entries = store.entries()?;
    Ok(ProjectConfig::from_lookup(|key| {
        entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }))
}

pub struct ProjectService {
    config: Box<dyn ConfigStore>,
    generator: GeneratorService,
}

impl ProjectService {
    pub fn new(config: Box<dyn ConfigStore>, generator: GeneratorService) -> Self {
        Self { config, generator }
    }

    pub fn generator(&self) -> &GeneratorService {
        &self.generator
    }

    pub fn snapshot(&self) -> ReactorResult<ProjectConfig> {
        snapshot(self.config.as_ref())
    }

    /// Render every file `init` writes for `config`.
    ///
    /// All config assets, plus the dispatcher for flux projects.
    pub fn plan(&self, config: &ProjectConfig) -> ReactorResult<Vec<RenderedOutput>> {
        let mut outputs = Vec::new();

        for asset in ConfigAsset::ALL {
            let request = ArtifactRequest::new(ArtifactKind::Config, asset.as_str());
            outputs.extend(self.generator.generate(&request, config)?);
        }

        if config.architecture()? == Some(Architecture::Flux) {
            let request = ArtifactRequest::new(ArtifactKind::Dispatcher, config.dispatcher_name()?);
            outputs.extend(self.generator.generate(&request, config)?);
        }

        Ok(outputs)
    }

    /// Persist `settings`, then write the project skeleton.
    #[instrument(skip_all, fields(app = %settings.app_name))]
    pub fn init(&self, settings: &ProjectSettings) -> ReactorResult<Vec<WriteReport>> {
        settings.validate()?;
        // Render first so a bad setting leaves the store untouched.
        self.plan(&settings.to_config())?;

        for (key, value) in settings.entries() {
            self.config.set(key, &value)?;
        }
        info!("Project configuration saved");

        let config = self.snapshot()?;
        let outputs = self.plan(&config)?;
        self.generator.emit(&outputs)
    }

    /// Snapshot the store and generate one artifact.
    pub fn generate(&self, request: &ArtifactRequest) -> ReactorResult<Vec<RenderedOutput>> {
        let config = self.snapshot()?;
        self.generator.generate(request, &config)
    }

    pub fn emit(&self, outputs: &[RenderedOutput]) -> ReactorResult<Vec<WriteReport>> {
        self.generator.emit(outputs)
    }

    pub fn get_value(&self, key: &str) -> ReactorResult<Option<String>> {
        ensure_known_key(key)?;
        self.config.get(key)
    }

    /// Store one value after checking it parses for its key.
    ///
    /// Changing the style language or extension policy also rewrites the
    /// derived `stylesLanguage` / `cssExtension` keys.
    pub fn set_value(&self, key: &str, value: &str) -> ReactorResult<()> {
        ensure_known_key(key)?;
        match key {
            KEY_ARCHITECTURE => {
                value.parse::<Architecture>()?;
            }
            KEY_STYLES_LANGUAGE => {
                value.parse::<StylesLanguage>()?;
            }
            KEY_STYLES_EXTENSION => {
                value.parse::<ExtensionPolicy>()?;
            }
            KEY_APP_NAME => validate_app_name(value)?,
            KEY_APP_PATH => validate_relative_dir(value.trim_matches('/'))?,
            _ => {
                if let Some(derived) = DERIVED_KEYS.iter().find(|k| **k == key) {
                    return Err(DomainError::InvalidConfigValue {
                        key: *derived,
                        value: value.to_string(),
                        expected: "a value derived from styles-language (set that instead)",
                    }
                    .into());
                }
            }
        }
        self.config.set(key, value)?;

        if key == KEY_STYLES_LANGUAGE || key == KEY_STYLES_EXTENSION {
            let config = self.snapshot()?;
            let language = config.styles_language()?;
            self.config
                .set(KEY_LEGACY_STYLES_LANGUAGE, language.as_str())?;
            self.config.set(KEY_CSS_EXTENSION, config.style_extension()?)?;
        }
        Ok(())
    }

    pub fn entries(&self) -> ReactorResult<Vec<(String, String)>> {
        self.config.entries()
    }

    pub fn location(&self) -> Option<std::path::PathBuf> {
        self.config.location()
    }
}

fn ensure_known_key(key: &str) -> Result<(), DomainError> {
    if KNOWN_KEYS.contains(&key) || DERIVED_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(DomainError::UnknownConfigKey {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockConfigStore, MockFilesystem, MockTemplateRenderer, MockTemplateStore, WriteOutcome,
    };
    use crate::error::ReactorError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn generator(writes: Arc<Mutex<Vec<String>>>) -> GeneratorService {
        let mut templates = MockTemplateStore::new();
        templates.expect_get().returning(|id| {
            Ok(match id {
                "dispatcher/dispatcher.js" => {
                    "const {{CLASS_NAME}} = new Dispatcher();\nexport default {{CLASS_NAME}};"
                        .to_string()
                }
                "dispatcher/dispatcher.spec.js" => {
                    "import {{CLASS_NAME}} from '{{MODULE_PATH}}';".to_string()
                }
                _ => "{{PACKAGE_NAME}}{{ARCHITECTURE_DEPENDENCIES}}".to_string(),
            })
        });

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|body, ctx| Ok(ctx.render(body)));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_write().returning(move |path, _| {
            writes
                .lock()
                .unwrap()
                .push(path.display().to_string());
            Ok(WriteOutcome::Created)
        });

        GeneratorService::new(Box::new(templates), Box::new(renderer), Box::new(fs))
    }

    /// A mock store backed by a shared map.
    fn config_store(map: Arc<Mutex<HashMap<String, String>>>) -> MockConfigStore {
        let mut store = MockConfigStore::new();
        let m = Arc::clone(&map);
        store
            .expect_set()
            .returning(move |k, v| {
                m.lock().unwrap().insert(k.to_string(), v.to_string());
                Ok(())
            });
        let m = Arc::clone(&map);
        store.expect_get().returning(move |k| Ok(m.lock().unwrap().get(k).cloned()));
        let m = Arc::clone(&map);
        store.expect_entries().returning(move || {
            let mut entries: Vec<_> = m
                .lock()
                .unwrap()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            entries.sort();
            Ok(entries)
        });
        store
    }

    #[test]
    fn flux_init_writes_assets_and_dispatcher() {
        let map = Arc::new(Mutex::new(HashMap::new()));
        let writes = Arc::new(Mutex::new(Vec::new()));
        let service = ProjectService::new(
            Box::new(config_store(Arc::clone(&map))),
            generator(Arc::clone(&writes)),
        );

        let settings =
            ProjectSettings::new("temp-test").with_architecture(Some(Architecture::Flux));
        let reports = service.init(&settings).unwrap();

        assert_eq!(reports.len(), ConfigAsset::ALL.len() + 2);
        let writes = writes.lock().unwrap();
        assert!(writes.contains(&"package.json".to_string()));
        assert!(writes.contains(&"src/scripts/dispatcher/TempTestAppDispatcher.js".to_string()));
        assert!(writes.contains(&"test/spec/dispatcher/TempTestAppDispatcher.js".to_string()));
        assert!(writes.contains(&"src/styles/main.css".to_string()));

        let map = map.lock().unwrap();
        assert_eq!(map.get(KEY_ARCHITECTURE).map(String::as_str), Some("flux"));
        assert_eq!(map.get(KEY_STYLES_LANGUAGE).map(String::as_str), Some("css"));
        assert_eq!(map.get(KEY_APP_PATH).map(String::as_str), Some("src"));
    }

    #[test]
    fn plain_init_has_no_dispatcher() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let service = ProjectService::new(
            Box::new(config_store(Arc::new(Mutex::new(HashMap::new())))),
            generator(Arc::clone(&writes)),
        );

        let reports = service.init(&ProjectSettings::new("demo")).unwrap();
        assert_eq!(reports.len(), ConfigAsset::ALL.len());
        assert!(
            !writes
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.contains("dispatcher"))
        );
    }

    #[test]
    fn plan_does_not_touch_the_store() {
        let mut store = MockConfigStore::new();
        store.expect_set().never();
        store.expect_entries().never();
        let writes = Arc::new(Mutex::new(Vec::new()));
        let service = ProjectService::new(Box::new(store), generator(Arc::clone(&writes)));

        let config = ProjectSettings::new("demo")
            .with_architecture(Some(Architecture::Reflux))
            .to_config();
        let outputs = service.plan(&config).unwrap();

        let package = outputs
            .iter()
            .find(|o| o.path.ends_with("package.json"))
            .unwrap();
        assert!(package.content.contains("reflux"));
        assert!(!package.content.contains("\"flux\""));
        assert!(writes.lock().unwrap().is_empty());
    }

    #[test]
    fn set_value_rejects_unknown_keys_and_values() {
        let mut store = MockConfigStore::new();
        store.expect_set().never();
        let service = ProjectService::new(
            Box::new(store),
            generator(Arc::new(Mutex::new(Vec::new()))),
        );

        assert!(matches!(
            service.set_value("theme", "dark"),
            Err(ReactorError::Domain(DomainError::UnknownConfigKey { .. }))
        ));
        assert!(matches!(
            service.set_value(KEY_ARCHITECTURE, "redux"),
            Err(ReactorError::Domain(DomainError::InvalidConfigValue { .. }))
        ));
    }

    #[test]
    fn init_rejects_bad_settings_before_persisting() {
        let mut store = MockConfigStore::new();
        store.expect_set().never();
        let writes = Arc::new(Mutex::new(Vec::new()));
        let service = ProjectService::new(Box::new(store), generator(Arc::clone(&writes)));

        for name in ["foo/bar", "2048-clone"] {
            let settings = ProjectSettings::new(name).with_architecture(Some(Architecture::Flux));
            let err = service.init(&settings).unwrap_err();
            assert!(
                matches!(err, ReactorError::Domain(DomainError::InvalidName { .. })),
                "{name}: {err:?}"
            );
            assert!(err.to_string().contains("app-name"));
        }

        let settings = ProjectSettings::new("demo").with_app_path("../../elsewhere");
        assert!(matches!(
            service.init(&settings),
            Err(ReactorError::Domain(DomainError::PathOutsideProject { .. }))
        ));
        assert!(writes.lock().unwrap().is_empty());
    }

    #[test]
    fn set_value_validates_app_name_and_path() {
        let mut store = MockConfigStore::new();
        store.expect_set().never();
        let service = ProjectService::new(
            Box::new(store),
            generator(Arc::new(Mutex::new(Vec::new()))),
        );

        assert!(matches!(
            service.set_value(KEY_APP_NAME, "foo/bar"),
            Err(ReactorError::Domain(DomainError::InvalidName { .. }))
        ));
        assert!(matches!(
            service.set_value(KEY_APP_PATH, "../outside"),
            Err(ReactorError::Domain(DomainError::PathOutsideProject { .. }))
        ));
        assert!(matches!(
            service.set_value(KEY_CSS_EXTENSION, "sty"),
            Err(ReactorError::Domain(DomainError::InvalidConfigValue { .. }))
        ));
    }

    #[test]
    fn init_and_set_keep_derived_style_keys() {
        let map = Arc::new(Mutex::new(HashMap::new()));
        let service = ProjectService::new(
            Box::new(config_store(Arc::clone(&map))),
            generator(Arc::new(Mutex::new(Vec::new()))),
        );

        let settings = ProjectSettings::new("shop").with_styles_language(StylesLanguage::Stylus);
        service.init(&settings).unwrap();
        {
            let map = map.lock().unwrap();
            assert_eq!(map.get(KEY_LEGACY_STYLES_LANGUAGE).map(String::as_str), Some("stylus"));
            assert_eq!(map.get(KEY_CSS_EXTENSION).map(String::as_str), Some("styl"));
        }

        service.set_value(KEY_STYLES_EXTENSION, "full").unwrap();
        assert_eq!(
            map.lock().unwrap().get(KEY_CSS_EXTENSION).map(String::as_str),
            Some("stylus")
        );
        assert_eq!(
            service.get_value(KEY_CSS_EXTENSION).unwrap().as_deref(),
            Some("stylus")
        );
    }

    #[test]
    fn snapshot_reads_entries() {
        let map = Arc::new(Mutex::new(HashMap::from([
            (KEY_ARCHITECTURE.to_string(), "reflux".to_string()),
            (KEY_STYLES_LANGUAGE.to_string(), "less".to_string()),
        ])));
        let store = config_store(map);
        let config = snapshot(&store).unwrap();
        assert_eq!(config.architecture().unwrap(), Some(Architecture::Reflux));
        assert_eq!(config.style_extension().unwrap(), "less");
    }
}

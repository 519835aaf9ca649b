//! Template variant resolution.
//!
//! Maps `(artifact kind, configuration)` to the templates that produce the
//! artifact. Resolution is a pure function of its inputs: the same request
//! against the same snapshot always yields the same [`ResolvedVariant`].
//!
//! ```text
//! kind        flux                 reflux           unset / other
//! ─────────── ──────────────────── ──────────────── ───────────────────────
//! store       FluxStore            RefluxStore      UnsupportedArchitecture
//! action      FluxActionCreators   RefluxActions    UnsupportedArchitecture
//! dispatcher  Dispatcher           Unsupported...   UnsupportedArchitecture
//! component   Component (+ style)  same             same
//! class       Class                same             same
//! config      ConfigFile(asset)    same             same
//! ```

use std::fmt;

use crate::domain::config::ProjectConfig;
use crate::domain::error::DomainError;
use crate::domain::names::EntityNaming;
use crate::domain::request::{ArtifactRequest, OutputRole};
use crate::domain::value_objects::{Architecture, ArtifactKind, ConfigAsset, StylesLanguage};

/// Stable identifier of a template body, shaped like a relative path
/// (`store/flux.js`). Template stores key their bodies by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(&'static str);

impl TemplateId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Every template the resolver can ask for.
pub mod ids {
    use super::TemplateId;

    pub const STORE_FLUX: TemplateId = TemplateId::new("store/flux.js");
    pub const STORE_FLUX_SPEC: TemplateId = TemplateId::new("store/flux.spec.js");
    pub const STORE_REFLUX: TemplateId = TemplateId::new("store/reflux.js");
    pub const STORE_REFLUX_SPEC: TemplateId = TemplateId::new("store/reflux.spec.js");

    pub const ACTION_FLUX: TemplateId = TemplateId::new("action/flux.js");
    pub const ACTION_FLUX_SPEC: TemplateId = TemplateId::new("action/flux.spec.js");
    pub const ACTION_REFLUX: TemplateId = TemplateId::new("action/reflux.js");
    pub const ACTION_REFLUX_SPEC: TemplateId = TemplateId::new("action/reflux.spec.js");

    pub const COMPONENT: TemplateId = TemplateId::new("component/component.js");
    pub const COMPONENT_SPEC: TemplateId = TemplateId::new("component/component.spec.js");
    pub const CLASS: TemplateId = TemplateId::new("class/class.js");
    pub const CLASS_SPEC: TemplateId = TemplateId::new("class/class.spec.js");
    pub const DISPATCHER: TemplateId = TemplateId::new("dispatcher/dispatcher.js");
    pub const DISPATCHER_SPEC: TemplateId = TemplateId::new("dispatcher/dispatcher.spec.js");

    pub const STYLE_CSS: TemplateId = TemplateId::new("styles/main.css");
    pub const STYLE_SASS: TemplateId = TemplateId::new("styles/main.sass");
    pub const STYLE_SCSS: TemplateId = TemplateId::new("styles/main.scss");
    pub const STYLE_LESS: TemplateId = TemplateId::new("styles/main.less");
    pub const STYLE_STYLUS: TemplateId = TemplateId::new("styles/main.styl");

    pub const PACKAGE_JSON: TemplateId = TemplateId::new("config/package.json");
    pub const WEBPACK_CONFIG: TemplateId = TemplateId::new("config/webpack.config.js");
    pub const WEBPACK_DEVELOPMENT: TemplateId = TemplateId::new("config/webpack.development.js");
    pub const WEBPACK_PRODUCTION: TemplateId = TemplateId::new("config/webpack.production.js");
    pub const KARMA_CONF: TemplateId = TemplateId::new("config/karma.conf.js");
    pub const MAKEFILE: TemplateId = TemplateId::new("config/Makefile");
    pub const BABELRC: TemplateId = TemplateId::new("config/babelrc");
    pub const EDITORCONFIG: TemplateId = TemplateId::new("config/editorconfig");
    pub const GITIGNORE: TemplateId = TemplateId::new("config/gitignore");
    pub const ESLINTIGNORE: TemplateId = TemplateId::new("config/eslintignore");
    pub const JSHINTRC: TemplateId = TemplateId::new("config/jshintrc");
    pub const NVMRC: TemplateId = TemplateId::new("config/nvmrc");
    pub const INDEX_HTML: TemplateId = TemplateId::new("config/index.html");

    pub const APP_MAIN: TemplateId = TemplateId::new("app/main.js");
    pub const APP_ROUTERS: TemplateId = TemplateId::new("app/routers.js");
    pub const APP_CONSTANTS: TemplateId = TemplateId::new("app/AppConstants.js");
    pub const APP_URL_HELPER: TemplateId = TemplateId::new("app/UrlHelper.js");

    pub const TEST_PHANTOMJS_SHIMS: TemplateId = TemplateId::new("test/phantomjs-shims.js");
    pub const TEST_REACT_ADDONS: TemplateId = TemplateId::new("test/react-addons.js");
    pub const TEST_MOCK_APP: TemplateId = TemplateId::new("test/MockApp.js");
}

/// Which template family an artifact is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    FluxStore,
    RefluxStore,
    FluxActionCreators,
    RefluxActions,
    Component,
    Class,
    Dispatcher,
    ConfigFile(ConfigAsset),
}

impl TemplateVariant {
    /// Select the variant for `kind`.
    ///
    /// `asset` is only consulted for [`ArtifactKind::Config`].
    ///
    /// # Errors
    ///
    /// `UnsupportedArchitecture` for stores, actions and dispatchers without
    /// a matching architecture.
    pub fn select(
        kind: ArtifactKind,
        asset: Option<ConfigAsset>,
        config: &ProjectConfig,
    ) -> Result<Self, DomainError> {
        let variant = match kind {
            ArtifactKind::Store => match config.architecture_for(kind.as_str())? {
                Architecture::Flux => Self::FluxStore,
                Architecture::Reflux => Self::RefluxStore,
            },
            ArtifactKind::Action => match config.architecture_for(kind.as_str())? {
                Architecture::Flux => Self::FluxActionCreators,
                Architecture::Reflux => Self::RefluxActions,
            },
            ArtifactKind::Dispatcher => match config.architecture_for(kind.as_str())? {
                Architecture::Flux => Self::Dispatcher,
                Architecture::Reflux => {
                    return Err(DomainError::UnsupportedArchitecture {
                        kind: kind.as_str(),
                        architecture: Some(Architecture::Reflux.to_string()),
                    });
                }
            },
            ArtifactKind::Component => Self::Component,
            ArtifactKind::Class => Self::Class,
            ArtifactKind::Config => match asset {
                Some(asset) => Self::ConfigFile(asset),
                None => {
                    return Err(DomainError::UnknownConfigAsset {
                        name: String::new(),
                    });
                }
            },
        };
        Ok(variant)
    }

    pub const fn kind(&self) -> ArtifactKind {
        match self {
            Self::FluxStore | Self::RefluxStore => ArtifactKind::Store,
            Self::FluxActionCreators | Self::RefluxActions => ArtifactKind::Action,
            Self::Component => ArtifactKind::Component,
            Self::Class => ArtifactKind::Class,
            Self::Dispatcher => ArtifactKind::Dispatcher,
            Self::ConfigFile(_) => ArtifactKind::Config,
        }
    }

    /// Suffix appended to the capitalized base name to form the class name.
    pub const fn class_suffix(&self) -> &'static str {
        match self {
            Self::FluxStore | Self::RefluxStore => "Store",
            Self::FluxActionCreators => "ActionCreators",
            Self::RefluxActions => "Actions",
            Self::Component | Self::Class | Self::Dispatcher | Self::ConfigFile(_) => "",
        }
    }

    pub fn source_template(&self, language: StylesLanguage) -> TemplateId {
        match self {
            Self::FluxStore => ids::STORE_FLUX,
            Self::RefluxStore => ids::STORE_REFLUX,
            Self::FluxActionCreators => ids::ACTION_FLUX,
            Self::RefluxActions => ids::ACTION_REFLUX,
            Self::Component => ids::COMPONENT,
            Self::Class => ids::CLASS,
            Self::Dispatcher => ids::DISPATCHER,
            Self::ConfigFile(asset) => config_template(*asset, language),
        }
    }

    pub const fn test_template(&self) -> Option<TemplateId> {
        match self {
            Self::FluxStore => Some(ids::STORE_FLUX_SPEC),
            Self::RefluxStore => Some(ids::STORE_REFLUX_SPEC),
            Self::FluxActionCreators => Some(ids::ACTION_FLUX_SPEC),
            Self::RefluxActions => Some(ids::ACTION_REFLUX_SPEC),
            Self::Component => Some(ids::COMPONENT_SPEC),
            Self::Class => Some(ids::CLASS_SPEC),
            Self::Dispatcher => Some(ids::DISPATCHER_SPEC),
            Self::ConfigFile(_) => None,
        }
    }
}

/// Style template for a language. Shared by component styles and the
/// project's main stylesheet.
pub const fn style_template(language: StylesLanguage) -> TemplateId {
    match language {
        StylesLanguage::Css => ids::STYLE_CSS,
        StylesLanguage::Sass => ids::STYLE_SASS,
        StylesLanguage::Scss => ids::STYLE_SCSS,
        StylesLanguage::Less => ids::STYLE_LESS,
        StylesLanguage::Stylus => ids::STYLE_STYLUS,
    }
}

fn config_template(asset: ConfigAsset, language: StylesLanguage) -> TemplateId {
    match asset {
        ConfigAsset::PackageJson => ids::PACKAGE_JSON,
        ConfigAsset::WebpackConfig => ids::WEBPACK_CONFIG,
        ConfigAsset::WebpackDevelopment => ids::WEBPACK_DEVELOPMENT,
        ConfigAsset::WebpackProduction => ids::WEBPACK_PRODUCTION,
        ConfigAsset::KarmaConf => ids::KARMA_CONF,
        ConfigAsset::Makefile => ids::MAKEFILE,
        ConfigAsset::Babelrc => ids::BABELRC,
        ConfigAsset::Editorconfig => ids::EDITORCONFIG,
        ConfigAsset::Eslintignore => ids::ESLINTIGNORE,
        ConfigAsset::Gitignore => ids::GITIGNORE,
        ConfigAsset::Jshintrc => ids::JSHINTRC,
        ConfigAsset::Nvmrc => ids::NVMRC,
        ConfigAsset::IndexHtml => ids::INDEX_HTML,
        ConfigAsset::MainStylesheet => style_template(language),
        ConfigAsset::MainScript => ids::APP_MAIN,
        ConfigAsset::Routers => ids::APP_ROUTERS,
        ConfigAsset::AppConstants => ids::APP_CONSTANTS,
        ConfigAsset::UrlHelper => ids::APP_URL_HELPER,
        ConfigAsset::PhantomjsShims => ids::TEST_PHANTOMJS_SHIMS,
        ConfigAsset::ReactAddons => ids::TEST_REACT_ADDONS,
        ConfigAsset::MockApp => ids::TEST_MOCK_APP,
    }
}

/// Everything the generator needs to render one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    pub variant: TemplateVariant,
    pub source: TemplateId,
    pub test: Option<TemplateId>,
    pub style: Option<TemplateId>,
    pub naming: EntityNaming,
    /// Set for every kind that imports or is the dispatcher (flux only).
    pub dispatcher_name: Option<String>,
    pub style_extension: &'static str,
}

/// Resolve the templates and naming rule for a request.
///
/// # Errors
///
/// - `UnsupportedArchitecture` per the table in the module docs
/// - `UnknownConfigAsset` for a config request naming no known asset
/// - `InvalidName` for a flux dispatcher without `app-name`
/// - `InvalidConfigValue` for unparseable style settings
pub fn resolve(
    request: &ArtifactRequest,
    config: &ProjectConfig,
) -> Result<ResolvedVariant, DomainError> {
    let asset = match request.kind {
        ArtifactKind::Config => Some(request.base_name.parse::<ConfigAsset>()?),
        _ => None,
    };

    let variant = TemplateVariant::select(request.kind, asset, config)?;
    let language = config.styles_language()?;
    let style_extension = config.style_extension()?;

    let needs_dispatcher = matches!(
        variant,
        TemplateVariant::FluxStore | TemplateVariant::FluxActionCreators | TemplateVariant::Dispatcher
    );
    let dispatcher_name = if needs_dispatcher {
        Some(config.dispatcher_name()?)
    } else {
        config.dispatcher_name().ok()
    };

    let naming = match variant {
        TemplateVariant::Dispatcher => match &dispatcher_name {
            Some(name) => EntityNaming::Fixed(name.clone()),
            None => EntityNaming::Suffixed(""),
        },
        other => EntityNaming::Suffixed(other.class_suffix()),
    };

    let style = request
        .kind
        .is_style_bearing()
        .then(|| style_template(language));

    Ok(ResolvedVariant {
        variant,
        source: variant.source_template(language),
        test: variant.test_template(),
        style,
        naming,
        dispatcher_name,
        style_extension,
    })
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// Static description of a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: TemplateId,
    pub kind: ArtifactKind,
    pub architecture: Option<Architecture>,
    pub role: OutputRole,
}

const fn entry(
    id: TemplateId,
    kind: ArtifactKind,
    architecture: Option<Architecture>,
    role: OutputRole,
) -> CatalogEntry {
    CatalogEntry {
        id,
        kind,
        architecture,
        role,
    }
}

use ArtifactKind as K;
use OutputRole as R;

const FLUX: Option<Architecture> = Some(Architecture::Flux);
const REFLUX: Option<Architecture> = Some(Architecture::Reflux);

/// Every template id [`resolve`] can produce.
pub const CATALOG: &[CatalogEntry] = &[
    entry(ids::STORE_FLUX, K::Store, FLUX, R::Source),
    entry(ids::STORE_FLUX_SPEC, K::Store, FLUX, R::Test),
    entry(ids::STORE_REFLUX, K::Store, REFLUX, R::Source),
    entry(ids::STORE_REFLUX_SPEC, K::Store, REFLUX, R::Test),
    entry(ids::ACTION_FLUX, K::Action, FLUX, R::Source),
    entry(ids::ACTION_FLUX_SPEC, K::Action, FLUX, R::Test),
    entry(ids::ACTION_REFLUX, K::Action, REFLUX, R::Source),
    entry(ids::ACTION_REFLUX_SPEC, K::Action, REFLUX, R::Test),
    entry(ids::COMPONENT, K::Component, None, R::Source),
    entry(ids::COMPONENT_SPEC, K::Component, None, R::Test),
    entry(ids::CLASS, K::Class, None, R::Source),
    entry(ids::CLASS_SPEC, K::Class, None, R::Test),
    entry(ids::DISPATCHER, K::Dispatcher, FLUX, R::Source),
    entry(ids::DISPATCHER_SPEC, K::Dispatcher, FLUX, R::Test),
    entry(ids::STYLE_CSS, K::Component, None, R::Style),
    entry(ids::STYLE_SASS, K::Component, None, R::Style),
    entry(ids::STYLE_SCSS, K::Component, None, R::Style),
    entry(ids::STYLE_LESS, K::Component, None, R::Style),
    entry(ids::STYLE_STYLUS, K::Component, None, R::Style),
    entry(ids::PACKAGE_JSON, K::Config, None, R::Config),
    entry(ids::WEBPACK_CONFIG, K::Config, None, R::Config),
    entry(ids::WEBPACK_DEVELOPMENT, K::Config, None, R::Config),
    entry(ids::WEBPACK_PRODUCTION, K::Config, None, R::Config),
    entry(ids::KARMA_CONF, K::Config, None, R::Config),
    entry(ids::MAKEFILE, K::Config, None, R::Config),
    entry(ids::BABELRC, K::Config, None, R::Config),
    entry(ids::EDITORCONFIG, K::Config, None, R::Config),
    entry(ids::ESLINTIGNORE, K::Config, None, R::Config),
    entry(ids::GITIGNORE, K::Config, None, R::Config),
    entry(ids::JSHINTRC, K::Config, None, R::Config),
    entry(ids::NVMRC, K::Config, None, R::Config),
    entry(ids::INDEX_HTML, K::Config, None, R::Config),
    entry(ids::APP_MAIN, K::Config, None, R::Config),
    entry(ids::APP_ROUTERS, K::Config, None, R::Config),
    entry(ids::APP_CONSTANTS, K::Config, None, R::Config),
    entry(ids::APP_URL_HELPER, K::Config, None, R::Config),
    entry(ids::TEST_PHANTOMJS_SHIMS, K::Config, None, R::Config),
    entry(ids::TEST_REACT_ADDONS, K::Config, None, R::Config),
    entry(ids::TEST_MOCK_APP, K::Config, None, R::Config),
];

pub fn catalog_entry(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id.as_str() == id)
}

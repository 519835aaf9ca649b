//! Domain value objects: ArtifactKind, Architecture, StylesLanguage,
//! ExtensionPolicy, ConfigAsset.
//!
//! # Design
//!
//! These are plain `Copy` value types with no identity.
//! Template selection does not live here; see `variant.rs`. This file's only
//! job is to define the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// A generatable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Store,
    Action,
    Component,
    Class,
    Dispatcher,
    Config,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        Self::Store,
        Self::Action,
        Self::Component,
        Self::Class,
        Self::Dispatcher,
        Self::Config,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Action => "action",
            Self::Component => "component",
            Self::Class => "class",
            Self::Dispatcher => "dispatcher",
            Self::Config => "config",
        }
    }

    /// Directory under `scripts/` (and `test/spec/`) used when the request
    /// does not override it. Config assets have fixed locations.
    pub const fn default_subdirectory(&self) -> Option<&'static str> {
        match self {
            Self::Store => Some("stores"),
            Self::Action => Some("actions"),
            Self::Component | Self::Class => Some("components"),
            Self::Dispatcher => Some("dispatcher"),
            Self::Config => None,
        }
    }

    /// Whether generating this kind also produces a style asset.
    pub const fn is_style_bearing(&self) -> bool {
        matches!(self, Self::Component)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "store" | "stores" => Ok(Self::Store),
            "action" | "actions" => Ok(Self::Action),
            "component" | "components" => Ok(Self::Component),
            "class" => Ok(Self::Class),
            "dispatcher" => Ok(Self::Dispatcher),
            "config" => Ok(Self::Config),
            other => Err(DomainError::UnknownArtifactKind {
                kind: other.to_string(),
            }),
        }
    }
}

// ── Architecture ──────────────────────────────────────────────────────────────

/// State-management pattern the generated project is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Flux,
    Reflux,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Self::Flux, Self::Reflux];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flux => "flux",
            Self::Reflux => "reflux",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flux" => Ok(Self::Flux),
            "reflux" => Ok(Self::Reflux),
            other => Err(DomainError::InvalidConfigValue {
                key: crate::domain::config::KEY_ARCHITECTURE,
                value: other.to_string(),
                expected: "flux, reflux",
            }),
        }
    }
}

// ── StylesLanguage ────────────────────────────────────────────────────────────

/// Styling language for generated style assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesLanguage {
    #[default]
    Css,
    Sass,
    Scss,
    Less,
    Stylus,
}

impl StylesLanguage {
    pub const ALL: [StylesLanguage; 5] = [
        Self::Css,
        Self::Sass,
        Self::Scss,
        Self::Less,
        Self::Stylus,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Sass => "sass",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Stylus => "stylus",
        }
    }

    /// File extension for style assets.
    ///
    /// `Legacy` keeps the first four characters of the keyword, so `stylus`
    /// becomes `styl`. Existing projects created with that naming keep
    /// resolving their `main.styl`. `Full` uses the whole keyword.
    pub fn extension(&self, policy: ExtensionPolicy) -> &'static str {
        let keyword = self.as_str();
        match policy {
            ExtensionPolicy::Legacy => &keyword[..keyword.len().min(4)],
            ExtensionPolicy::Full => keyword,
        }
    }

    /// Webpack loader chain for this language.
    pub const fn loader(&self) -> &'static str {
        match self {
            Self::Css => "style-loader!css-loader",
            Self::Sass => "style-loader!css-loader!sass-loader?outputStyle=expanded&indentedSyntax",
            Self::Scss => "style-loader!css-loader!sass-loader?outputStyle=expanded",
            Self::Less => "style-loader!css-loader!less-loader",
            Self::Stylus => "style-loader!css-loader!stylus-loader",
        }
    }

    /// Extra `devDependencies` needed to compile this language.
    pub const fn dev_dependencies(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Css => &[],
            Self::Sass | Self::Scss => &[("node-sass", "^3.4.2"), ("sass-loader", "^3.1.2")],
            Self::Less => &[("less", "^2.5.3"), ("less-loader", "^2.2.1")],
            Self::Stylus => &[("stylus", "^0.53.0"), ("stylus-loader", "^1.4.2")],
        }
    }
}

impl fmt::Display for StylesLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylesLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "sass" => Ok(Self::Sass),
            "scss" => Ok(Self::Scss),
            "less" => Ok(Self::Less),
            "stylus" | "styl" => Ok(Self::Stylus),
            other => Err(DomainError::InvalidConfigValue {
                key: crate::domain::config::KEY_STYLES_LANGUAGE,
                value: other.to_string(),
                expected: "css, sass, scss, less, stylus",
            }),
        }
    }
}

// ── ExtensionPolicy ───────────────────────────────────────────────────────────

/// How a style language keyword becomes a file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionPolicy {
    /// First four characters of the keyword (`stylus` → `styl`).
    #[default]
    Legacy,
    /// The whole keyword (`stylus` → `stylus`).
    Full,
}

impl ExtensionPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for ExtensionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "truncated" => Ok(Self::Legacy),
            "full" => Ok(Self::Full),
            other => Err(DomainError::InvalidConfigValue {
                key: crate::domain::config::KEY_STYLES_EXTENSION,
                value: other.to_string(),
                expected: "legacy, full",
            }),
        }
    }
}

// ── ConfigAsset ───────────────────────────────────────────────────────────────

/// Project-level files written once at init time: build and tooling
/// config, the webpack entry and its app scaffolding, and the karma test
/// helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigAsset {
    PackageJson,
    WebpackConfig,
    WebpackDevelopment,
    WebpackProduction,
    KarmaConf,
    Makefile,
    Babelrc,
    Editorconfig,
    Eslintignore,
    Gitignore,
    Jshintrc,
    Nvmrc,
    IndexHtml,
    MainStylesheet,
    MainScript,
    Routers,
    AppConstants,
    UrlHelper,
    PhantomjsShims,
    ReactAddons,
    MockApp,
}

impl ConfigAsset {
    pub const ALL: [ConfigAsset; 21] = [
        Self::PackageJson,
        Self::WebpackConfig,
        Self::WebpackDevelopment,
        Self::WebpackProduction,
        Self::KarmaConf,
        Self::Makefile,
        Self::Babelrc,
        Self::Editorconfig,
        Self::Eslintignore,
        Self::Gitignore,
        Self::Jshintrc,
        Self::Nvmrc,
        Self::IndexHtml,
        Self::MainStylesheet,
        Self::MainScript,
        Self::Routers,
        Self::AppConstants,
        Self::UrlHelper,
        Self::PhantomjsShims,
        Self::ReactAddons,
        Self::MockApp,
    ];

    /// Name used to request this asset (`reactor generate config <name>`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PackageJson => "package",
            Self::WebpackConfig => "webpack",
            Self::WebpackDevelopment => "webpack-development",
            Self::WebpackProduction => "webpack-production",
            Self::KarmaConf => "karma",
            Self::Makefile => "makefile",
            Self::Babelrc => "babelrc",
            Self::Editorconfig => "editorconfig",
            Self::Eslintignore => "eslintignore",
            Self::Gitignore => "gitignore",
            Self::Jshintrc => "jshintrc",
            Self::Nvmrc => "nvmrc",
            Self::IndexHtml => "index",
            Self::MainStylesheet => "main-style",
            Self::MainScript => "main-script",
            Self::Routers => "routers",
            Self::AppConstants => "constants",
            Self::UrlHelper => "url-helper",
            Self::PhantomjsShims => "phantomjs-shims",
            Self::ReactAddons => "react-addons",
            Self::MockApp => "mock-app",
        }
    }

    /// Location relative to the project root.
    pub fn destination(&self, app_path: &str, style_extension: &str) -> PathBuf {
        match self {
            Self::PackageJson => PathBuf::from("package.json"),
            Self::WebpackConfig => PathBuf::from("webpack.config.js"),
            Self::WebpackDevelopment => PathBuf::from("webpack.development.js"),
            Self::WebpackProduction => PathBuf::from("webpack.production.js"),
            Self::KarmaConf => PathBuf::from("karma.conf.js"),
            Self::Makefile => PathBuf::from("Makefile"),
            Self::Babelrc => PathBuf::from(".babelrc"),
            Self::Editorconfig => PathBuf::from(".editorconfig"),
            Self::Eslintignore => PathBuf::from(".eslintignore"),
            Self::Gitignore => PathBuf::from(".gitignore"),
            Self::Jshintrc => PathBuf::from(".jshintrc"),
            Self::Nvmrc => PathBuf::from(".nvmrc"),
            Self::IndexHtml => PathBuf::from(app_path).join("index.html"),
            Self::MainStylesheet => PathBuf::from(app_path)
                .join("styles")
                .join(format!("main.{style_extension}")),
            Self::MainScript => scripts(app_path).join("components/main.js"),
            Self::Routers => scripts(app_path).join("components/routers.js"),
            Self::AppConstants => scripts(app_path).join("constants/AppConstants.js"),
            Self::UrlHelper => scripts(app_path).join("helpers/UrlHelper.js"),
            Self::PhantomjsShims => PathBuf::from("test/helpers/phantomjs-shims.js"),
            Self::ReactAddons => PathBuf::from("test/helpers/react/addons.js"),
            Self::MockApp => PathBuf::from("test/mocks/MockApp.js"),
        }
    }
}

fn scripts(app_path: &str) -> PathBuf {
    PathBuf::from(app_path).join("scripts")
}

impl fmt::Display for ConfigAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigAsset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "package" | "package.json" => Ok(Self::PackageJson),
            "webpack" | "webpack.config.js" => Ok(Self::WebpackConfig),
            "webpack-development" | "webpack.development.js" => Ok(Self::WebpackDevelopment),
            "webpack-production" | "webpack.production.js" => Ok(Self::WebpackProduction),
            "karma" | "karma.conf.js" => Ok(Self::KarmaConf),
            "makefile" => Ok(Self::Makefile),
            "babelrc" | ".babelrc" => Ok(Self::Babelrc),
            "editorconfig" | ".editorconfig" => Ok(Self::Editorconfig),
            "eslintignore" | ".eslintignore" => Ok(Self::Eslintignore),
            "gitignore" | ".gitignore" => Ok(Self::Gitignore),
            "jshintrc" | ".jshintrc" => Ok(Self::Jshintrc),
            "nvmrc" | ".nvmrc" => Ok(Self::Nvmrc),
            "index" | "index.html" => Ok(Self::IndexHtml),
            "main-style" | "styles" => Ok(Self::MainStylesheet),
            "main-script" | "main" | "main.js" => Ok(Self::MainScript),
            "routers" | "routers.js" => Ok(Self::Routers),
            "constants" | "appconstants" | "appconstants.js" => Ok(Self::AppConstants),
            "url-helper" | "urlhelper" | "urlhelper.js" => Ok(Self::UrlHelper),
            "phantomjs-shims" | "phantomjs-shims.js" => Ok(Self::PhantomjsShims),
            "react-addons" | "addons" | "addons.js" => Ok(Self::ReactAddons),
            "mock-app" | "mockapp" | "mockapp.js" => Ok(Self::MockApp),
            _ => Err(DomainError::UnknownConfigAsset {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_kind_accepts_plural_aliases() {
        assert_eq!(
            "stores".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::Store
        );
        assert_eq!(
            "Components".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::Component
        );
        assert!("widget".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn artifact_kind_default_subdirectories() {
        assert_eq!(ArtifactKind::Store.default_subdirectory(), Some("stores"));
        assert_eq!(ArtifactKind::Action.default_subdirectory(), Some("actions"));
        assert_eq!(
            ArtifactKind::Class.default_subdirectory(),
            Some("components")
        );
        assert_eq!(
            ArtifactKind::Dispatcher.default_subdirectory(),
            Some("dispatcher")
        );
        assert_eq!(ArtifactKind::Config.default_subdirectory(), None);
    }

    #[test]
    fn only_components_bear_styles() {
        let bearing: Vec<_> = ArtifactKind::ALL
            .iter()
            .filter(|k| k.is_style_bearing())
            .collect();
        assert_eq!(bearing, vec![&ArtifactKind::Component]);
    }

    #[test]
    fn architecture_parse_is_case_insensitive() {
        assert_eq!("FLUX".parse::<Architecture>().unwrap(), Architecture::Flux);
        assert_eq!(
            " reflux ".parse::<Architecture>().unwrap(),
            Architecture::Reflux
        );
        assert!("redux".parse::<Architecture>().is_err());
    }

    #[test]
    fn legacy_extension_truncates_to_four_characters() {
        let p = ExtensionPolicy::Legacy;
        assert_eq!(StylesLanguage::Css.extension(p), "css");
        assert_eq!(StylesLanguage::Sass.extension(p), "sass");
        assert_eq!(StylesLanguage::Scss.extension(p), "scss");
        assert_eq!(StylesLanguage::Less.extension(p), "less");
        assert_eq!(StylesLanguage::Stylus.extension(p), "styl");
    }

    #[test]
    fn full_extension_keeps_keyword() {
        let p = ExtensionPolicy::Full;
        assert_eq!(StylesLanguage::Stylus.extension(p), "stylus");
        assert_eq!(StylesLanguage::Sass.extension(p), "sass");
    }

    #[test]
    fn styles_language_rejects_unknown() {
        let err = "postcss".parse::<StylesLanguage>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfigValue { .. }));
    }

    #[test]
    fn config_asset_round_trips_request_names() {
        for asset in ConfigAsset::ALL {
            assert_eq!(asset.as_str().parse::<ConfigAsset>().unwrap(), asset);
        }
    }

    #[test]
    fn config_asset_destinations() {
        assert_eq!(
            ConfigAsset::KarmaConf.destination("src", "css"),
            PathBuf::from("karma.conf.js")
        );
        assert_eq!(
            ConfigAsset::MainStylesheet.destination("src", "styl"),
            PathBuf::from("src/styles/main.styl")
        );
        assert_eq!(
            ConfigAsset::IndexHtml.destination("app", "css"),
            PathBuf::from("app/index.html")
        );
        assert_eq!(
            ConfigAsset::MainScript.destination("src", "css"),
            PathBuf::from("src/scripts/components/main.js")
        );
        assert_eq!(
            ConfigAsset::MockApp.destination("app", "css"),
            PathBuf::from("test/mocks/MockApp.js")
        );
    }

    #[test]
    fn main_names_the_webpack_entry() {
        assert_eq!("main".parse::<ConfigAsset>().unwrap(), ConfigAsset::MainScript);
        assert_eq!("styles".parse::<ConfigAsset>().unwrap(), ConfigAsset::MainStylesheet);
        assert_eq!(".nvmrc".parse::<ConfigAsset>().unwrap(), ConfigAsset::Nvmrc);
    }
}

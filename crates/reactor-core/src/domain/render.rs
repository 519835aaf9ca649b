//! Substitution context and placeholder rendering.
//!
//! Templates use `{{NAME}}` placeholders. A [`RenderContext`] holds the
//! values for one artifact (or for the project-level config assets) and
//! renders a body in a single left-to-right pass: substituted values are
//! never re-scanned, and unknown placeholders stay verbatim.
//!
//! ## Variables
//!
//! | Variable | Example | Available for |
//! |----------|---------|---------------|
//! | `CLASS_NAME` | `TestStore` | artifacts |
//! | `RAW_NAME` | `Foo/Bar` | artifacts |
//! | `MODULE_PATH` | `stores/TestStore` | artifacts |
//! | `FILE_NAME` | `TestStore` | artifacts |
//! | `STYLE_MODULE` | `styles/Foo/Bar/main.css` | artifacts |
//! | `STYLE_CLASS` | `card-list-item` | artifacts, `main-style` |
//! | `APP_NAME` | `temp-test` | all |
//! | `APP_NAME_CAPITALIZED` | `TempTest` | all |
//! | `PACKAGE_NAME` | `temp-test` | all |
//! | `DISPATCHER_NAME` | `TempTestAppDispatcher` | when `app-name` is set |
//! | `ARCHITECTURE` | `flux` | all (`none` when unset) |
//! | `STYLES_LANGUAGE` | `scss` | all |
//! | `STYLE_EXTENSION` | `scss` | all |
//! | `STYLE_LOADER` | `style-loader!css-loader` | all |
//! | `APP_PATH` | `src` | all |
//! | `ARCHITECTURE_DEPENDENCIES` | `,\n    "flux": ...` | all |
//! | `STYLE_DEPENDENCIES` | `,\n    "less": ...` | all |
//! | `MODULE_ALIASES` | karma/webpack `resolve.alias` entries | all |
//! | `MODULE_DIRECTORIES` | webpack `resolve.modulesDirectories` | all |

use std::collections::HashMap;

use crate::domain::config::ProjectConfig;
use crate::domain::error::DomainError;
use crate::domain::names::{DerivedNames, capitalize_file, to_kebab_case};
use crate::domain::value_objects::{Architecture, StylesLanguage};

const DEFAULT_PACKAGE_NAME: &str = "reactor-app";

/// Values for one rendering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project-level variables only. Used for config assets.
    ///
    /// # Errors
    ///
    /// `InvalidConfigValue` when a style setting or a set architecture
    /// cannot be parsed.
    pub fn for_config(config: &ProjectConfig) -> Result<Self, DomainError> {
        let architecture = config.architecture()?;
        let language = config.styles_language()?;
        let extension = config.style_extension()?;
        let app_path = config.app_path();
        let app_name = config.app_name().unwrap_or_default();

        let package_name = match to_kebab_case(app_name) {
            name if name.is_empty() => DEFAULT_PACKAGE_NAME.to_string(),
            name => name,
        };

        let mut ctx = Self::new()
            .with_variable("APP_NAME", app_name)
            .with_variable("APP_NAME_CAPITALIZED", capitalize_file(app_name))
            .with_variable("PACKAGE_NAME", package_name)
            .with_variable(
                "ARCHITECTURE",
                architecture.map_or("none", |a| a.as_str()),
            )
            .with_variable("STYLES_LANGUAGE", language.as_str())
            .with_variable("STYLE_EXTENSION", extension)
            .with_variable("STYLE_LOADER", language.loader())
            .with_variable("STYLE_CLASS", "main")
            .with_variable("APP_PATH", app_path)
            .with_variable(
                "ARCHITECTURE_DEPENDENCIES",
                architecture_dependencies(architecture),
            )
            .with_variable("STYLE_DEPENDENCIES", style_dependencies(language))
            .with_variable("MODULE_ALIASES", module_aliases(app_path, architecture))
            .with_variable(
                "MODULE_DIRECTORIES",
                module_directories(app_path, architecture),
            );

        if let Ok(dispatcher) = config.dispatcher_name() {
            ctx = ctx.with_variable("DISPATCHER_NAME", dispatcher);
        }

        Ok(ctx)
    }

    /// Project variables plus the derived names of one artifact.
    pub fn for_artifact(
        names: &DerivedNames,
        style_extension: &str,
        config: &ProjectConfig,
    ) -> Result<Self, DomainError> {
        let mut style_module = String::from("styles/");
        for segment in names.slug.directory_segments() {
            style_module.push_str(segment);
            style_module.push('/');
        }
        style_module.push_str(&names.slug.file);
        style_module.push_str("/main.");
        style_module.push_str(style_extension);

        Ok(Self::for_config(config)?
            .with_variable("CLASS_NAME", &names.class_name)
            .with_variable("RAW_NAME", &names.raw)
            .with_variable("MODULE_PATH", &names.module_path)
            .with_variable("FILE_NAME", &names.slug.file)
            .with_variable("STYLE_MODULE", style_module)
            .with_variable("STYLE_CLASS", names.style_class()))
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replace every known `{{KEY}}` in one pass.
    ///
    /// - `{{UNKNOWN}}` stays as written
    /// - `{{ KEY }}` is accepted (the key is trimmed)
    /// - `{{{KEY}}}` keeps the outer braces
    /// - an unterminated `{{` is copied through with the rest of the input
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            match self.get(after[..end].trim()) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    // Emit one brace and rescan, so a placeholder starting at
                    // the next character is still found.
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ── Config fragments ─────────────────────────────────────────────────────────

fn json_entries(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, version)| format!(",\n    \"{name}\": \"{version}\""))
        .collect()
}

fn architecture_dependencies(architecture: Option<Architecture>) -> String {
    match architecture {
        Some(Architecture::Flux) => json_entries(&[
            ("events", "^1.1.0"),
            ("flux", "^2.1.1"),
            ("object-assign", "^4.0.1"),
        ]),
        Some(Architecture::Reflux) => json_entries(&[("reflux", "^0.3.0")]),
        None => String::new(),
    }
}

fn style_dependencies(language: StylesLanguage) -> String {
    json_entries(language.dev_dependencies())
}

/// Script directories that get a module alias, in order.
fn script_modules(architecture: Option<Architecture>) -> Vec<&'static str> {
    let mut modules = vec!["components", "constants", "helpers", "stores", "actions"];
    if architecture == Some(Architecture::Flux) {
        modules.push("dispatcher");
    }
    modules
}

fn module_aliases(app_path: &str, architecture: Option<Architecture>) -> String {
    let mut lines = vec![format!(
        "      'styles': path.join(__dirname, '{app_path}/styles')"
    )];
    lines.extend(script_modules(architecture).into_iter().map(|module| {
        format!("      '{module}': path.join(__dirname, '{app_path}/scripts/{module}')")
    }));
    lines.join(",\n")
}

fn module_directories(app_path: &str, architecture: Option<Architecture>) -> String {
    let mut dirs = vec!["'node_modules'".to_string(), format!("'{app_path}/styles'")];
    dirs.extend(
        script_modules(architecture)
            .into_iter()
            .map(|module| format!("'{app_path}/scripts/{module}'")),
    );
    dirs.join(", ")
}

//! Built-in template bodies and override discovery.
//!
//! Every template the resolver can ask for ships inside the binary via
//! `include_str!`, so a fresh install generates projects without any
//! templates directory. Users may shadow individual bodies with files from
//! an override directory (see [`override_dir`]).
//!
//! # Override resolution order
//!
//! 1. An explicit directory (`--templates` / `templates_dir` in the user config)
//! 2. **`$REACTOR_TEMPLATES_DIR`**
//!
//! When neither is set, or the directory does not exist, only built-ins are
//! used.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable naming a template override directory.
pub const TEMPLATES_DIR_ENV: &str = "REACTOR_TEMPLATES_DIR";

macro_rules! builtin {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!("../templates/", $id)))),*]
    };
}

/// `(id, body)` for every embedded template, sorted by id.
pub static BUILTIN: &[(&str, &str)] = builtin![
    "action/flux.js",
    "action/flux.spec.js",
    "action/reflux.js",
    "action/reflux.spec.js",
    "app/AppConstants.js",
    "app/UrlHelper.js",
    "app/main.js",
    "app/routers.js",
    "class/class.js",
    "class/class.spec.js",
    "component/component.js",
    "component/component.spec.js",
    "config/Makefile",
    "config/babelrc",
    "config/editorconfig",
    "config/eslintignore",
    "config/gitignore",
    "config/index.html",
    "config/jshintrc",
    "config/karma.conf.js",
    "config/nvmrc",
    "config/package.json",
    "config/webpack.config.js",
    "config/webpack.development.js",
    "config/webpack.production.js",
    "dispatcher/dispatcher.js",
    "dispatcher/dispatcher.spec.js",
    "store/flux.js",
    "store/flux.spec.js",
    "store/reflux.js",
    "store/reflux.spec.js",
    "styles/main.css",
    "styles/main.less",
    "styles/main.sass",
    "styles/main.scss",
    "styles/main.styl",
    "test/MockApp.js",
    "test/phantomjs-shims.js",
    "test/react-addons.js",
];

/// Embedded body of `id`.
pub fn get(id: &str) -> Option<&'static str> {
    BUILTIN
        .binary_search_by(|(candidate, _)| (*candidate).cmp(id))
        .ok()
        .map(|index| BUILTIN[index].1)
}

pub fn ids() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(id, _)| *id)
}

/// Pick the override directory, if any.
///
/// An explicit path wins over the environment variable. Paths that do not
/// exist are ignored with a debug log.
pub fn override_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from))?;

    if candidate.is_dir() {
        debug!(path = %candidate.display(), "using template override directory");
        Some(candidate)
    } else {
        debug!(path = %candidate.display(), "template override directory missing, ignoring");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactor_core::domain::variant::CATALOG;

    #[test]
    fn builtin_table_is_sorted_for_lookup() {
        let ids: Vec<_> = ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn every_catalogued_template_is_embedded() {
        for entry in CATALOG {
            assert!(get(entry.id.as_str()).is_some(), "{} missing", entry.id);
        }
        assert_eq!(BUILTIN.len(), CATALOG.len());
    }

    #[test]
    fn spec_templates_import_the_class_from_its_module() {
        for (id, body) in BUILTIN.iter().filter(|(id, _)| id.ends_with(".spec.js")) {
            assert!(
                body.contains("import {{CLASS_NAME}} from '{{MODULE_PATH}}'"),
                "{id}"
            );
            assert!(body.contains("describe('{{CLASS_NAME}}'"), "{id}");
        }
    }

    #[test]
    fn unknown_id_has_no_body() {
        assert_eq!(get("store/redux.js"), None);
    }

    #[test]
    fn explicit_override_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(override_dir(Some(dir.path())), Some(dir.path().to_path_buf()));
        let missing = dir.path().join("missing");
        assert_eq!(override_dir(Some(missing.as_path())), None);
    }
}

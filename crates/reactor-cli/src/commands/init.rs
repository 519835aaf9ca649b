//! `reactor init`: record project settings and write the project skeleton.

use std::io::IsTerminal as _;
use std::path::Path;

use tracing::{info, instrument};

use reactor_adapters::JsonConfigStore;
use reactor_core::{
    application::{ConfigStore, ProjectSettings},
    domain::{
        Architecture, ExtensionPolicy, StylesLanguage, config::DEFAULT_APP_PATH,
        names::validate_app_name,
    },
    error::ReactorError,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands::project_service,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{self, OutputManager},
};

const FALLBACK_APP_NAME: &str = "app";

#[instrument(skip_all, fields(force = args.force, dry_run = args.dry_run))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = match &global.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().with_cli_context(|| "reading current directory")?,
    };

    let store = JsonConfigStore::new(&root);
    if !args.force && !args.dry_run && !store.entries()?.is_empty() {
        return Err(CliError::ProjectExists { path: root });
    }

    let interactive = !args.yes && !global.quiet && std::io::stdin().is_terminal();
    let settings = resolve_settings(&args, &config, &root, interactive)?;
    settings.validate().map_err(ReactorError::from)?;
    info!(
        app = %settings.app_name,
        architecture = settings.architecture.map_or("none", |a| a.as_str()),
        styles = %settings.styles_language,
        "Project settings resolved"
    );

    let service = project_service(&root, &global, &config, args.force)?;

    if args.dry_run {
        let outputs = service.plan(&settings.to_config())?;
        output.info(&format!(
            "Dry run: would initialise '{}' in {}",
            settings.app_name,
            root.display()
        ))?;
        output.file("config", Path::new(reactor_adapters::config_store::CONFIG_FILE), "config")?;
        for rendered in &outputs {
            output.file("create", &rendered.path, rendered.role)?;
        }
        return Ok(());
    }

    output.header(&format!("Initialising '{}'...", settings.app_name))?;
    let reports = service.init(&settings)?;
    output.reports(&reports)?;

    let skipped = output::skipped(&reports);
    if skipped > 0 {
        output.warning(&format!(
            "{skipped} existing file(s) left untouched (use --force to overwrite)"
        ))?;
    }
    output.success(&format!("Project '{}' initialised", settings.app_name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  npm install")?;
        if settings.architecture.is_some() {
            output.print("  reactor generate store Todo")?;
        } else {
            output.print("  reactor generate component App")?;
        }
    }

    Ok(())
}

/// Flag, then user config default, then prompt (when interactive), then
/// built-in default.
fn resolve_settings(
    args: &InitArgs,
    config: &AppConfig,
    root: &Path,
    interactive: bool,
) -> CliResult<ProjectSettings> {
    let defaults = &config.defaults;

    let dir_name = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(default_app_name))
        .filter(|name| validate_app_name(name).is_ok())
        .unwrap_or_else(|| FALLBACK_APP_NAME.to_string());

    let app_name = match &args.app_name {
        Some(name) => name.clone(),
        None if interactive => prompt::text("Application name", &dir_name)?,
        None => dir_name,
    };

    let architecture = match args.architecture {
        Some(arg) => arg.to_domain(),
        None => match defaults.architecture.as_deref() {
            Some("none") | Some("") => None,
            Some(raw) => Some(raw.parse::<Architecture>().map_err(ReactorError::from)?),
            None if interactive => {
                let choice = prompt::select("Architecture", &["none", "flux", "reflux"], 0)?;
                match choice {
                    1 => Some(Architecture::Flux),
                    2 => Some(Architecture::Reflux),
                    _ => None,
                }
            }
            None => None,
        },
    };

    let styles_language = match args.styles {
        Some(arg) => StylesLanguage::from(arg),
        None => match defaults.styles_language.as_deref() {
            Some(raw) => raw.parse::<StylesLanguage>().map_err(ReactorError::from)?,
            None if interactive => {
                let names: Vec<&str> = StylesLanguage::ALL.iter().map(|l| l.as_str()).collect();
                StylesLanguage::ALL[prompt::select("Styles language", &names, 0)?]
            }
            None => StylesLanguage::default(),
        },
    };

    let extension_policy = args.extension_policy().unwrap_or(if defaults.full_extensions {
        ExtensionPolicy::Full
    } else {
        ExtensionPolicy::Legacy
    });

    let app_path = args
        .app_path
        .clone()
        .or_else(|| defaults.app_path.clone())
        .unwrap_or_else(|| DEFAULT_APP_PATH.to_string());

    Ok(ProjectSettings::new(app_name)
        .with_architecture(architecture)
        .with_styles_language(styles_language)
        .with_extension_policy(extension_policy)
        .with_app_path(app_path))
}

#[cfg(feature = "interactive")]
mod prompt {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    use crate::error::{CliError, CliResult};

    pub fn text(label: &str, default: &str) -> CliResult<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| CliError::from(std::io::Error::from(e)))
    }

    pub fn select(label: &str, items: &[&str], default: usize) -> CliResult<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|e| CliError::from(std::io::Error::from(e)))?
            .ok_or(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
mod prompt {
    use crate::error::{CliError, CliResult};

    pub fn text(_label: &str, _default: &str) -> CliResult<String> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn select(_label: &str, _items: &[&str], _default: usize) -> CliResult<usize> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Directory name with leading non-letters dropped (`.tmp1x` -> `tmp1x`).
fn default_app_name(dir_name: &str) -> String {
    dir_name
        .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ArchitectureArg, StylesArg};
    use tempfile::TempDir;

    fn args() -> InitArgs {
        InitArgs {
            app_name: None,
            architecture: None,
            styles: None,
            app_path: None,
            full_extensions: false,
            yes: true,
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn flags_win_over_user_defaults() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.defaults.architecture = Some("reflux".into());
        config.defaults.styles_language = Some("less".into());

        let init = InitArgs {
            app_name: Some("temp-test".into()),
            architecture: Some(ArchitectureArg::Flux),
            styles: Some(StylesArg::Scss),
            ..args()
        };
        let settings = resolve_settings(&init, &config, dir.path(), false).unwrap();

        assert_eq!(settings.app_name, "temp-test");
        assert_eq!(settings.architecture, Some(Architecture::Flux));
        assert_eq!(settings.styles_language, StylesLanguage::Scss);
    }

    #[test]
    fn user_defaults_fill_missing_flags() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.defaults.architecture = Some("reflux".into());
        config.defaults.app_path = Some("app".into());
        config.defaults.full_extensions = true;

        let settings = resolve_settings(&args(), &config, dir.path(), false).unwrap();

        assert_eq!(settings.architecture, Some(Architecture::Reflux));
        assert_eq!(settings.app_path, "app");
        assert_eq!(settings.extension_policy, ExtensionPolicy::Full);
    }

    #[test]
    fn app_name_defaults_to_directory_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("todo-app");
        std::fs::create_dir(&root).unwrap();

        let settings = resolve_settings(&args(), &AppConfig::default(), &root, false).unwrap();

        assert_eq!(settings.app_name, "todo-app");
        assert_eq!(settings.architecture, None);
        assert_eq!(settings.styles_language, StylesLanguage::Css);
        assert_eq!(settings.app_path, DEFAULT_APP_PATH);
    }

    #[test]
    fn unusable_directory_names_fall_back() {
        let dir = TempDir::new().unwrap();
        let hidden = dir.path().join(".tmpAb12");
        std::fs::create_dir(&hidden).unwrap();
        let settings = resolve_settings(&args(), &AppConfig::default(), &hidden, false).unwrap();
        assert_eq!(settings.app_name, "tmpAb12");

        let digits = dir.path().join("2048");
        std::fs::create_dir(&digits).unwrap();
        let settings = resolve_settings(&args(), &AppConfig::default(), &digits, false).unwrap();
        assert_eq!(settings.app_name, FALLBACK_APP_NAME);
    }

    #[test]
    fn bad_user_default_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.defaults.architecture = Some("redux".into());

        let err = resolve_settings(&args(), &config, dir.path(), false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

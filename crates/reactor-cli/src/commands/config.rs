//! `reactor config`: read and write project configuration values.
//!
//! `get`, `set`, `list` and `path` operate on the project's `.yo-rc.json`;
//! `user` shows or writes the per-user defaults file.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    commands::{project_root, project_service},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = || project_service(&project_root(&global)?, &global, &config, false);

    match cmd {
        ConfigCommands::Get { key } => match service()?.get_value(&key)? {
            Some(value) => output.data(&value)?,
            None => output.warning(&format!("'{key}' is not set"))?,
        },

        ConfigCommands::Set { key, value } => {
            service()?.set_value(&key, &value)?;
            output.success(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            let entries = service()?.entries()?;
            if entries.is_empty() {
                output.warning("No project configuration found (run 'reactor init')")?;
            }
            for (key, value) in entries {
                output.data(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::Path => {
            if let Some(path) = service()?.location() {
                output.data(&path.display().to_string())?;
            }
        }

        ConfigCommands::User { write } => user(write, &global, &config, &output)?,
    }

    Ok(())
}

fn user(write: bool, global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = global.config.clone().unwrap_or_else(AppConfig::config_path);

    if write {
        config
            .save(&path)
            .with_cli_context(|| "writing user configuration")?;
        output.success(&format!("User configuration written to {}", path.display()))?;
        return Ok(());
    }

    output.header(&format!("# {}", path.display()))?;
    let body = config
        .to_toml()
        .with_cli_context(|| "serialising user configuration")?;
    output.data(body.trim_end())?;
    Ok(())
}

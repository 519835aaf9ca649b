//! Command handlers, one module per subcommand.

use std::path::{Path, PathBuf};

use tracing::debug;

use reactor_adapters::{
    ConflictPolicy, JsonConfigStore, LayeredTemplateStore, LocalFilesystem, PlaceholderRenderer,
};
use reactor_core::application::{GeneratorService, ProjectService};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

/// Project root: `--dir`, else the nearest ancestor with `.yo-rc.json`,
/// else the current directory.
pub fn project_root(global: &GlobalArgs) -> CliResult<PathBuf> {
    if let Some(dir) = &global.dir {
        return Ok(dir.clone());
    }
    let cwd = std::env::current_dir().with_cli_context(|| "reading current directory")?;
    Ok(JsonConfigStore::find_root(&cwd).unwrap_or(cwd))
}

/// `--templates`, else the user config's `templates.dir`.
pub fn templates_dir<'a>(global: &'a GlobalArgs, config: &'a AppConfig) -> Option<&'a Path> {
    global
        .templates
        .as_deref()
        .or(config.templates.dir.as_deref())
}

pub fn template_store(global: &GlobalArgs, config: &AppConfig) -> CliResult<LayeredTemplateStore> {
    Ok(LayeredTemplateStore::discover(templates_dir(global, config))?)
}

/// Wire the adapters into a [`ProjectService`] rooted at `root`.
pub fn project_service(
    root: &Path,
    global: &GlobalArgs,
    config: &AppConfig,
    force: bool,
) -> CliResult<ProjectService> {
    let policy = if force {
        ConflictPolicy::Overwrite
    } else {
        ConflictPolicy::Skip
    };
    debug!(root = %root.display(), ?policy, "building project service");

    let generator = GeneratorService::new(
        Box::new(template_store(global, config)?),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new(root).with_policy(policy)),
    );
    Ok(ProjectService::new(
        Box::new(JsonConfigStore::new(root)),
        generator,
    ))
}

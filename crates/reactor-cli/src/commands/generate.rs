//! `reactor generate <kind> <name>`.
//!
//! Translates arguments into an `ArtifactRequest`, renders it against the
//! project's current settings and writes the files. No business logic
//! lives here.

use tracing::{debug, instrument};

use reactor_core::domain::{ArtifactKind, ArtifactRequest};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::{project_root, project_service},
    config::AppConfig,
    error::CliResult,
    output::{self, OutputManager},
};

#[instrument(skip_all, fields(kind = ?args.kind, name = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = project_root(&global)?;
    let service = project_service(&root, &global, &config, args.force)?;

    let request = build_request(&args);
    debug!(root = %root.display(), subdirectory = request.subdirectory(), "Request built");

    let outputs = service.generate(&request)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would generate {} '{}' in {}",
            request.kind,
            request.base_name,
            root.display()
        ))?;
        for rendered in &outputs {
            output.file("create", &rendered.path, rendered.role)?;
        }
        return Ok(());
    }

    let reports = service.emit(&outputs)?;
    output.reports(&reports)?;

    let skipped = output::skipped(&reports);
    if skipped == reports.len() {
        output.warning("Nothing written, every file already exists (use --force to overwrite)")?;
    } else if skipped > 0 {
        output.warning(&format!("{skipped} existing file(s) left untouched"))?;
    }

    Ok(())
}

fn build_request(args: &GenerateArgs) -> ArtifactRequest {
    let request = ArtifactRequest::new(ArtifactKind::from(args.kind), args.name.trim());
    match &args.subdir {
        Some(subdir) => request.with_subdirectory(subdir.as_str()),
        None => request,
    }
}

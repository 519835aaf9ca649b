//! Implementation of the `reactor list` command.

use serde::Serialize;

use reactor_core::application::{TemplateInfo, TemplateService};
use reactor_core::domain::ArtifactKind;

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Serialisable row for `--format json`.
#[derive(Debug, Serialize)]
struct TemplateRow {
    id: String,
    kind: Option<ArtifactKind>,
    architecture: Option<String>,
    role: Option<String>,
    origin: String,
}

impl From<&TemplateInfo> for TemplateRow {
    fn from(info: &TemplateInfo) -> Self {
        Self {
            id: info.id.clone(),
            kind: info.kind,
            architecture: info.architecture.map(|a| a.to_string()),
            role: info.role.map(|r| r.to_string()),
            origin: info.origin.to_string(),
        }
    }
}

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = TemplateService::new(Box::new(template_store(&global, &config)?));

    let wanted = args.kind.map(ArtifactKind::from);
    let templates: Vec<TemplateInfo> = service
        .list()?
        .into_iter()
        .filter(|t| wanted.is_none() || t.kind == wanted)
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for t in &templates {
                output.data(&format!(
                    "  {:<34} {:<11} {:<7} {}",
                    t.id,
                    t.kind.map_or("-", |k| k.as_str()),
                    t.architecture.map_or("any", |a| a.as_str()),
                    t.origin,
                ))?;
            }
        }

        ListFormat::Json => {
            let rows: Vec<TemplateRow> = templates.iter().map(TemplateRow::from).collect();
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            output.data(&json)?;
        }

        ListFormat::List => {
            for t in &templates {
                output.data(&t.id)?;
            }
        }

        ListFormat::Csv => {
            output.data("id,kind,architecture,origin")?;
            for t in &templates {
                output.data(&format!(
                    "{},{},{},{}",
                    t.id,
                    t.kind.map_or("", |k| k.as_str()),
                    t.architecture.map_or("", |a| a.as_str()),
                    t.origin,
                ))?;
            }
        }
    }

    Ok(())
}

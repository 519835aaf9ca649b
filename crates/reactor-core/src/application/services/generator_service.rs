//! Generator Service - the generation orchestrator.
//!
//! Coordinates one artifact request:
//! 1. Validate the request
//! 2. Resolve the template variant
//! 3. Derive names
//! 4. Render source, test and style
//! 5. Compute destination paths
//!
//! `generate` is pure with respect to the filesystem; `emit` is the only
//! method that writes.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore, WriteOutcome},
    },
    domain::{
        ArtifactRequest, ConfigAsset, DerivedNames, DomainValidator as validator, OutputRole,
        ProjectConfig, RenderContext, RenderedOutput, ResolvedVariant, TemplateId,
        TemplateVariant, resolve,
    },
    error::ReactorResult,
};

/// Rendered bodies of one artifact, before paths are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub source: String,
    pub test: Option<String>,
    pub style: Option<String>,
}

/// What happened to one output during `emit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub role: OutputRole,
    pub outcome: WriteOutcome,
}

/// Main generation service.
pub struct GeneratorService {
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    pub fn new(
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Produce every output for a request.
    ///
    /// All-or-nothing: any failure returns an error and no outputs.
    #[instrument(skip_all, fields(kind = %request.kind, name = %request.base_name))]
    pub fn generate(
        &self,
        request: &ArtifactRequest,
        config: &ProjectConfig,
    ) -> ReactorResult<Vec<RenderedOutput>> {
        validator::validate_request(request)?;

        let resolved = resolve(request, config)?;
        debug!(variant = ?resolved.variant, source = %resolved.source, "Variant resolved");

        let outputs = match resolved.variant {
            TemplateVariant::ConfigFile(asset) => {
                vec![self.render_config_asset(asset, &resolved, config)?]
            }
            _ => self.render_artifact(request, &resolved, config)?,
        };

        validator::validate_outputs(&outputs)?;
        debug!(outputs = outputs.len(), "Artifact rendered");
        Ok(outputs)
    }

    /// Render the templates of a resolved variant.
    pub fn render_variant(
        &self,
        resolved: &ResolvedVariant,
        context: &RenderContext,
    ) -> ReactorResult<RenderedArtifact> {
        Ok(RenderedArtifact {
            source: self.render_template(resolved.source, context)?,
            test: resolved
                .test
                .map(|id| self.render_template(id, context))
                .transpose()?,
            style: resolved
                .style
                .map(|id| self.render_template(id, context))
                .transpose()?,
        })
    }

    /// Hand outputs to the filesystem, one `write` per output.
    ///
    /// Stops at the first failing write.
    #[instrument(skip_all, fields(count = outputs.len()))]
    pub fn emit(&self, outputs: &[RenderedOutput]) -> ReactorResult<Vec<WriteReport>> {
        let mut reports = Vec::with_capacity(outputs.len());

        for output in outputs {
            let outcome = self.filesystem.write(&output.path, &output.content)?;
            info!(path = %output.path.display(), %outcome, "Output written");
            reports.push(WriteReport {
                path: output.path.clone(),
                role: output.role,
                outcome,
            });
        }

        Ok(reports)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_template(&self, id: TemplateId, context: &RenderContext) -> ReactorResult<String> {
        let body = self.templates.get(id.as_str())?;
        self.renderer.render(&body, context)
    }

    fn render_artifact(
        &self,
        request: &ArtifactRequest,
        resolved: &ResolvedVariant,
        config: &ProjectConfig,
    ) -> ReactorResult<Vec<RenderedOutput>> {
        let subdirectory = request.subdirectory();
        let names = DerivedNames::derive(&request.base_name, subdirectory, &resolved.naming)?;
        let context = RenderContext::for_artifact(&names, resolved.style_extension, config)?;

        let rendered = self.render_variant(resolved, &context)?;
        check_pair(&names, &rendered)?;

        let app_path = config.app_path();
        let script = script_path(subdirectory, &names);

        let mut outputs = vec![RenderedOutput::new(
            Path::new(app_path).join("scripts").join(&script),
            rendered.source,
            OutputRole::Source,
        )];

        if let Some(test) = rendered.test {
            outputs.push(RenderedOutput::new(
                Path::new("test").join("spec").join(&script),
                test,
                OutputRole::Test,
            ));
        }

        if let Some(style) = rendered.style {
            outputs.push(RenderedOutput::new(
                style_path(app_path, &names, resolved.style_extension),
                style,
                OutputRole::Style,
            ));
        }

        Ok(outputs)
    }

    fn render_config_asset(
        &self,
        asset: ConfigAsset,
        resolved: &ResolvedVariant,
        config: &ProjectConfig,
    ) -> ReactorResult<RenderedOutput> {
        let context = RenderContext::for_config(config)?;
        let content = self.render_template(resolved.source, &context)?;
        Ok(RenderedOutput::new(
            asset.destination(config.app_path(), resolved.style_extension),
            content,
            OutputRole::Config,
        ))
    }
}

/// `<subdir>/<dir?>/<File>.js`
fn script_path(subdirectory: &str, names: &DerivedNames) -> PathBuf {
    let mut path = PathBuf::from(subdirectory);
    for segment in names.slug.directory_segments() {
        path.push(segment);
    }
    path.push(format!("{}.js", names.slug.file));
    path
}

/// `<appPath>/styles/<dir?>/<File>/main.<ext>`
fn style_path(app_path: &str, names: &DerivedNames, extension: &str) -> PathBuf {
    let mut path = Path::new(app_path).join("styles");
    for segment in names.slug.directory_segments() {
        path.push(segment);
    }
    path.push(&names.slug.file);
    path.push(format!("main.{extension}"));
    path
}

/// The test must import the exported symbol from the module path.
fn check_pair(names: &DerivedNames, rendered: &RenderedArtifact) -> ReactorResult<()> {
    let class = &names.class_name;
    let inconsistent = |reason: String| ApplicationError::InconsistentTemplatePair {
        class_name: class.clone(),
        reason,
    };

    let exported = contains_word(&rendered.source, &format!("export default class {class}"))
        || contains_word(&rendered.source, &format!("export default {class}"));
    if !exported {
        return Err(inconsistent("source does not export it by default".into()).into());
    }

    if let Some(test) = &rendered.test {
        let import = format!("import {class} from '{}'", names.module_path);
        if !test.contains(&import) {
            return Err(inconsistent(format!("test does not contain `{import}`")).into());
        }
    }

    Ok(())
}

/// `needle` occurs and is not followed by another identifier character.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(i, _)| {
        haystack[i + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'))
    })
}

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for reactor.
//!
//! Pure logic: name derivation, variant resolution, configuration parsing
//! and placeholder rendering. All I/O (template bodies, project config
//! persistence, file writes) goes through ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few crates**: std plus thiserror and serde derives
//! - **Immutable values**: every domain type is Clone + PartialEq

// Public API - what the world sees
pub mod config;
pub mod error;
pub mod names;
pub mod render;
pub mod request;
pub mod value_objects;
pub mod variant;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use config::ProjectConfig;
pub use error::{DomainError, ErrorCategory};
pub use names::{DerivedNames, EntityNaming, FileSlug, capitalize, capitalize_file, file_slug};
pub use render::RenderContext;
pub use request::{ArtifactRequest, OutputRole, RenderedOutput};
pub use value_objects::{Architecture, ArtifactKind, ConfigAsset, ExtensionPolicy, StylesLanguage};
pub use variant::{CatalogEntry, ResolvedVariant, TemplateId, TemplateVariant, resolve};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn flux_config() -> ProjectConfig {
        ProjectConfig::new()
            .with_app_name("temp-test")
            .with_architecture("flux")
    }

    fn derive(request: &ArtifactRequest, config: &ProjectConfig) -> (ResolvedVariant, DerivedNames) {
        let resolved = resolve(request, config).unwrap();
        let names =
            DerivedNames::derive(&request.base_name, request.subdirectory(), &resolved.naming)
                .unwrap();
        (resolved, names)
    }

    // ========================================================================
    // Resolution + naming
    // ========================================================================

    #[test]
    fn flux_store_names() {
        let request = ArtifactRequest::new(ArtifactKind::Store, "Test");
        let (resolved, names) = derive(&request, &flux_config());

        assert_eq!(resolved.variant, TemplateVariant::FluxStore);
        assert_eq!(names.class_name, "TestStore");
        assert_eq!(names.module_path, "stores/TestStore");
        assert_eq!(
            resolved.dispatcher_name.as_deref(),
            Some("TempTestAppDispatcher")
        );
    }

    #[test]
    fn flux_action_names() {
        let request = ArtifactRequest::new(ArtifactKind::Action, "Test");
        let (_, names) = derive(&request, &flux_config());

        assert_eq!(names.class_name, "TestActionCreators");
        assert_eq!(names.module_path, "actions/TestActionCreators");
    }

    #[test]
    fn sub_path_component_names() {
        let request = ArtifactRequest::new(ArtifactKind::Component, "Foo/Bar");
        let (resolved, names) = derive(&request, &ProjectConfig::new());

        assert_eq!(resolved.variant, TemplateVariant::Component);
        assert_eq!(names.class_name, "Bar");
        assert_eq!(names.module_path, "components/Foo/Bar");
    }

    #[test]
    fn class_shares_component_directory() {
        let request = ArtifactRequest::new(ArtifactKind::Class, "Foo");
        let (_, names) = derive(&request, &ProjectConfig::new());
        assert_eq!(names.module_path, "components/Foo");
    }

    #[test]
    fn subdirectory_override_changes_module_path() {
        let request =
            ArtifactRequest::new(ArtifactKind::Component, "Card").with_subdirectory("widgets");
        let (_, names) = derive(&request, &ProjectConfig::new());
        assert_eq!(names.module_path, "widgets/Card");
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn validator_rejects_blank_names() {
        let request = ArtifactRequest::new(ArtifactKind::Store, " ");
        assert!(matches!(
            DomainValidator::validate_request(&request),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn validator_checks_config_asset_names() {
        let ok = ArtifactRequest::new(ArtifactKind::Config, "karma");
        assert!(DomainValidator::validate_request(&ok).is_ok());

        let bad = ArtifactRequest::new(ArtifactKind::Config, "gruntfile");
        assert!(matches!(
            DomainValidator::validate_request(&bad),
            Err(DomainError::UnknownConfigAsset { .. })
        ));
    }

    #[test]
    fn validator_rejects_escaping_subdirectory() {
        let request = ArtifactRequest::new(ArtifactKind::Class, "Foo")
            .with_subdirectory("../../../outside");
        assert!(matches!(
            DomainValidator::validate_request(&request),
            Err(DomainError::PathOutsideProject { .. })
        ));

        let nested = ArtifactRequest::new(ArtifactKind::Class, "Foo").with_subdirectory("lib/util/");
        assert!(DomainValidator::validate_request(&nested).is_ok());
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    #[test]
    fn paired_templates_share_names() {
        let request = ArtifactRequest::new(ArtifactKind::Store, "Test");
        let config = flux_config();
        let (resolved, names) = derive(&request, &config);
        let ctx = RenderContext::for_artifact(&names, resolved.style_extension, &config).unwrap();

        let source = ctx.render("let {{CLASS_NAME}} = {};\nexport default {{CLASS_NAME}};");
        let test = ctx.render(
            "import {{CLASS_NAME}} from '{{MODULE_PATH}}';\ndescribe('{{CLASS_NAME}}', () => {});",
        );

        assert!(source.contains("let TestStore"));
        assert!(test.contains("import TestStore from 'stores/TestStore'"));
        assert!(test.contains("describe('TestStore'"));
    }
}

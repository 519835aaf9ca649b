use crate::domain::{
    error::DomainError,
    names::{validate_name, validate_relative_dir},
    request::{ArtifactRequest, RenderedOutput, validate_outputs},
    value_objects::{ArtifactKind, ConfigAsset},
};

/// Centralized domain validation.
///
/// Checks live with the types they guard; this is the single entry point
/// the application layer calls.
pub struct DomainValidator;

impl DomainValidator {
    /// Reject a request before any name is derived.
    pub fn validate_request(request: &ArtifactRequest) -> Result<(), DomainError> {
        if let Some(subdirectory) = &request.target_subdirectory {
            validate_relative_dir(subdirectory.trim_matches('/'))?;
        }
        match request.kind {
            ArtifactKind::Config => request.base_name.parse::<ConfigAsset>().map(|_| ()),
            _ => validate_name(&request.base_name),
        }
    }

    pub fn validate_outputs(outputs: &[RenderedOutput]) -> Result<(), DomainError> {
        validate_outputs(outputs)
    }
}

//! Application layer for reactor.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, ProjectService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GeneratorService, ProjectService, ProjectSettings, RenderedArtifact,
    TemplateInfo, // DTO for template metadata
    TemplateService, WriteReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ConfigStore, Filesystem, TemplateOrigin, TemplateRenderer, TemplateStore, WriteOutcome,
};

pub use error::ApplicationError;

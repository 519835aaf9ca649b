//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a store" or "initialise a project".

pub mod generator_service;
pub mod project_service;
pub mod template_service;

pub use generator_service::{GeneratorService, RenderedArtifact, WriteReport};
pub use project_service::{ProjectService, ProjectSettings, snapshot};
pub use template_service::{TemplateInfo, TemplateService};

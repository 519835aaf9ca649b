//! reactor core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for `reactor`, a
//! scaffolding tool for flux and reflux React projects.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           reactor-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GeneratorService, ProjectService, ...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ConfigStore, TemplateStore, Renderer,  │
//! │  Filesystem)                            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     reactor-adapters (Infrastructure)   │
//! │ (BuiltinTemplateStore, LocalFilesystem) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (names, variant resolution, context)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reactor_core::prelude::*;
//!
//! let service = GeneratorService::new(store, renderer, filesystem);
//! let config = ProjectConfig::new().with_architecture("flux").with_app_name("demo");
//! let request = ArtifactRequest::new(ArtifactKind::Store, "Todo");
//!
//! let outputs = service.generate(&request, &config)?;
//! service.emit(&outputs)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GeneratorService, ProjectService, ProjectSettings, TemplateInfo,
        TemplateService, WriteReport,
        ports::{ConfigStore, Filesystem, TemplateOrigin, TemplateRenderer, TemplateStore, WriteOutcome},
    };
    pub use crate::domain::{
        Architecture, ArtifactKind, ArtifactRequest, ConfigAsset, DomainError, ExtensionPolicy,
        OutputRole, ProjectConfig, RenderContext, RenderedOutput, StylesLanguage, TemplateId,
    };
    pub use crate::error::{ReactorError, ReactorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

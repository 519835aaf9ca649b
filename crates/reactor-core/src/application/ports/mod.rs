//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `reactor-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ConfigStore`: Project configuration (`.yo-rc.json`)
//!   - `TemplateStore`: Template bodies by id
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `Filesystem`: File writes
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ConfigStore, Filesystem, TemplateOrigin, TemplateRenderer, TemplateStore, WriteOutcome,
};

#[cfg(test)]
pub use output::{MockConfigStore, MockFilesystem, MockTemplateRenderer, MockTemplateStore};

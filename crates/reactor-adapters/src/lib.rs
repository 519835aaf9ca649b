//! Infrastructure adapters for reactor.
//!
//! This crate implements the ports defined in `reactor_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod config_store;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use config_store::{JsonConfigStore, MemoryConfigStore};
pub use filesystem::{ConflictPolicy, LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderRenderer;
pub use template_store::{BuiltinTemplateStore, LayeredTemplateStore};

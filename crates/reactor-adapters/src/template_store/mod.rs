//! Template store adapters.

mod builtin;
mod layered;

pub use builtin::BuiltinTemplateStore;
pub use layered::LayeredTemplateStore;

//! Store serving only the embedded template bodies.

use reactor_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::ReactorResult,
};

use crate::builtin_templates;

/// Read-only store over the bodies compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn get(&self, id: &str) -> ReactorResult<String> {
        builtin_templates::get(id)
            .map(str::to_string)
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() }.into())
    }

    fn ids(&self) -> ReactorResult<Vec<String>> {
        Ok(builtin_templates::ids().map(str::to_string).collect())
    }
}

//! Template Service - template listing and inspection.
//!
//! Separated from GeneratorService for single responsibility.

use crate::{
    application::ports::{TemplateOrigin, TemplateStore},
    domain::{Architecture, ArtifactKind, OutputRole, variant::catalog_entry},
    error::ReactorResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: String,
    /// `None` for store entries no resolver path asks for.
    pub kind: Option<ArtifactKind>,
    pub architecture: Option<Architecture>,
    pub role: Option<OutputRole>,
    pub origin: TemplateOrigin,
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// One row per template id in the store.
    pub fn list(&self) -> ReactorResult<Vec<TemplateInfo>> {
        Ok(self
            .store
            .ids()?
            .into_iter()
            .map(|id| {
                let entry = catalog_entry(&id);
                TemplateInfo {
                    kind: entry.map(|e| e.kind),
                    architecture: entry.and_then(|e| e.architecture),
                    role: entry.map(|e| e.role),
                    origin: self.store.origin(&id),
                    id,
                }
            })
            .collect())
    }

    /// Raw body of a template.
    pub fn show(&self, id: &str) -> ReactorResult<String> {
        self.store.get(id)
    }
}

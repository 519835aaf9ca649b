//! Template renderer adapters.

mod placeholder;

pub use placeholder::{PlaceholderRenderer, unresolved_placeholders};

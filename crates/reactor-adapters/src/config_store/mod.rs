//! Project configuration adapters.

mod json;
mod memory;

pub use json::{CONFIG_FILE, JsonConfigStore, NAMESPACE};
pub use memory::MemoryConfigStore;

//! Filesystem adapters.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

/// What to do when a generated file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Replace the file (`--force`).
    Overwrite,
    /// Leave the existing file alone.
    #[default]
    Skip,
}

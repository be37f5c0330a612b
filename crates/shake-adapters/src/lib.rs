//! Infrastructure adapters for shake-sass.
//!
//! This crate implements the ports defined in `shake-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod copy;
pub mod filesystem;
pub mod template_source;

// Re-export commonly used adapters
pub use copy::copy_tree;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_source::{DirectorySource, EmbeddedSource};

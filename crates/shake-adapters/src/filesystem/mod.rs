//! Destinations the scaffolder writes into.
//!
//! [`LocalFilesystem`] is what the binary uses; [`MemoryFilesystem`] keeps
//! everything in a map so tests can inspect and sabotage writes.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

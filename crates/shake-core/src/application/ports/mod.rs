//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `shake-adapters` implement these.
//!
//! - `Filesystem`: destination writes
//! - `TemplateSource`: template tree enumeration

pub mod output;

pub use output::{Filesystem, TemplateEntries, TemplateSource};

#[cfg(test)]
pub use output::MockFilesystem;

//! Core domain layer for shake-sass.
//!
//! Pure data and invariants, no I/O. Everything that touches a disk goes
//! through the ports in `crate::application::ports`.
//!
//! - **No I/O**: paths are validated, never opened
//! - **Immutable entries**: template entries are plain values
//! - **Only std + serde + thiserror**
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{RelativePath, ScaffoldReport, TemplateEntry, TemplateFile};
pub use error::DomainError;
pub use value_objects::ConflictPolicy;

//! Application layer for shake-sass.
//!
//! - **Services**: the [`Scaffolder`] use case
//! - **Ports**: interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer and the ports; path
//! rules live in `crate::domain`.

pub mod ports;
pub mod services;

pub use services::Scaffolder;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateEntries, TemplateSource};

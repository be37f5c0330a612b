//! Template source adapters.

mod directory;
mod embedded;

pub use directory::DirectorySource;
pub use embedded::EmbeddedSource;

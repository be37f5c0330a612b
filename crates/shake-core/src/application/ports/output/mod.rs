//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `shake-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TemplateEntry;
use crate::error::ShakeResult;

/// Lazy, finite, single-use sequence of template entries.
pub type TemplateEntries<'a> = Box<dyn Iterator<Item = ShakeResult<TemplateEntry>> + 'a>;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `shake_adapters::filesystem::LocalFilesystem` (production)
/// - `shake_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ShakeResult<()>;

    /// Write bytes to a file, replacing any previous content.
    fn write_file(&self, path: &Path, contents: &[u8]) -> ShakeResult<()>;

    /// Add the executable bit to a file. A no-op where that has no meaning.
    fn set_executable(&self, path: &Path) -> ShakeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for reading a template tree.
///
/// Implemented by:
/// - `shake_adapters::template_source::DirectorySource` (directory on disk)
/// - `shake_adapters::template_source::EmbeddedSource` (bundled Sass starter)
pub trait TemplateSource: Send + Sync {
    /// Human-readable origin, used in logs and messages.
    fn describe(&self) -> String;

    /// Open the tree and return its entries.
    ///
    /// Fails up front when the tree cannot be opened at all; per-entry read
    /// failures surface as `Err` items of the returned iterator.
    fn entries(&self) -> ShakeResult<TemplateEntries<'_>>;
}

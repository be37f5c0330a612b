//! Directory-to-directory copy, the plain form of a scaffolding run.

use std::path::Path;

use tracing::instrument;

use shake_core::{application::Scaffolder, domain::ScaffoldReport, error::ShakeResult};

use crate::{DirectorySource, LocalFilesystem};

/// Copy every file under `template_root` to the same relative path under
/// `destination_root`, overwriting existing files.
///
/// Fails without writing anything if `template_root` is not a directory.
/// Any later failure stops the copy; files copied so far are kept. A
/// `destination_root` inside `template_root` is left out of the walk.
#[instrument(skip_all, fields(from = %template_root.display(), to = %destination_root.display()))]
pub fn copy_tree(template_root: &Path, destination_root: &Path) -> ShakeResult<ScaffoldReport> {
    let source = DirectorySource::new(template_root).excluding(destination_root);
    Scaffolder::new(Box::new(LocalFilesystem::new())).run(&source, destination_root)
}

//! Template tree read from a directory on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use shake_core::{
    application::ports::{TemplateEntries, TemplateSource},
    domain::{RelativePath, TemplateEntry, TemplateFile},
    error::{ShakeError, ShakeResult},
};

/// Walks `root` and yields every directory and regular file below it.
///
/// Entries come out sorted by file name, parents before children. Symlinks
/// are followed; other special files are skipped. File contents are read
/// only when the iterator reaches them.
///
/// The walk is lazy, so a destination nested inside `root` would show up
/// in it once the copy creates it. Register such a directory with
/// [`DirectorySource::excluding`] and it is pruned along with everything
/// below it.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    excluded: Option<PathBuf>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded: None,
        }
    }

    /// Never descend into `dir` (usually the copy destination).
    pub fn excluding(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded = Some(dir.into());
        self
    }

    /// `true` if `entry` is the excluded directory. Compared by canonical
    /// path since the destination may not exist until the copy starts.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let Some(excluded) = &self.excluded else {
            return false;
        };
        if !entry.file_type().is_dir() {
            return false;
        }
        match (fs::canonicalize(entry.path()), fs::canonicalize(excluded)) {
            (Ok(walked), Ok(excluded)) => walked == excluded,
            _ => false,
        }
    }

    fn check_root(&self) -> ShakeResult<()> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ShakeError::TemplateRootMissing {
                path: self.root.clone(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ShakeError::TemplateRootMissing {
                path: self.root.clone(),
            }),
            Err(e) => Err(ShakeError::io("open template root", &self.root, e)),
        }
    }

    fn convert(&self, walked: walkdir::Result<DirEntry>) -> Option<ShakeResult<TemplateEntry>> {
        let entry = match walked {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                return Some(Err(ShakeError::io("walk", path, e.into())));
            }
        };

        let relative = match RelativePath::from_root(&self.root, entry.path()) {
            Ok(relative) => relative,
            Err(e) => return Some(Err(e.into())),
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            trace!(path = %relative, "Template directory");
            return Some(Ok(TemplateEntry::Directory(relative)));
        }
        if !file_type.is_file() {
            debug!(path = %entry.path().display(), "Skipping special file");
            return None;
        }

        Some(read_file(entry.path(), relative))
    }
}

fn read_file(path: &Path, relative: RelativePath) -> ShakeResult<TemplateEntry> {
    let contents = fs::read(path).map_err(|e| ShakeError::io("read", path, e))?;
    let metadata = fs::metadata(path).map_err(|e| ShakeError::io("read metadata of", path, e))?;
    trace!(path = %relative, bytes = contents.len(), "Template file");

    Ok(TemplateEntry::File(
        TemplateFile::new(relative, contents).executable(is_executable(&metadata)),
    ))
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}

impl TemplateSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn entries(&self) -> ShakeResult<TemplateEntries<'_>> {
        self.check_root()?;
        debug!(root = %self.root.display(), "Walking template directory");

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                let skip = self.is_excluded(entry);
                if skip {
                    debug!(path = %entry.path().display(), "Skipping excluded directory");
                }
                !skip
            });

        Ok(Box::new(walker.filter_map(move |walked| self.convert(walked))))
    }
}

//! Template tree entries.
//!
//! A template tree is consumed as a flat sequence of [`TemplateEntry`]
//! values. Directories are listed explicitly so that empty directories
//! survive the copy; files carry their raw bytes.

use std::fmt;

use crate::domain::RelativePath;

/// One item of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEntry {
    /// A directory to recreate under the destination.
    Directory(RelativePath),
    /// A file to copy verbatim.
    File(TemplateFile),
}

impl TemplateEntry {
    /// Path of this entry relative to the tree root.
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory(path) => path,
            Self::File(file) => &file.path,
        }
    }

    /// `true` for directory entries.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

impl fmt::Display for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "{path}/"),
            Self::File(file) => write!(f, "{}", file.path),
        }
    }
}

/// A file inside a template tree.
///
/// Content is opaque bytes: nothing is decoded or substituted.
#[derive(Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: RelativePath,
    pub contents: Vec<u8>,
    pub executable: bool,
}

impl TemplateFile {
    /// A regular (non-executable) file.
    pub fn new(path: RelativePath, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            contents: contents.into(),
            executable: false,
        }
    }

    /// Mark the file as executable.
    pub fn executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// `true` if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

// Contents can be large binary blobs; print the size instead.
impl fmt::Debug for TemplateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFile")
            .field("path", &self.path)
            .field("len", &self.contents.len())
            .field("executable", &self.executable)
            .finish()
    }
}

//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use shake_core::{
    application::ports::Filesystem,
    error::{ShakeError, ShakeResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// `Scaffolder` and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.read().files.get(path).cloned()
    }

    /// Read a file as UTF-8 (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read_file(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.read().executables.contains(path)
    }

    /// Check if a directory was created.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self.read().files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.write().read_only.insert(path.into());
    }

    /// Seed a file, creating its parent directories.
    pub fn seed_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        let mut inner = self.write();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path, contents.into());
    }

    // A poisoned lock only means another test thread panicked; the data is
    // still usable for inspection.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ShakeResult<()> {
        let mut inner = self.write();
        if inner.files.contains_key(path) {
            return Err(ShakeError::io(
                "create directory",
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "a file exists at this path"),
            ));
        }
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> ShakeResult<()> {
        let mut inner = self.write();

        if inner.read_only.contains(path) {
            return Err(ShakeError::io(
                "write file",
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "write denied"),
            ));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ShakeError::io(
                    "write file",
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                ));
            }
        }

        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> ShakeResult<()> {
        let mut inner = self.write();
        if !inner.files.contains_key(path) {
            return Err(ShakeError::io(
                "set permissions on",
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            ));
        }
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

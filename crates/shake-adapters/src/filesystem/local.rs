//! Local filesystem adapter using std::fs.

use std::path::Path;

use shake_core::{
    application::ports::Filesystem,
    error::{ShakeError, ShakeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ShakeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| ShakeError::io("create directory", path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> ShakeResult<()> {
        std::fs::write(path, contents).map_err(|e| ShakeError::io("write file", path, e))
    }

    fn set_executable(&self, path: &Path) -> ShakeResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| ShakeError::io("read metadata of", path, e))?;
            let mut perms = metadata.permissions();
            perms.set_mode(perms.mode() | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| ShakeError::io("set permissions on", path, e))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit outside Unix.
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_back_bytes() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("a.bin");

        fs.write_file(&path, &[0, 159, 146, 150]).unwrap();

        assert!(fs.exists(&path));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0, 159, 146, 150]);
    }

    #[test]
    fn write_without_parent_fails_with_io() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("missing/a.txt");

        let err = fs.write_file(&path, b"x").unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("a/b/c");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_adds_exec_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("build.sh");
        fs.write_file(&path, b"#!/bin/sh\n").unwrap();

        fs.set_executable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

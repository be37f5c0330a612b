use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use serde::{Serialize, Serializer};

use crate::domain::DomainError;

/// A path relative to a tree root.
///
/// Absolute paths and `..` segments are rejected at construction:
/// - They can escape the destination root
/// - They can overwrite arbitrary locations
/// - They are almost always a bug in a template tree
///
/// `RelativePath` is a *semantic guardrail*, not a filesystem abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Try to create a relative path.
    ///
    /// `.` segments are dropped; the remaining path must be non-empty.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let mut clean = PathBuf::new();

        for component in path.components() {
            match component {
                Component::Normal(segment) => clean.push(segment),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DomainError::UnsafePath {
                        path: path.display().to_string(),
                        reason: "parent directory components are not allowed",
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::UnsafePath {
                        path: path.display().to_string(),
                        reason: "absolute paths are not allowed",
                    });
                }
            }
        }

        if clean.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        Ok(Self(clean))
    }

    /// Express `path` relative to `root`.
    pub fn from_root(root: &Path, path: &Path) -> Result<Self, DomainError> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| DomainError::OutsideRoot {
                path: path.display().to_string(),
                root: root.display().to_string(),
            })?;
        Self::try_new(relative)
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Forward-slash rendering, identical on every platform.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        RelativePath::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------------
    // RelativePath
    // ---------------------------------------------------------------------

    #[test]
    fn accepts_nested_relative_path() {
        let path = RelativePath::try_new("scss/base/_reset.scss").unwrap();
        assert_eq!(path.to_string(), "scss/base/_reset.scss");
    }

    #[test]
    fn drops_current_dir_segments() {
        let path = RelativePath::try_new("./scss/./main.scss").unwrap();
        assert_eq!(path.to_string(), "scss/main.scss");
    }

    #[test]
    fn rejects_absolute_path() {
        let err = RelativePath::try_new("/etc/passwd").unwrap_err();
        assert!(matches!(err, DomainError::UnsafePath { .. }));
    }

    #[test]
    fn rejects_parent_dir() {
        let err = RelativePath::try_new("scss/../../outside.txt").unwrap_err();
        assert!(matches!(err, DomainError::UnsafePath { .. }));
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(RelativePath::try_new("").unwrap_err(), DomainError::EmptyPath);
        assert_eq!(RelativePath::try_new(".").unwrap_err(), DomainError::EmptyPath);
    }

    #[test]
    fn from_root_strips_prefix() {
        let path =
            RelativePath::from_root(Path::new("/tpl"), Path::new("/tpl/sub/b.txt")).unwrap();
        assert_eq!(path.to_string(), "sub/b.txt");
    }

    #[test]
    fn from_root_rejects_foreign_path() {
        let err = RelativePath::from_root(Path::new("/tpl"), Path::new("/other/b.txt"));
        assert!(matches!(err, Err(DomainError::OutsideRoot { .. })));
    }

    #[test]
    fn try_from_str() {
        let path = RelativePath::try_from("a.txt").unwrap();
        assert_eq!(path.as_path(), Path::new("a.txt"));
    }
}

//! Unified error handling for shake-core.
//!
//! Every failure of a scaffolding run is an I/O failure at heart; the
//! variants only differ in how much we can tell the user about it.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for shake-core operations.
#[derive(Debug, Error)]
pub enum ShakeError {
    /// The template root does not exist or is not a directory.
    #[error("Template root not found: {}", path.display())]
    TemplateRootMissing { path: PathBuf },

    /// A read or write failed.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template entry violated a path invariant.
    #[error("Invalid template entry: {0}")]
    Domain(#[from] DomainError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ShakeError {
    /// Build an [`ShakeError::Io`] for `operation` on `path`.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// `true` for failures that came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::TemplateRootMissing { .. } | Self::Io { .. })
    }

    /// The underlying `io::ErrorKind`, when there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::TemplateRootMissing { .. } => Some(io::ErrorKind::NotFound),
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRootMissing { path } => vec![
                format!("No directory at: {}", path.display()),
                "Check the --template-dir value or the scaffold.template_dir setting".into(),
                "Omit --template-dir to use the bundled Sass starter".into(),
            ],
            Self::Io { path, source, .. } => {
                let mut hints = vec![format!("Failed to access: {}", path.display())];
                match source.kind() {
                    io::ErrorKind::PermissionDenied => {
                        hints.push("Check that you have write permissions".into());
                    }
                    io::ErrorKind::NotFound => {
                        hints.push("Ensure the parent directory exists".into());
                    }
                    _ => {
                        hints.push("Check file permissions".into());
                        hints.push("Check available disk space".into());
                    }
                }
                hints.push("Files copied before the failure were left in place".into());
                hints
            }
            Self::Domain(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in shake-sass".into(),
                "Please report this issue with the output of -vv".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRootMissing { .. } => ErrorCategory::NotFound,
            Self::Io { .. } => ErrorCategory::Io,
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type ShakeResult<T> = Result<T, ShakeError>;

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Domain-level error type.
///
/// Raised when template data violates an invariant before any I/O happens.
/// All errors are cloneable and carry enough context to be shown as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A template entry path could escape the destination root.
    #[error("unsafe template path '{path}': {reason}")]
    UnsafePath { path: String, reason: &'static str },

    /// A template entry path is empty (it would name the root itself).
    #[error("empty template path")]
    EmptyPath,

    /// A path could not be expressed relative to its tree root.
    #[error("'{path}' is not inside template root '{root}'")]
    OutsideRoot { path: String, root: String },
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsafePath { path, .. } => vec![
                format!("Template entry '{path}' points outside the template tree"),
                "Remove absolute paths and '..' segments from the template".into(),
            ],
            Self::EmptyPath => vec!["This is likely a bug in the template source".into()],
            Self::OutsideRoot { root, .. } => vec![
                format!("Check that '{root}' is the directory you meant to copy"),
                "Symlinks pointing outside the template root are not supported".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_path_message_names_path() {
        let err = DomainError::UnsafePath {
            path: "../etc".into(),
            reason: "parent directory components are not allowed",
        };
        assert!(err.to_string().contains("../etc"));
        assert!(!err.suggestions().is_empty());
    }
}

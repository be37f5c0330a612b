//! Outcome of a scaffolding run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{ConflictPolicy, RelativePath};

/// What a [`Scaffolder`](crate::application::Scaffolder) run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub destination: PathBuf,
    pub policy: ConflictPolicy,
    /// Files written, in copy order.
    pub written: Vec<RelativePath>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<RelativePath>,
    /// Template directories recreated under the destination.
    pub directories: Vec<RelativePath>,
}

impl ScaffoldReport {
    pub fn new(destination: &Path, policy: ConflictPolicy) -> Self {
        Self {
            destination: destination.to_path_buf(),
            policy,
            written: Vec::new(),
            skipped: Vec::new(),
            directories: Vec::new(),
        }
    }

    pub fn record_written(&mut self, path: RelativePath) {
        self.written.push(path);
    }

    pub fn record_skipped(&mut self, path: RelativePath) {
        self.skipped.push(path);
    }

    pub fn record_directory(&mut self, path: RelativePath) {
        self.directories.push(path);
    }

    /// Files written plus files skipped.
    pub fn file_count(&self) -> usize {
        self.written.len() + self.skipped.len()
    }

    /// `true` if the template tree had nothing to copy.
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0 && self.directories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_written_and_skipped() {
        let mut report = ScaffoldReport::new(Path::new("/out"), ConflictPolicy::Skip);
        assert!(report.is_empty());

        report.record_written(RelativePath::try_new("a.txt").unwrap());
        report.record_skipped(RelativePath::try_new("b.txt").unwrap());
        report.record_directory(RelativePath::try_new("sub").unwrap());

        assert_eq!(report.file_count(), 2);
        assert!(!report.is_empty());
    }
}

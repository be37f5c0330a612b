//! Scaffolder - the copy use case.
//!
//! Workflow:
//! 1. Open the template source (nothing is written if this fails)
//! 2. Create the destination root
//! 3. Recreate every directory and copy every file, in source order
//!
//! Single pass and fail-fast: the first error stops the run and files
//! already copied stay where they are.

use std::path::Path;

use tracing::{debug, info, instrument, trace};

use crate::{
    application::ports::{Filesystem, TemplateSource},
    domain::{ConflictPolicy, ScaffoldReport, TemplateEntry, TemplateFile},
    error::ShakeResult,
};

/// Copies a template tree into a destination directory.
pub struct Scaffolder {
    filesystem: Box<dyn Filesystem>,
    policy: ConflictPolicy,
}

impl Scaffolder {
    /// Create a scaffolder writing through `filesystem`, overwriting
    /// existing files.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use shake_core::application::Scaffolder;
    ///
    /// let scaffolder = Scaffolder::new(Box::new(filesystem));
    /// let report = scaffolder.run(&source, Path::new("."))?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            policy: ConflictPolicy::default(),
        }
    }

    /// Use `policy` for files that already exist at the destination.
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Copy every entry of `source` under `destination_root`.
    #[instrument(
        skip_all,
        fields(
            source = %source.describe(),
            destination = %destination_root.display(),
            policy = %self.policy
        )
    )]
    pub fn run(
        &self,
        source: &dyn TemplateSource,
        destination_root: &Path,
    ) -> ShakeResult<ScaffoldReport> {
        // Open first: a missing template root must leave the disk untouched.
        let entries = source.entries()?;

        self.filesystem.create_dir_all(destination_root)?;

        let mut report = ScaffoldReport::new(destination_root, self.policy);

        for entry in entries {
            match entry? {
                TemplateEntry::Directory(dir) => {
                    let path = destination_root.join(dir.as_path());
                    trace!(path = %path.display(), "Creating directory");
                    self.filesystem.create_dir_all(&path)?;
                    report.record_directory(dir);
                }
                TemplateEntry::File(file) => {
                    self.copy_file(file, destination_root, &mut report)?;
                }
            }
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            directories = report.directories.len(),
            "Template copied"
        );
        Ok(report)
    }

    fn copy_file(
        &self,
        file: TemplateFile,
        destination_root: &Path,
        report: &mut ScaffoldReport,
    ) -> ShakeResult<()> {
        let path = destination_root.join(file.path.as_path());

        if self.filesystem.exists(&path) {
            match self.policy {
                ConflictPolicy::Skip => {
                    debug!(path = %path.display(), "Exists, skipping");
                    report.record_skipped(file.path);
                    return Ok(());
                }
                ConflictPolicy::Overwrite => {
                    debug!(path = %path.display(), "Exists, overwriting");
                }
            }
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        trace!(path = %path.display(), bytes = file.len(), "Writing file");
        self.filesystem.write_file(&path, &file.contents)?;

        if file.executable {
            self.filesystem.set_executable(&path)?;
        }

        report.record_written(file.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::ports::{MockFilesystem, TemplateEntries},
        domain::RelativePath,
        error::ShakeError,
    };

    // ── helpers ───────────────────────────────────────────────────────────

    struct VecSource(Vec<ShakeResult<TemplateEntry>>);

    impl TemplateSource for VecSource {
        fn describe(&self) -> String {
            "in-test tree".into()
        }

        fn entries(&self) -> ShakeResult<TemplateEntries<'_>> {
            let items: Vec<ShakeResult<TemplateEntry>> = self
                .0
                .iter()
                .map(|item| match item {
                    Ok(entry) => Ok(entry.clone()),
                    Err(e) => Err(ShakeError::Internal {
                        message: e.to_string(),
                    }),
                })
                .collect();
            Ok(Box::new(items.into_iter()))
        }
    }

    struct MissingSource;

    impl TemplateSource for MissingSource {
        fn describe(&self) -> String {
            "/does/not/exist".into()
        }

        fn entries(&self) -> ShakeResult<TemplateEntries<'_>> {
            Err(ShakeError::TemplateRootMissing {
                path: PathBuf::from("/does/not/exist"),
            })
        }
    }

    fn rel(s: &str) -> RelativePath {
        RelativePath::try_new(s).unwrap()
    }

    fn file(path: &str, contents: &str) -> ShakeResult<TemplateEntry> {
        Ok(TemplateEntry::File(TemplateFile::new(rel(path), contents)))
    }

    fn dir(path: &str) -> ShakeResult<TemplateEntry> {
        Ok(TemplateEntry::Directory(rel(path)))
    }

    fn permissive_dirs(fs: &mut MockFilesystem) {
        fs.expect_create_dir_all().returning(|_| Ok(()));
    }

    // ── tests ─────────────────────────────────────────────────────────────

    #[test]
    fn copies_files_and_directories() {
        let mut fs = MockFilesystem::new();
        permissive_dirs(&mut fs);
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|path, contents| path == Path::new("/out/a.txt") && contents == b"hello")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, contents| path == Path::new("/out/sub/b.txt") && contents == b"world")
            .times(1)
            .returning(|_, _| Ok(()));

        let source = VecSource(vec![
            file("a.txt", "hello"),
            dir("sub"),
            file("sub/b.txt", "world"),
        ]);

        let report = Scaffolder::new(Box::new(fs))
            .run(&source, Path::new("/out"))
            .unwrap();

        assert_eq!(report.written, vec![rel("a.txt"), rel("sub/b.txt")]);
        assert_eq!(report.directories, vec![rel("sub")]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn missing_source_touches_nothing() {
        // No expectations: any filesystem call would panic.
        let fs = MockFilesystem::new();

        let err = Scaffolder::new(Box::new(fs))
            .run(&MissingSource, Path::new("/out"))
            .unwrap_err();

        assert!(err.is_io());
        assert!(matches!(err, ShakeError::TemplateRootMissing { .. }));
    }

    #[test]
    fn creates_destination_root_first() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("/fresh/dest")))
            .times(1)
            .returning(|_| Ok(()));

        let report = Scaffolder::new(Box::new(fs))
            .run(&VecSource(vec![]), Path::new("/fresh/dest"))
            .unwrap();

        assert!(report.is_empty());
    }

    #[test]
    fn overwrite_policy_rewrites_existing_file() {
        let mut fs = MockFilesystem::new();
        permissive_dirs(&mut fs);
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let report = Scaffolder::new(Box::new(fs))
            .run(&VecSource(vec![file("a.txt", "hello")]), Path::new("/out"))
            .unwrap();

        assert_eq!(report.written, vec![rel("a.txt")]);
        assert_eq!(report.policy, ConflictPolicy::Overwrite);
    }

    #[test]
    fn skip_policy_leaves_existing_file() {
        let mut fs = MockFilesystem::new();
        permissive_dirs(&mut fs);
        fs.expect_exists()
            .returning(|path| path == Path::new("/out/a.txt"));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/out/b.txt"))
            .times(1)
            .returning(|_, _| Ok(()));

        let source = VecSource(vec![file("a.txt", "hello"), file("b.txt", "new")]);
        let report = Scaffolder::new(Box::new(fs))
            .with_policy(ConflictPolicy::Skip)
            .run(&source, Path::new("/out"))
            .unwrap();

        assert_eq!(report.skipped, vec![rel("a.txt")]);
        assert_eq!(report.written, vec![rel("b.txt")]);
    }

    #[test]
    fn stops_at_first_write_failure() {
        let mut fs = MockFilesystem::new();
        permissive_dirs(&mut fs);
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/out/a.txt"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/out/b.txt"))
            .times(1)
            .returning(|path, _| {
                Err(ShakeError::io(
                    "write file",
                    path,
                    io::Error::new(io::ErrorKind::StorageFull, "disk full"),
                ))
            });
        // No expectation for c.txt: reaching it would panic.

        let source = VecSource(vec![
            file("a.txt", "1"),
            file("b.txt", "2"),
            file("c.txt", "3"),
        ]);
        let err = Scaffolder::new(Box::new(fs))
            .run(&source, Path::new("/out"))
            .unwrap_err();

        assert_eq!(err.io_kind(), Some(io::ErrorKind::StorageFull));
    }

    #[test]
    fn stops_at_first_source_failure() {
        let mut fs = MockFilesystem::new();
        permissive_dirs(&mut fs);
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let source = VecSource(vec![
            file("a.txt", "1"),
            Err(ShakeError::Internal {
                message: "unreadable".into(),
            }),
            file("c.txt", "3"),
        ]);
        let result = Scaffolder::new(Box::new(fs)).run(&source, Path::new("/out"));

        assert!(matches!(result, Err(ShakeError::Internal { .. })));
    }

    #[test]
    fn executable_files_get_the_bit() {
        let mut fs = MockFilesystem::new();
        permissive_dirs(&mut fs);
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_executable()
            .with(eq(PathBuf::from("/out/bin/build.sh")))
            .times(1)
            .returning(|_| Ok(()));

        let source = VecSource(vec![Ok(TemplateEntry::File(
            TemplateFile::new(rel("bin/build.sh"), "#!/bin/sh\n").executable(true),
        ))]);
        Scaffolder::new(Box::new(fs))
            .run(&source, Path::new("/out"))
            .unwrap();
    }
}

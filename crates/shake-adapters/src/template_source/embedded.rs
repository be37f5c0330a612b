//! The Sass starter tree compiled into the binary.

use std::{
    collections::{HashSet, VecDeque},
    path::PathBuf,
    vec,
};

use rust_embed::RustEmbed;
use tracing::debug;

use shake_core::{
    application::ports::{TemplateEntries, TemplateSource},
    domain::{RelativePath, TemplateEntry, TemplateFile},
    error::{ShakeError, ShakeResult},
};

/// Embedded Sass starter templates.
#[derive(RustEmbed)]
#[folder = "templates/"]
struct SassStarter;

/// Template source backed by the bundled Sass starter.
///
/// rust-embed only records files, so every file's ancestor directories are
/// emitted (once) right before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }

    /// Sorted paths of every bundled file.
    pub fn file_names() -> Vec<String> {
        let mut names: Vec<String> = SassStarter::iter().map(|name| name.into_owned()).collect();
        names.sort();
        names
    }
}

impl TemplateSource for EmbeddedSource {
    fn describe(&self) -> String {
        "bundled Sass starter".into()
    }

    fn entries(&self) -> ShakeResult<TemplateEntries<'_>> {
        let names = Self::file_names();
        debug!(files = names.len(), "Reading embedded templates");
        Ok(Box::new(EmbeddedEntries {
            names: names.into_iter(),
            seen_dirs: HashSet::new(),
            pending: VecDeque::new(),
        }))
    }
}

struct EmbeddedEntries {
    names: vec::IntoIter<String>,
    seen_dirs: HashSet<PathBuf>,
    pending: VecDeque<ShakeResult<TemplateEntry>>,
}

impl EmbeddedEntries {
    fn expand(&mut self, name: &str) {
        let path = match RelativePath::try_new(name) {
            Ok(path) => path,
            Err(e) => {
                self.pending.push_back(Err(e.into()));
                return;
            }
        };

        let mut parents: Vec<PathBuf> = path
            .as_path()
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .collect();
        parents.reverse();

        for parent in parents {
            if self.seen_dirs.insert(parent.clone()) {
                match RelativePath::try_new(parent) {
                    Ok(dir) => self.pending.push_back(Ok(TemplateEntry::Directory(dir))),
                    Err(e) => self.pending.push_back(Err(e.into())),
                }
            }
        }

        let entry = match SassStarter::get(name) {
            Some(embedded) => Ok(TemplateEntry::File(TemplateFile::new(
                path,
                embedded.data.into_owned(),
            ))),
            None => Err(ShakeError::Internal {
                message: format!("embedded template '{name}' is listed but missing"),
            }),
        };
        self.pending.push_back(entry);
    }
}

impl Iterator for EmbeddedEntries {
    type Item = ShakeResult<TemplateEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.pending.pop_front() {
                return Some(entry);
            }
            let name = self.names.next()?;
            self.expand(&name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect() -> Vec<TemplateEntry> {
        EmbeddedSource::new()
            .entries()
            .unwrap()
            .collect::<ShakeResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn bundle_is_not_empty() {
        assert!(!EmbeddedSource::file_names().is_empty());
    }

    #[test]
    fn bundle_has_sass_entry_point() {
        assert!(EmbeddedSource::file_names().contains(&"scss/main.scss".to_string()));
    }

    #[test]
    fn every_file_is_yielded_once() {
        let files: Vec<String> = collect()
            .into_iter()
            .filter(|e| !e.is_dir())
            .map(|e| e.path().to_string())
            .collect();
        assert_eq!(files, EmbeddedSource::file_names());
    }

    #[test]
    fn directories_precede_their_files() {
        let entries = collect();
        let mut seen: HashSet<String> = HashSet::new();

        for entry in &entries {
            if let Some(parent) = entry.path().as_path().parent() {
                if !parent.as_os_str().is_empty() {
                    let parent = RelativePath::try_new(parent).unwrap().to_string();
                    assert!(seen.contains(&parent), "{entry} came before {parent}/");
                }
            }
            if entry.is_dir() {
                assert!(seen.insert(entry.path().to_string()), "duplicate {entry}");
            }
        }
    }

    #[test]
    fn contents_match_embedded_data() {
        for entry in collect() {
            if let TemplateEntry::File(file) = entry {
                let name = file.path.to_string();
                let embedded = SassStarter::get(&name).unwrap();
                assert_eq!(file.contents, embedded.data.as_ref());
            }
        }
    }
}

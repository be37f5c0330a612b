//! Command handlers. Each translates parsed arguments into calls on the
//! core and prints the result; no copy logic lives here.

use std::path::{Path, PathBuf};

use tracing::debug;

use shake_adapters::{DirectorySource, EmbeddedSource};
use shake_core::application::TemplateSource;

pub mod completions;
pub mod config;
pub mod init;
pub mod list;

/// The template tree to use: a directory when one is given, otherwise the
/// bundled Sass starter. `destination`, when set, is kept out of a
/// directory walk so a copy never reads its own output.
pub(crate) fn template_source(
    template_dir: Option<PathBuf>,
    destination: Option<&Path>,
) -> Box<dyn TemplateSource> {
    match template_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            let source = DirectorySource::new(dir);
            match destination {
                Some(dest) => Box::new(source.excluding(dest)),
                None => Box::new(source),
            }
        }
        None => Box::new(EmbeddedSource::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bundled_templates() {
        assert_eq!(template_source(None, None).describe(), "bundled Sass starter");
    }

    #[test]
    fn directory_overrides_bundle() {
        let source = template_source(Some(PathBuf::from("/srv/tpl")), Some(Path::new("out")));
        assert_eq!(source.describe(), "/srv/tpl");
    }
}

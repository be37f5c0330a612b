//! Implementation of the `shake-sass list` command.

use shake_core::domain::TemplateEntry;

use crate::{
    cli::ListArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = super::template_source(args.template_dir.or(config.scaffold.template_dir), None);

    let entries = source
        .entries()
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(CliError::Core)?;
    let paths = visible_paths(&entries, args.dirs);

    if output.is_json() {
        output.json(&paths)?;
        return Ok(());
    }

    output.header(&format!("Templates ({}):", source.describe()))?;
    for path in &paths {
        output.print(&format!("  {path}"))?;
    }

    Ok(())
}

/// Rendered entry paths; directories carry a trailing `/`.
fn visible_paths(entries: &[TemplateEntry], include_dirs: bool) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| include_dirs || !entry.is_dir())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shake_core::domain::{RelativePath, TemplateFile};

    fn sample() -> Vec<TemplateEntry> {
        vec![
            TemplateEntry::Directory(RelativePath::try_new("scss").unwrap()),
            TemplateEntry::File(TemplateFile::new(
                RelativePath::try_new("scss/main.scss").unwrap(),
                "",
            )),
        ]
    }

    #[test]
    fn files_only_by_default() {
        assert_eq!(visible_paths(&sample(), false), vec!["scss/main.scss"]);
    }

    #[test]
    fn dirs_flag_includes_directories() {
        assert_eq!(visible_paths(&sample(), true), vec!["scss/", "scss/main.scss"]);
    }
}

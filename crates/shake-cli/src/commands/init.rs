//! `shake-sass init` — copy the template tree into a directory.
//!
//! This is also what a bare `shake-sass` runs.

use std::path::Path;

use tracing::{info, instrument};

use shake_adapters::LocalFilesystem;
use shake_core::{application::Scaffolder, domain::ConflictPolicy};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Scaffold the destination directory.
///
/// 1. Resolve destination, template source and conflict policy
///    (flags win over config)
/// 2. Run the `Scaffolder` against the local filesystem
/// 3. Report what was written and skipped
#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let policy = resolve_policy(&args, &config);
    let destination = match args.destination {
        Some(dir) => dir,
        None => std::env::current_dir().with_cli_context(|| "reading current directory")?,
    };
    let source = super::template_source(
        args.template_dir.or(config.scaffold.template_dir),
        Some(&destination),
    );

    info!(
        destination = %destination.display(),
        source = %source.describe(),
        %policy,
        "Scaffold started"
    );

    let report = Scaffolder::new(Box::new(LocalFilesystem::new()))
        .with_policy(policy)
        .run(source.as_ref(), &destination)
        .map_err(CliError::Core)?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Scaffolded {} into {}",
        source.describe(),
        display_destination(&report.destination),
    ))?;
    output.print(&format!(
        "  {} file(s) written, {} director{} created",
        report.written.len(),
        report.directories.len(),
        if report.directories.len() == 1 { "y" } else { "ies" },
    ))?;

    if !report.skipped.is_empty() {
        output.warning(&format!(
            "{} existing file(s) left untouched:",
            report.skipped.len()
        ))?;
        for path in &report.skipped {
            output.print(&format!("  {path}"))?;
        }
    }

    Ok(())
}

fn resolve_policy(args: &InitArgs, config: &AppConfig) -> ConflictPolicy {
    if args.skip_existing {
        ConflictPolicy::Skip
    } else if args.overwrite {
        ConflictPolicy::Overwrite
    } else {
        config.scaffold.conflict
    }
}

fn display_destination(path: &Path) -> String {
    match std::env::current_dir() {
        Ok(cwd) if cwd == path => "the current directory".into(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.scaffold.conflict = ConflictPolicy::Skip;
        config
    }

    #[test]
    fn flag_forces_skip() {
        let args = InitArgs {
            skip_existing: true,
            ..InitArgs::default()
        };
        assert_eq!(resolve_policy(&args, &AppConfig::default()), ConflictPolicy::Skip);
    }

    #[test]
    fn config_policy_used_without_flag() {
        let args = InitArgs::default();
        assert_eq!(resolve_policy(&args, &AppConfig::default()), ConflictPolicy::Overwrite);
        assert_eq!(resolve_policy(&args, &skip_config()), ConflictPolicy::Skip);
    }

    #[test]
    fn overwrite_flag_beats_skip_config() {
        let args = InitArgs {
            overwrite: true,
            ..InitArgs::default()
        };
        assert_eq!(resolve_policy(&args, &skip_config()), ConflictPolicy::Overwrite);
    }
}

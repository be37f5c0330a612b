//! Flags accepted by every `shake-sass` invocation, with or without a
//! subcommand. Flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Log level: warnings by default, then info, debug, trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)",
        long_help = "More log output on stderr:
    (none)  - warnings and errors
    -v      - one line per scaffold run
    -vv     - every file skipped or overwritten
    -vvv    - every file and directory copied"
    )]
    pub verbose: u8,

    /// Print nothing on success.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing unless something fails"
    )]
    pub quiet: bool,

    /// Plain output. Also set by `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colour codes"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Settings file to use (must exist)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured, with status symbols.
    Human,
    /// Same text without colour.
    Plain,
    /// The report or listing as one JSON document.
    Json,
}

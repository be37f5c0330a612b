//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shake-sass",
    bin_name = "shake-sass",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a Sass starter project",
    long_about = "shake-sass copies a ready-to-compile Sass project skeleton \
                  into a directory. Run it with no arguments to scaffold the \
                  current directory.",
    after_help = "EXAMPLES:\n\
        \x20 shake-sass\n\
        \x20 shake-sass init ./my-site --skip-existing\n\
        \x20 shake-sass list\n\
        \x20 shake-sass completions bash > /usr/share/bash-completion/completions/shake-sass",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `init` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, defaulting to `init` in the current directory.
    pub fn command_or_default(&mut self) -> Commands {
        self.command
            .take()
            .unwrap_or_else(|| Commands::Init(InitArgs::default()))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy the template tree into a directory.
    #[command(
        about = "Scaffold a Sass project (default command)",
        after_help = "EXAMPLES:\n\
            \x20 shake-sass init                      # current directory\n\
            \x20 shake-sass init ./my-site\n\
            \x20 shake-sass init --skip-existing      # keep files you already have\n\
            \x20 shake-sass init --template-dir ./my-templates"
    )]
    Init(InitArgs),

    /// List the files of the template tree.
    #[command(
        visible_alias = "ls",
        about = "List template files",
        after_help = "EXAMPLES:\n\
            \x20 shake-sass list\n\
            \x20 shake-sass list --template-dir ./my-templates\n\
            \x20 shake-sass --output-format json list"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shake-sass completions bash > ~/.local/share/bash-completion/completions/shake-sass\n\
            \x20 shake-sass completions zsh  > ~/.zfunc/_shake-sass\n\
            \x20 shake-sass completions fish > ~/.config/fish/completions/shake-sass.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shake-sass config show\n\
            \x20 shake-sass config get scaffold.conflict\n\
            \x20 shake-sass config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shake-sass init`.
#[derive(Debug, Default, Args)]
pub struct InitArgs {
    /// Destination directory; created if absent.
    #[arg(value_name = "DIR", help = "Destination directory (default: current directory)")]
    pub destination: Option<PathBuf>,

    /// Keep files that already exist at the destination.
    #[arg(
        short = 's',
        long = "skip-existing",
        help = "Do not overwrite files that already exist"
    )]
    pub skip_existing: bool,

    /// Replace existing files even when config says to skip them.
    #[arg(
        long = "overwrite",
        conflicts_with = "skip_existing",
        help = "Overwrite files that already exist (overrides config)"
    )]
    pub overwrite: bool,

    /// Copy from a directory instead of the bundled templates.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory to copy instead of the bundled Sass starter"
    )]
    pub template_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `shake-sass list`.
#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// List a directory instead of the bundled templates.
    #[arg(long = "template-dir", value_name = "DIR", help = "Template directory to list")]
    pub template_dir: Option<PathBuf>,

    /// Include directory entries.
    #[arg(long = "dirs", help = "Also list directories")]
    pub dirs: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shake-sass completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shake-sass config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.conflict`.
        key: String,
    },
    /// Print all configuration values.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

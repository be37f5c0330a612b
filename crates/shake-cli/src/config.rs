//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SHAKE_<SECTION>__<KEY>`, e.g.
//!    `SHAKE_SCAFFOLD__CONFLICT=skip`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shake_core::domain::ConflictPolicy;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SHAKE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scaffolding behaviour.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// What to do with files that already exist at the destination.
    pub conflict: ConflictPolicy,
    /// Template directory to use instead of the bundled tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("invalid configuration value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shake-sass.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "shake-sass", "shake-sass")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".shake-sass.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (temp, path)
    }

    #[test]
    fn default_policy_is_overwrite() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scaffold.conflict, ConflictPolicy::Overwrite);
        assert!(cfg.scaffold.template_dir.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.scaffold, ScaffoldConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn reads_file_values() {
        let (_temp, path) = write_config(
            r#"
[scaffold]
conflict = "skip"
template_dir = "/srv/templates"

[output]
no_color = true
"#,
        );
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.scaffold.conflict, ConflictPolicy::Skip);
        assert_eq!(cfg.scaffold.template_dir, Some(PathBuf::from("/srv/templates")));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_temp, path) = write_config("[output]\nno_color = true\n");
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.scaffold.conflict, ConflictPolicy::Overwrite);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn policy_in_file_ignores_case() {
        let (_temp, path) = write_config("[scaffold]\nconflict = \"Skip\"\n");
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.scaffold.conflict, ConflictPolicy::Skip);
    }

    #[test]
    fn unknown_policy_is_error() {
        let (_temp, path) = write_config("[scaffold]\nconflict = \"prompt\"\n");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn serialises_to_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml.contains("conflict = \"overwrite\""));
        assert!(!toml.contains("template_dir"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

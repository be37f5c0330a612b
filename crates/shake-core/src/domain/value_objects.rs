//! Value objects.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What to do when a destination file already exists.
///
/// Deserialised through [`FromStr`], so config files and environment
/// variables accept the same spellings as the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ConflictPolicy {
    /// Replace the existing file with the template's content.
    #[default]
    Overwrite,
    /// Keep the existing file and report it as skipped.
    Skip,
}

impl ConflictPolicy {
    pub const ALL: [ConflictPolicy; 2] = [Self::Overwrite, Self::Skip];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown conflict policy '{other}' (expected overwrite or skip)"
            )),
        }
    }
}

impl TryFrom<String> for ConflictPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

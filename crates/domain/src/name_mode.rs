use serde::{Deserialize, Serialize};
use std::fmt;

/// Distribution naming convention two nodes agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMode {
    /// Fully-qualified names (`-name`).
    Long,
    /// Unqualified names (`-sname`).
    Short,
}

impl NameMode {
    pub const ALL: [NameMode; 2] = [NameMode::Long, NameMode::Short];

    pub const LONG_FALLBACK: &'static str = "127.0.0.1";
    pub const SHORT_FALLBACK: &'static str = "localhost";

    pub fn from_long(long_name: bool) -> Self {
        if long_name {
            NameMode::Long
        } else {
            NameMode::Short
        }
    }

    pub fn is_long(self) -> bool {
        matches!(self, NameMode::Long)
    }

    /// Static name used when nothing better is known.
    pub fn fallback(self) -> &'static str {
        match self {
            NameMode::Long => Self::LONG_FALLBACK,
            NameMode::Short => Self::SHORT_FALLBACK,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NameMode::Long => "long",
            NameMode::Short => "short",
        }
    }

    /// Command-line flag that starts `erl` distribution in this mode.
    pub fn erl_flag(self) -> &'static str {
        match self {
            NameMode::Long => "-name",
            NameMode::Short => "-sname",
        }
    }
}

impl fmt::Display for NameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

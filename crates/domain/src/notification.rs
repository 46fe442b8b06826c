use crate::name_mode::NameMode;
use serde::Serialize;
use std::fmt;

pub const TROUBLESHOOTING_URL: &str = "https://github.com/erlide/erlide/wiki/Troubleshooting";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks the user until acknowledged.
    ModalError,
    Warning,
}

impl Severity {
    pub fn is_modal(self) -> bool {
        matches!(self, Severity::ModalError)
    }
}

/// User-facing message. The text may carry simple markup such as links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    /// Neither naming mode can be used.
    pub fn cannot_connect() -> Self {
        Self {
            severity: Severity::ModalError,
            message: format!(
                "Can't connect to Erlang nodes.\n\n\
                 Please check your network settings,\nsee <a href=\"{}\">here</a>.",
                TROUBLESHOOTING_URL
            ),
        }
    }

    /// Only `mode` is unusable.
    pub fn degraded(mode: NameMode) -> Self {
        Self {
            severity: Severity::Warning,
            message: format!(
                "Can't connect to Erlang nodes using {} names.\n\n\
                 You might want to review your network settings,\nsee <a href=\"{}\">here</a>.",
                mode.label(),
                TROUBLESHOOTING_URL
            ),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Upper bound for a single probe node run
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Probe nodes are named `<prefix>_<random>`
    #[serde(default = "default_node_prefix")]
    pub node_prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            node_prefix: default_node_prefix(),
            cookie: None,
        }
    }
}

impl ProbeConfig {
    pub fn is_valid_node_prefix(prefix: &str) -> bool {
        !prefix.is_empty()
            && prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_node_prefix() -> String {
    "erlide_probe".to_string()
}

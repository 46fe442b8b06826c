use serde::{Deserialize, Serialize};

/// Location of the Erlang runtime used as the peer for name detection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// Explicit path to the `erl` executable. Takes precedence over `home`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erl_path: Option<String>,

    /// Installation root; `erl` is looked up under `<home>/bin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
}

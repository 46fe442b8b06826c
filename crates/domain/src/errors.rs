use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Local host name resolution failed: {0}")]
    LocalResolution(String),

    #[error("Node probe failed: {0}")]
    ProbeFailed(String),

    #[error("Node probe timed out after {secs}s")]
    ProbeTimeout { secs: u64 },

    #[error("Invalid node name: {0}")]
    InvalidNodeName(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

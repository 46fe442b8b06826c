use async_trait::async_trait;
use erlide_domain::{DomainError, NameMode};

/// A running Erlang runtime that can tell how it sees this host.
#[async_trait]
pub trait NodeProbe: Send + Sync {
    /// Host part the peer uses for `mode`, optionally forced to `hint`.
    ///
    /// `Ok(None)` means the peer cannot use that name.
    async fn probe_name(
        &self,
        mode: NameMode,
        hint: Option<&str>,
    ) -> Result<Option<String>, DomainError>;
}

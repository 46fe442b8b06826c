use async_trait::async_trait;
use erlide_domain::{DomainError, NameMode};

#[async_trait]
pub trait LocalHostResolver: Send + Sync {
    async fn resolve(&self, mode: NameMode) -> Result<String, DomainError>;
}

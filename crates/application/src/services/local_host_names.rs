use crate::ports::LocalHostResolver;
use erlide_domain::NameMode;
use std::sync::Arc;
use tracing::warn;

/// Local OS view of this host's names. Never fails: lookup errors are logged
/// and replaced by the static fallback for the mode.
pub struct LocalHostNames {
    resolver: Arc<dyn LocalHostResolver>,
}

impl LocalHostNames {
    pub fn new(resolver: Arc<dyn LocalHostResolver>) -> Self {
        Self { resolver }
    }

    pub async fn host_name(&self, mode: NameMode) -> String {
        match self.resolver.resolve(mode).await {
            Ok(name) if !name.trim().is_empty() => name,
            Ok(_) => {
                warn!(
                    mode = %mode,
                    fallback = mode.fallback(),
                    "Local {} host name is empty, defaulting to {}",
                    mode,
                    mode.fallback()
                );
                mode.fallback().to_string()
            }
            Err(e) => {
                warn!(
                    mode = %mode,
                    error = %e,
                    "Could not retrieve {} host name, defaulting to {}",
                    mode,
                    mode.fallback()
                );
                mode.fallback().to_string()
            }
        }
    }

    pub async fn long_host_name(&self) -> String {
        self.host_name(NameMode::Long).await
    }

    pub async fn short_host_name(&self) -> String {
        self.host_name(NameMode::Short).await
    }
}

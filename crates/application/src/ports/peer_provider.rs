use super::NodeProbe;
use std::sync::Arc;

/// Source of the runtime used when no peer is passed explicitly.
pub trait PeerProvider: Send + Sync {
    fn default_peer(&self) -> Option<Arc<dyn NodeProbe>>;
}

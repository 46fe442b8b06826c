use crate::ports::{NodeProbe, Notifier, PeerProvider};
use crate::services::{HostNameCache, LocalHostNames};
use erlide_domain::{HostNames, NameMode, Notification};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// One way of asking the peer for a name, tried in [`NAME_STRATEGIES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// Let the peer pick the host part itself.
    PeerDefault,
    /// Force the host part to what the local OS reports.
    PeerWithLocalHint,
}

pub const NAME_STRATEGIES: [NameStrategy; 2] =
    [NameStrategy::PeerDefault, NameStrategy::PeerWithLocalHint];

/// Starts probe nodes on a peer runtime and records how they resolve the
/// long and short host names.
pub struct DetectHostNamesUseCase {
    cache: Arc<HostNameCache>,
    local: Arc<LocalHostNames>,
    notifier: Arc<dyn Notifier>,
    peers: Option<Arc<dyn PeerProvider>>,
    detect_lock: Mutex<()>,
}

impl DetectHostNamesUseCase {
    pub fn new(
        cache: Arc<HostNameCache>,
        local: Arc<LocalHostNames>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cache,
            local,
            notifier,
            peers: None,
            detect_lock: Mutex::new(()),
        }
    }

    pub fn with_peer_provider(mut self, peers: Arc<dyn PeerProvider>) -> Self {
        self.peers = Some(peers);
        self
    }

    /// Detect against the configured default runtime, if any.
    pub async fn execute_default(&self) -> Arc<HostNames> {
        let peer = self.peers.as_ref().and_then(|p| p.default_peer());
        if peer.is_none() {
            debug!("No default runtime available for host name detection");
        }
        self.execute(peer.as_deref()).await
    }

    /// Without a peer nothing is negotiated and the cache keeps its values.
    pub async fn execute(&self, peer: Option<&dyn NodeProbe>) -> Arc<HostNames> {
        let _guard = self.detect_lock.lock().await;

        let Some(peer) = peer else {
            debug!("Host name detection skipped, no peer runtime");
            return self.cache.snapshot();
        };

        let mut names = HostNames::unresolved();
        for mode in NameMode::ALL {
            let name = self.resolve_mode(peer, mode).await;
            names = names.with(mode, name.as_deref());
        }

        info!(
            long = names.long().unwrap_or("-"),
            short = names.short().unwrap_or("-"),
            "Host names detected"
        );

        self.cache.store(names.clone());
        self.report(&names);
        self.cache.snapshot()
    }

    async fn resolve_mode(&self, peer: &dyn NodeProbe, mode: NameMode) -> Option<String> {
        for strategy in NAME_STRATEGIES {
            let hint = match strategy {
                NameStrategy::PeerDefault => None,
                NameStrategy::PeerWithLocalHint => Some(self.local.host_name(mode).await),
            };

            debug!(mode = %mode, ?strategy, hint = ?hint, "Probing peer for host name");

            match peer.probe_name(mode, hint.as_deref()).await {
                Ok(Some(name)) if !name.trim().is_empty() => return Some(name),
                Ok(_) => {
                    debug!(mode = %mode, ?strategy, "Peer could not resolve host name");
                }
                Err(e) => {
                    warn!(mode = %mode, ?strategy, error = %e, "Host name probe failed");
                }
            }
        }
        None
    }

    fn report(&self, names: &HostNames) {
        if names.is_unresolved() {
            self.notifier.notify(&Notification::cannot_connect());
            return;
        }
        for mode in names.missing_modes() {
            self.notifier.notify(&Notification::degraded(mode));
        }
    }
}

use crate::NotifyTarget;
use erlide_application::ports::Notifier;
use erlide_application::services::{HostNameCache, LocalHostNames};
use erlide_application::use_cases::{DetectHostNamesUseCase, GetHostNamesUseCase};
use erlide_domain::Config;
use erlide_infrastructure::erlang::ConfiguredPeerProvider;
use erlide_infrastructure::notify::{ConsoleNotifier, TracingNotifier};
use erlide_infrastructure::system::SystemHostResolver;
use std::sync::Arc;

pub struct Services {
    pub cache: Arc<HostNameCache>,
    pub local: Arc<LocalHostNames>,
    pub detect: Arc<DetectHostNamesUseCase>,
    pub get_names: Arc<GetHostNamesUseCase>,
}

impl Services {
    pub fn new(config: &Config, notify: NotifyTarget) -> Self {
        let cache = Arc::new(HostNameCache::new());
        let local = Arc::new(LocalHostNames::new(Arc::new(SystemHostResolver::new())));
        let notifier: Arc<dyn Notifier> = match notify {
            NotifyTarget::Console => Arc::new(ConsoleNotifier::new()),
            NotifyTarget::Log => Arc::new(TracingNotifier::new()),
        };
        let peers = Arc::new(ConfiguredPeerProvider::new(
            config.runtime.clone(),
            config.probe.clone(),
        ));

        Self {
            detect: Arc::new(
                DetectHostNamesUseCase::new(cache.clone(), local.clone(), notifier)
                    .with_peer_provider(peers),
            ),
            get_names: Arc::new(GetHostNamesUseCase::new(cache.clone())),
            local,
            cache,
        }
    }
}

use arc_swap::ArcSwap;
use erlide_domain::{HostNames, NameMode};
use std::sync::Arc;

/// Names under which this process is reachable, shared by everything that
/// talks to Erlang nodes.
///
/// Reads are lock-free loads of an immutable snapshot; writers replace the
/// whole snapshot at once.
pub struct HostNameCache {
    names: ArcSwap<HostNames>,
}

impl HostNameCache {
    pub fn new() -> Self {
        Self::with_names(HostNames::fallback())
    }

    pub fn with_names(names: HostNames) -> Self {
        Self {
            names: ArcSwap::from_pointee(names),
        }
    }

    pub fn snapshot(&self) -> Arc<HostNames> {
        self.names.load_full()
    }

    /// Writers go through `DetectHostNamesUseCase`, which serialises them.
    pub(crate) fn store(&self, names: HostNames) {
        self.names.store(Arc::new(names));
    }

    /// Cached name for `mode`, or its static fallback.
    pub fn host_name(&self, mode: NameMode) -> String {
        self.names.load().effective(mode).to_string()
    }

    pub fn is_this_host(&self, host: &str) -> bool {
        self.names.load().contains(host)
    }

    pub fn resolved(&self, mode: NameMode) -> Option<String> {
        self.names.load().get(mode).map(str::to_string)
    }

    pub fn resolved_long(&self) -> Option<String> {
        self.resolved(NameMode::Long)
    }

    pub fn resolved_short(&self) -> Option<String> {
        self.resolved(NameMode::Short)
    }

    pub fn can_use(&self, mode: NameMode) -> bool {
        self.names.load().get(mode).is_some()
    }

    pub fn can_use_long_names(&self) -> bool {
        self.can_use(NameMode::Long)
    }

    pub fn can_use_short_names(&self) -> bool {
        self.can_use(NameMode::Short)
    }
}

impl Default for HostNameCache {
    fn default() -> Self {
        Self::new()
    }
}

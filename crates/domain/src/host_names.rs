use crate::name_mode::NameMode;
use std::sync::Arc;

/// Snapshot of the names under which this host is reachable.
///
/// A field is `None` when no name works for that mode. Empty names are
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostNames {
    long: Option<Arc<str>>,
    short: Option<Arc<str>>,
}

impl HostNames {
    pub fn new(long: Option<&str>, short: Option<&str>) -> Self {
        Self {
            long: non_empty(long),
            short: non_empty(short),
        }
    }

    /// State before any detection ran.
    pub fn fallback() -> Self {
        Self::new(Some(NameMode::LONG_FALLBACK), Some(NameMode::SHORT_FALLBACK))
    }

    pub fn unresolved() -> Self {
        Self::new(None, None)
    }

    pub fn get(&self, mode: NameMode) -> Option<&str> {
        match mode {
            NameMode::Long => self.long.as_deref(),
            NameMode::Short => self.short.as_deref(),
        }
    }

    pub fn long(&self) -> Option<&str> {
        self.get(NameMode::Long)
    }

    pub fn short(&self) -> Option<&str> {
        self.get(NameMode::Short)
    }

    pub fn with(mut self, mode: NameMode, name: Option<&str>) -> Self {
        let name = non_empty(name);
        match mode {
            NameMode::Long => self.long = name,
            NameMode::Short => self.short = name,
        }
        self
    }

    /// Resolved name, or the static fallback for `mode`.
    pub fn effective(&self, mode: NameMode) -> &str {
        self.get(mode).unwrap_or_else(|| mode.fallback())
    }

    /// Exact, case-sensitive match against either resolved name.
    pub fn contains(&self, host: &str) -> bool {
        self.long() == Some(host) || self.short() == Some(host)
    }

    pub fn missing_modes(&self) -> Vec<NameMode> {
        NameMode::ALL
            .into_iter()
            .filter(|mode| self.get(*mode).is_none())
            .collect()
    }

    pub fn is_unresolved(&self) -> bool {
        self.long.is_none() && self.short.is_none()
    }
}

impl Default for HostNames {
    fn default() -> Self {
        Self::fallback()
    }
}

fn non_empty(name: Option<&str>) -> Option<Arc<str>> {
    name.filter(|n| !n.trim().is_empty()).map(Arc::from)
}

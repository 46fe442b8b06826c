use super::ErlNodeProbe;
use erlide_application::ports::{NodeProbe, PeerProvider};
use erlide_domain::config::{ProbeConfig, RuntimeConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(windows)]
const ERL_EXECUTABLE: &str = "erl.exe";
#[cfg(not(windows))]
const ERL_EXECUTABLE: &str = "erl";

/// Finds the Erlang runtime from configuration, falling back to `PATH`.
pub struct ConfiguredPeerProvider {
    runtime: RuntimeConfig,
    probe: ProbeConfig,
    search_path: Option<std::ffi::OsString>,
}

impl ConfiguredPeerProvider {
    pub fn new(runtime: RuntimeConfig, probe: ProbeConfig) -> Self {
        Self {
            runtime,
            probe,
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Replaces the directories searched when nothing is configured.
    pub fn with_search_path(mut self, path: Option<std::ffi::OsString>) -> Self {
        self.search_path = path;
        self
    }

    /// Priority order:
    /// 1. runtime.erl_path
    /// 2. <runtime.home>/bin/erl
    /// 3. first erl on the search path
    pub fn locate_erl(&self) -> Option<PathBuf> {
        if let Some(erl) = &self.runtime.erl_path {
            let erl = PathBuf::from(erl);
            if erl.is_file() {
                return Some(erl);
            }
            warn!(erl = %erl.display(), "Configured erl executable not found");
            return None;
        }

        if let Some(home) = &self.runtime.home {
            let erl = Path::new(home).join("bin").join(ERL_EXECUTABLE);
            if erl.is_file() {
                return Some(erl);
            }
            warn!(home = %home, "No erl executable under configured runtime home");
            return None;
        }

        let found = self
            .search_path
            .as_ref()
            .and_then(|path| {
                std::env::split_paths(path)
                    .map(|dir| dir.join(ERL_EXECUTABLE))
                    .find(|erl| erl.is_file())
            });
        if found.is_none() {
            debug!("No erl executable on the search path");
        }
        found
    }
}

impl PeerProvider for ConfiguredPeerProvider {
    fn default_peer(&self) -> Option<Arc<dyn NodeProbe>> {
        self.locate_erl()
            .map(|erl| Arc::new(ErlNodeProbe::new(erl, &self.probe)) as Arc<dyn NodeProbe>)
    }
}

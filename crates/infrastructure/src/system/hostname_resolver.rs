use async_trait::async_trait;
use erlide_application::ports::LocalHostResolver;
use erlide_domain::{DomainError, NameMode};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const DEFAULT_FQDN_COMMAND: &str = "hostname";
const DEFAULT_FQDN_TIMEOUT: Duration = Duration::from_secs(5);

/// Host names as the operating system reports them.
///
/// The short name comes from `gethostname`. The long name is the canonical
/// name printed by `hostname -f`; when that is unavailable the short name is
/// used if it is already qualified, otherwise the textual address it
/// resolves to.
pub struct SystemHostResolver {
    fqdn_command: String,
    fqdn_timeout: Duration,
}

impl SystemHostResolver {
    pub fn new() -> Self {
        Self::with_fqdn_command(DEFAULT_FQDN_COMMAND)
    }

    pub fn with_fqdn_command(command: impl Into<String>) -> Self {
        Self {
            fqdn_command: command.into(),
            fqdn_timeout: DEFAULT_FQDN_TIMEOUT,
        }
    }

    /// Upper bound for the FQDN command; slow DNS makes `hostname -f` hang.
    pub fn with_fqdn_timeout(mut self, timeout: Duration) -> Self {
        self.fqdn_timeout = timeout;
        self
    }

    fn short_name() -> Result<String, DomainError> {
        let name = hostname::get()
            .map_err(|e| DomainError::LocalResolution(e.to_string()))?
            .into_string()
            .map_err(|_| DomainError::LocalResolution("host name is not valid UTF-8".to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::LocalResolution("host name is empty".to_string()));
        }
        Ok(name.to_string())
    }

    async fn fqdn_from_command(&self) -> Option<String> {
        let mut command = Command::new(&self.fqdn_command);
        command.arg("-f").stdin(Stdio::null()).kill_on_drop(true);
        let output = command.output();

        let Ok(output) = tokio::time::timeout(self.fqdn_timeout, output).await else {
            debug!(
                command = %self.fqdn_command,
                timeout_ms = self.fqdn_timeout.as_millis() as u64,
                "FQDN command timed out"
            );
            return None;
        };

        match output {
            Ok(output) if output.status.success() => {
                let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
                (!name.is_empty()).then_some(name)
            }
            Ok(output) => {
                debug!(
                    command = %self.fqdn_command,
                    status = %output.status,
                    "FQDN command exited unsuccessfully"
                );
                None
            }
            Err(e) => {
                debug!(command = %self.fqdn_command, error = %e, "FQDN command failed to run");
                None
            }
        }
    }

    async fn long_name(&self) -> Result<String, DomainError> {
        if let Some(fqdn) = self.fqdn_from_command().await {
            return Ok(fqdn);
        }

        let short = Self::short_name()?;
        if short.contains('.') {
            return Ok(short);
        }

        let mut addrs = tokio::net::lookup_host((short.as_str(), 0))
            .await
            .map_err(|e| DomainError::LocalResolution(format!("{}: {}", short, e)))?;
        addrs
            .next()
            .map(|addr| addr.ip().to_string())
            .ok_or_else(|| DomainError::LocalResolution(format!("{}: no addresses", short)))
    }
}

impl Default for SystemHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalHostResolver for SystemHostResolver {
    async fn resolve(&self, mode: NameMode) -> Result<String, DomainError> {
        let name = match mode {
            NameMode::Long => self.long_name().await,
            NameMode::Short => Self::short_name(),
        };
        if let Ok(name) = &name {
            debug!(mode = %mode, name = %name, "Local host name resolved");
        }
        name
    }
}

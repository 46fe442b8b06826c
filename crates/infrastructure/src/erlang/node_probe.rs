use async_trait::async_trait;
use erlide_application::ports::NodeProbe;
use erlide_domain::config::ProbeConfig;
use erlide_domain::{DomainError, NameMode};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Prints `node()` only if epmd on the node's own host part answers, so a
/// name that does not resolve to this machine is never reported.
const CHECK_REACHABLE_AND_PRINT_NODE: &str = "\
    [_, Host] = string:split(atom_to_list(node()), \"@\"), \
    case net_adm:names(Host) of \
        {ok, _} -> io:format(\"~s~n\", [node()]), erlang:halt(0); \
        _ -> erlang:halt(1) \
    end.";

/// Host part Erlang reports when distribution is not running.
const NO_HOST: &str = "nohost";

/// Starts a throw-away hidden `erl` node in the requested naming mode and
/// reads back the node name it ended up with.
///
/// If distribution cannot start under that mode, or the host part of the
/// resulting name cannot be reached, the node exits with a non-zero status
/// and the probe answers `None`.
pub struct ErlNodeProbe {
    erl: PathBuf,
    node_prefix: String,
    cookie: Option<String>,
    timeout: Duration,
}

impl ErlNodeProbe {
    pub fn new(erl: impl Into<PathBuf>, config: &ProbeConfig) -> Self {
        Self {
            erl: erl.into(),
            node_prefix: config.node_prefix.clone(),
            cookie: config.cookie.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn node_base(&self) -> String {
        format!("{}_{}", self.node_prefix, fastrand::u32(..))
    }

    fn command(&self, mode: NameMode, node: &str) -> Command {
        let mut cmd = Command::new(&self.erl);
        cmd.arg("-noshell")
            .arg("-hidden")
            .arg(mode.erl_flag())
            .arg(node);
        if let Some(cookie) = &self.cookie {
            cmd.arg("-setcookie").arg(cookie);
        }
        cmd.arg("-eval")
            .arg(CHECK_REACHABLE_AND_PRINT_NODE)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl NodeProbe for ErlNodeProbe {
    async fn probe_name(
        &self,
        mode: NameMode,
        hint: Option<&str>,
    ) -> Result<Option<String>, DomainError> {
        if let Some(host) = hint {
            validate_host(host)?;
        }

        let base = self.node_base();
        let node = match hint {
            Some(host) => format!("{}@{}", base, host),
            None => base.clone(),
        };

        debug!(erl = %self.erl.display(), mode = %mode, node = %node, "Starting probe node");

        let child = self.command(mode, &node).spawn().map_err(|e| {
            DomainError::ProbeFailed(format!("cannot start {}: {}", self.erl.display(), e))
        })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| DomainError::ProbeTimeout {
                secs: self.timeout.as_secs(),
            })?
            .map_err(|e| DomainError::IoError(e.to_string()))?;

        if !output.status.success() {
            debug!(
                mode = %mode,
                node = %node,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Probe node could not start distribution"
            );
            return Ok(None);
        }

        Ok(parse_probe_host(
            &String::from_utf8_lossy(&output.stdout),
            &base,
        ))
    }
}

/// Host part of the `<base>@host` line the probe node printed.
pub fn parse_probe_host(output: &str, node_base: &str) -> Option<String> {
    let prefix = format!("{}@", node_base);
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .map(str::trim)
        .filter(|host| !host.is_empty() && *host != NO_HOST)
        .map(str::to_string)
}

fn validate_host(host: &str) -> Result<(), DomainError> {
    let valid = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'));
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidNodeName(host.to_string()))
    }
}

use erlide_application::ports::Notifier;
use erlide_domain::{Notification, Severity};
use tracing::{error, warn};

/// Routes notifications into the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::ModalError => error!(modal = true, "{}", notification.message),
            Severity::Warning => warn!(modal = false, "{}", notification.message),
        }
    }
}

use erlide_application::ports::Notifier;
use erlide_domain::{Notification, Severity};

/// Prints notifications to stderr for terminal users, with links unwrapped.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        let prefix = match notification.severity {
            Severity::ModalError => "error",
            Severity::Warning => "warning",
        };
        eprintln!("{}: {}", prefix, plain_text(&notification.message));
    }
}

/// Rewrites `<a href="URL">text</a>` as `text (URL)`; other text is kept.
pub fn plain_text(message: &str) -> String {
    const OPEN: &str = "<a href=\"";

    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(url_end) = after_open.find("\">") else {
            break;
        };
        let url = &after_open[..url_end];
        let after_tag = &after_open[url_end + 2..];
        let Some(text_end) = after_tag.find("</a>") else {
            break;
        };

        out.push_str(&rest[..start]);
        out.push_str(&after_tag[..text_end]);
        out.push_str(" (");
        out.push_str(url);
        out.push(')');
        rest = &after_tag[text_end + 4..];
    }

    out.push_str(rest);
    out
}

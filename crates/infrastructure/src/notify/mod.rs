mod console;
mod tracing_notifier;

pub use console::{plain_text, ConsoleNotifier};
pub use tracing_notifier::TracingNotifier;

use erlide_application::ports::Notifier;
use erlide_domain::{NameMode, Notification};
use erlide_infrastructure::notify::TracingNotifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts `ERROR` and `WARN` events seen while installed.
#[derive(Clone, Default)]
struct LevelCounter {
    errors: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl LevelCounter {
    fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        match *event.metadata().level() {
            Level::ERROR => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            Level::WARN => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}

#[test]
fn test_modal_error_is_logged_as_error() {
    let counter = LevelCounter::default();
    let _guard = counter.install();

    TracingNotifier::new().notify(&Notification::cannot_connect());

    assert_eq!(counter.errors(), 1);
    assert_eq!(counter.warnings(), 0);
}

#[test]
fn test_degraded_mode_is_logged_as_warning() {
    let counter = LevelCounter::default();
    let _guard = counter.install();
    let notifier = TracingNotifier::new();

    notifier.notify(&Notification::degraded(NameMode::Long));
    notifier.notify(&Notification::degraded(NameMode::Short));

    assert_eq!(counter.errors(), 0);
    assert_eq!(counter.warnings(), 2);
}

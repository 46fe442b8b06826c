use erlide_domain::Notification;

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

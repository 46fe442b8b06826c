mod local_host_resolver;
mod node_probe;
mod notifier;
mod peer_provider;

pub use local_host_resolver::LocalHostResolver;
pub use node_probe::NodeProbe;
pub use notifier::Notifier;
pub use peer_provider::PeerProvider;

pub use erlide_domain::{NameMode, Notification};

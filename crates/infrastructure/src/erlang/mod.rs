pub mod node_probe;
pub mod peer_provider;

pub use node_probe::ErlNodeProbe;
pub use peer_provider::ConfiguredPeerProvider;

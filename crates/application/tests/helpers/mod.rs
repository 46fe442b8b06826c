pub mod mock_ports;
pub mod log_capture;

#[allow(unused_imports)]
pub use log_capture::WarnCounter;
#[allow(unused_imports)]
pub use mock_ports::{MockLocalHostResolver, MockNodeProbe, MockPeerProvider, RecordingNotifier};

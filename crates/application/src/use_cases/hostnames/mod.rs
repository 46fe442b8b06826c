pub mod detect_host_names;
pub mod get_host_names;

pub use detect_host_names::{DetectHostNamesUseCase, NameStrategy, NAME_STRATEGIES};
pub use get_host_names::{GetHostNamesUseCase, HostNameReport};

//! erlide host-name domain layer
pub mod config;
pub mod errors;
pub mod host_names;
pub mod name_mode;
pub mod notification;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use host_names::HostNames;
pub use name_mode::NameMode;
pub use notification::{Notification, Severity, TROUBLESHOOTING_URL};

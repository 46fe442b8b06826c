pub mod host_name_cache;
pub mod local_host_names;

pub use host_name_cache::HostNameCache;
pub use local_host_names::LocalHostNames;

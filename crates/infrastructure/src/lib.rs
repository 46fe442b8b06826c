//! Adapters for the erlide host-name ports
pub mod erlang;
pub mod notify;
pub mod system;

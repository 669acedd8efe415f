//! Configuration data models

pub mod access;
pub mod client;
pub mod logging;

pub use access::*;
pub use client::*;
pub use logging::*;

/// Default request timeout in seconds
pub fn default_timeout_secs() -> u64 {
    30
}

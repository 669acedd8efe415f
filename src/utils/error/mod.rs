//! Error handling for access-rights operations
//!
//! The permission model itself is total; errors only arise at the
//! configuration, transport and backend boundaries.

mod helpers;
mod types;

pub use types::{AccessError, Result};

//! # ProjectHub Access
//!
//! Module-level access rights for ProjectHub roles and users.
//!
//! Every functional area of ProjectHub ("module") is gated by `canView`,
//! `canEdit` and `canDelete` flags held by a role, and optionally
//! overridden per user. View gates the other two.
//!
//! ## Features
//!
//! - **Permission model**: typed toggle map with the view-gating toggle
//!   policy, role/user grant merging and grant-list conversion
//! - **Edit sessions**: seed, toggle and save the rights of one role or user,
//!   honouring view-only modules
//! - **REST client**: read and write access rights with explicit session
//!   credentials
//!
//! ## Quick Start
//!
//! ```rust
//! use projecthub_access::access::{ToggleMap, merge_grants, AccessGrant};
//!
//! let merged = merge_grants(
//!     &[AccessGrant::new("users", true, false, false)],
//!     &[AccessGrant::new("users", true, true, false)],
//! );
//! assert_eq!(merged, vec![AccessGrant::new("users", true, true, false)]);
//!
//! let map = ToggleMap::new()
//!     .toggled("reports_canView")
//!     .toggled("reports_canEdit");
//! assert_eq!(
//!     map.to_grant_list(),
//!     vec![AccessGrant::new("reports", true, true, false)]
//! );
//! ```

#![warn(clippy::all)]

pub mod access;
pub mod client;
pub mod config;
pub mod session;
pub mod utils;

// Re-export main types
pub use access::{AccessGrant, Right, ToggleKey, ToggleMap};
pub use client::{AccessRightsApi, HttpAccessRightsClient, SessionContext};
pub use config::Config;
pub use session::{EditSession, EditTarget};
pub use utils::error::{AccessError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

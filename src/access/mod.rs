//! Module-level access rights
//!
//! Each module carries `canView`, `canEdit` and `canDelete` flags for a
//! role or a user. View gates the other two: Edit and Delete are never
//! held without View in any state reachable through [`ToggleMap::toggle`].
//!
//! Everything here is synchronous and total over its inputs.

mod grants;
mod toggle_map;
mod types;

pub use grants::{initialize_toggle_map, merge_grants};
pub use toggle_map::{ToggleMap, effective_grant, to_grant_list, toggle};
pub use types::{AccessGrant, RoleAccessRights, Right, ToggleKey, UserAccessRights};

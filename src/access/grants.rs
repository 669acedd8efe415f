//! Seeding and merging of grant lists

use tracing::debug;

use super::toggle_map::ToggleMap;
use super::types::AccessGrant;

/// Combine role-level and user-level grants
///
/// Role grants are the base. A user grant replaces the role grant of the
/// same module in place, or is appended when the role has none. Within one
/// input the last grant of a module wins.
pub fn merge_grants(role_grants: &[AccessGrant], user_grants: &[AccessGrant]) -> Vec<AccessGrant> {
    let merged: ToggleMap = role_grants
        .iter()
        .chain(user_grants)
        .cloned()
        .collect();

    debug!(
        "Merged {} role grants with {} user grants into {}",
        role_grants.len(),
        user_grants.len(),
        merged.len()
    );
    merged.into_grant_list()
}

/// Toggle map covering every catalog module and every existing grant
///
/// Catalog modules come first in catalog order, followed by modules that
/// only appear in `existing_grants`. Rights not granted start off.
pub fn initialize_toggle_map<S: AsRef<str>>(
    modules: &[S],
    existing_grants: &[AccessGrant],
) -> ToggleMap {
    let mut map = ToggleMap::new();
    for module in modules {
        map.entry_mut(module.as_ref());
    }
    for grant in existing_grants {
        map.insert_grant(grant.clone());
    }
    map
}

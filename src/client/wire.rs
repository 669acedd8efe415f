//! Response shapes accepted from the backend

use crate::access::{AccessGrant, RoleAccessRights, UserAccessRights};
use serde::Deserialize;

/// Grant read response: a bare list or a persisted access-rights record
///
/// An object without `accessRights` matches no variant, so an unexpected
/// body fails to decode instead of reading as "no grants".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum GrantsResponse {
    List(Vec<AccessGrant>),
    User(UserAccessRights),
    Role(RoleAccessRights),
}

impl GrantsResponse {
    pub(super) fn into_grants(self) -> Vec<AccessGrant> {
        match self {
            GrantsResponse::List(grants) => grants,
            GrantsResponse::User(rights) => rights.access_rights,
            GrantsResponse::Role(rights) => rights.access_rights,
        }
    }
}

/// Catalog entry: a plain name or an object naming the module
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ModuleEntry {
    Name(String),
    Object {
        #[serde(rename = "moduleName")]
        module_name: String,
    },
}

impl ModuleEntry {
    pub(super) fn into_name(self) -> String {
        match self {
            ModuleEntry::Name(name) => name,
            ModuleEntry::Object { module_name } => module_name,
        }
    }
}

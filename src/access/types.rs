//! Access-rights type definitions

use crate::utils::error::AccessError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the module name and the right in a toggle key
const KEY_SEPARATOR: &str = "_can";

/// A single right that can be granted on a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Right {
    View,
    Edit,
    Delete,
}

impl Right {
    /// All rights, in display order
    pub const ALL: [Right; 3] = [Right::View, Right::Edit, Right::Delete];

    /// Key suffix used in the flat toggle representation
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Right::View => "canView",
            Right::Edit => "canEdit",
            Right::Delete => "canDelete",
        }
    }

    /// Whether holding this right requires the View right
    pub fn requires_view(&self) -> bool {
        !matches!(self, Right::View)
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "View" => Some(Right::View),
            "Edit" => Some(Right::Edit),
            "Delete" => Some(Right::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Right::View => "view",
            Right::Edit => "edit",
            Right::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Permission set of one module, for either a role or a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGrant {
    /// Module this grant applies to
    pub module_name: String,
    /// Module is visible
    #[serde(default)]
    pub can_view: bool,
    /// Module records can be modified
    #[serde(default)]
    pub can_edit: bool,
    /// Module records can be removed
    #[serde(default)]
    pub can_delete: bool,
}

impl AccessGrant {
    /// Grant with no rights on `module_name`
    pub fn none(module_name: impl Into<String>) -> Self {
        Self::new(module_name, false, false, false)
    }

    pub fn new(module_name: impl Into<String>, can_view: bool, can_edit: bool, can_delete: bool) -> Self {
        Self {
            module_name: module_name.into(),
            can_view,
            can_edit,
            can_delete,
        }
    }

    /// Value of a single right
    pub fn get(&self, right: Right) -> bool {
        match right {
            Right::View => self.can_view,
            Right::Edit => self.can_edit,
            Right::Delete => self.can_delete,
        }
    }

    pub(crate) fn set(&mut self, right: Right, value: bool) {
        match right {
            Right::View => self.can_view = value,
            Right::Edit => self.can_edit = value,
            Right::Delete => self.can_delete = value,
        }
    }

    /// Whether Edit and Delete are only held together with View
    pub fn is_consistent(&self) -> bool {
        self.can_view || (!self.can_edit && !self.can_delete)
    }

    /// Whether no right is held
    pub fn is_empty(&self) -> bool {
        !self.can_view && !self.can_edit && !self.can_delete
    }

    /// The grant with Edit and Delete revoked when View is not held
    pub fn gated(mut self) -> Self {
        if !self.can_view {
            self.can_edit = false;
            self.can_delete = false;
        }
        self
    }
}

/// Access rights persisted for a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAccessRights {
    #[serde(deserialize_with = "deserialize_id")]
    pub role_id: String,
    #[serde(default)]
    pub role_name: String,
    pub access_rights: Vec<AccessGrant>,
}

/// Access rights persisted for a user within one of their roles
///
/// Grants here take priority over the role's grant for the same module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccessRights {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub role_id: String,
    pub access_rights: Vec<AccessGrant>,
}

/// Backend ids arrive either as JSON strings or as numbers
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}

/// Parsed `"<module>_can<Right>"` key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleKey {
    pub module: String,
    pub right: Right,
}

impl ToggleKey {
    pub fn new(module: impl Into<String>, right: Right) -> Self {
        Self {
            module: module.into(),
            right,
        }
    }

    /// Parse a flat key, returning `None` for malformed input
    ///
    /// Splits at the last `_can` so module names may contain underscores.
    pub fn parse(key: &str) -> Option<Self> {
        let (module, right) = key.rsplit_once(KEY_SEPARATOR)?;
        if module.is_empty() {
            return None;
        }
        Right::from_name(right).map(|right| Self::new(module, right))
    }
}

impl fmt::Display for ToggleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.module, self.right.key_suffix())
    }
}

impl FromStr for ToggleKey {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AccessError::validation(format!(
                "'{}' is not a <module>_canView|canEdit|canDelete key",
                s
            ))
        })
    }
}

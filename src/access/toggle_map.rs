//! Editable per-module toggle state

use std::collections::HashMap;
use tracing::debug;

use super::types::{AccessGrant, Right, ToggleKey};

/// In-memory editing state of an access-rights form
///
/// Holds one [`AccessGrant`] per module in first-seen order. A right that
/// was never set reads as `false`; a module present with every right off
/// is still a distinct entry from a module that is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleMap {
    entries: Vec<AccessGrant>,
    index: HashMap<String, usize>,
}

impl ToggleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the flat `"<module>_can<Right>" -> bool` form
    ///
    /// Malformed keys are ignored. Later keys overwrite earlier ones.
    pub fn from_flat<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            match ToggleKey::parse(key.as_ref()) {
                Some(parsed) => map.entry_mut(&parsed.module).set(parsed.right, value),
                None => debug!("Ignoring malformed toggle key: {}", key.as_ref()),
            }
        }
        map
    }

    /// Flat form with all three keys for every module
    pub fn to_flat(&self) -> Vec<(String, bool)> {
        self.entries
            .iter()
            .flat_map(|grant| {
                Right::ALL.into_iter().map(move |right| {
                    (
                        ToggleKey::new(grant.module_name.clone(), right).to_string(),
                        grant.get(right),
                    )
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_module(&self, module: &str) -> bool {
        self.index.contains_key(module)
    }

    /// Module names in first-seen order
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|grant| grant.module_name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccessGrant> {
        self.entries.iter()
    }

    /// Value of a single right; absent modules and rights read `false`
    pub fn get(&self, module: &str, right: Right) -> bool {
        self.grant(module).is_some_and(|grant| grant.get(right))
    }

    /// Stored grant of a module, if the module has an entry
    pub fn grant(&self, module: &str) -> Option<&AccessGrant> {
        self.index.get(module).map(|&i| &self.entries[i])
    }

    /// Grant of a module with absent rights read as `false`
    pub fn effective_grant(&self, module: &str) -> AccessGrant {
        self.grant(module)
            .cloned()
            .unwrap_or_else(|| AccessGrant::none(module))
    }

    /// Insert a grant, replacing any existing entry for the same module
    /// in place
    pub fn insert_grant(&mut self, grant: AccessGrant) {
        match self.index.get(&grant.module_name) {
            Some(&i) => self.entries[i] = grant,
            None => {
                self.index
                    .insert(grant.module_name.clone(), self.entries.len());
                self.entries.push(grant);
            }
        }
    }

    /// Entry of a module, created with every right off if absent
    pub(crate) fn entry_mut(&mut self, module: &str) -> &mut AccessGrant {
        let i = match self.index.get(module) {
            Some(&i) => i,
            None => {
                self.index.insert(module.to_string(), self.entries.len());
                self.entries.push(AccessGrant::none(module));
                self.entries.len() - 1
            }
        };
        &mut self.entries[i]
    }

    /// Flip one right, returning whether the map changed
    ///
    /// Edit and Delete cannot be flipped while View is off. Turning View
    /// off also turns Edit and Delete off.
    pub fn toggle(&mut self, key: &ToggleKey) -> bool {
        if key.right.requires_view() && !self.get(&key.module, Right::View) {
            debug!("Ignoring toggle of {}: view is not granted", key);
            return false;
        }

        let grant = self.entry_mut(&key.module);
        let value = !grant.get(key.right);
        grant.set(key.right, value);

        if key.right == Right::View && !value {
            grant.can_edit = false;
            grant.can_delete = false;
        }

        debug!("Toggled {} to {}", key, value);
        true
    }

    /// Flip one right given as a flat key; malformed keys change nothing
    pub fn toggle_key(&mut self, key: &str) -> bool {
        match ToggleKey::parse(key) {
            Some(parsed) => self.toggle(&parsed),
            None => {
                debug!("Ignoring malformed toggle key: {}", key);
                false
            }
        }
    }

    /// By-value form of [`ToggleMap::toggle_key`]
    pub fn toggled(mut self, key: &str) -> Self {
        self.toggle_key(key);
        self
    }

    /// One grant per module, in first-seen order
    pub fn to_grant_list(&self) -> Vec<AccessGrant> {
        self.entries.clone()
    }

    pub fn into_grant_list(self) -> Vec<AccessGrant> {
        self.entries
    }
}

impl FromIterator<AccessGrant> for ToggleMap {
    fn from_iter<T: IntoIterator<Item = AccessGrant>>(iter: T) -> Self {
        let mut map = Self::new();
        for grant in iter {
            map.insert_grant(grant);
        }
        map
    }
}

/// Pure toggle: `map` with the right named by `key` flipped
pub fn toggle(map: &ToggleMap, key: &str) -> ToggleMap {
    map.clone().toggled(key)
}

/// Grant list of a toggle map
pub fn to_grant_list(map: &ToggleMap) -> Vec<AccessGrant> {
    map.to_grant_list()
}

/// Grant of `module_name` in `map`, absent rights read `false`
pub fn effective_grant(module_name: &str, map: &ToggleMap) -> AccessGrant {
    map.effective_grant(module_name)
}

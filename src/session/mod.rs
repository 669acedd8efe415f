//! Access-rights edit sessions
//!
//! An [`EditSession`] owns the toggle map of one role or one user while an
//! administrator adjusts it, and hands a view-gated grant list to the
//! backend on save.


use crate::access::{
    AccessGrant, Right, ToggleKey, ToggleMap, initialize_toggle_map, merge_grants,
};
use crate::client::{AccessRightsApi, SessionContext};
use crate::utils::error::Result;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Rights offered for editing on a view-only module
const VIEW_ONLY_RIGHTS: &[Right] = &[Right::View];

/// Whose access rights are being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Role { role_id: String },
    User { user_id: String, role_id: String },
}

impl EditTarget {
    pub fn role(role_id: impl Into<String>) -> Self {
        EditTarget::Role {
            role_id: role_id.into(),
        }
    }

    pub fn user(user_id: impl Into<String>, role_id: impl Into<String>) -> Self {
        EditTarget::User {
            user_id: user_id.into(),
            role_id: role_id.into(),
        }
    }

    pub fn role_id(&self) -> &str {
        match self {
            EditTarget::Role { role_id } | EditTarget::User { role_id, .. } => role_id,
        }
    }
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTarget::Role { role_id } => write!(f, "role {}", role_id),
            EditTarget::User { user_id, role_id } => {
                write!(f, "user {} in role {}", user_id, role_id)
            }
        }
    }
}

/// Editing state for one role or user
#[derive(Debug, Clone)]
pub struct EditSession {
    target: EditTarget,
    toggles: ToggleMap,
    saved: ToggleMap,
    view_only: HashSet<String>,
}

impl EditSession {
    /// Seed a session from the catalog and the already merged grants
    pub fn new<S: AsRef<str>>(
        target: EditTarget,
        modules: &[S],
        existing_grants: &[AccessGrant],
        view_only: HashSet<String>,
    ) -> Self {
        let toggles = initialize_toggle_map(modules, existing_grants);
        Self {
            target,
            saved: toggles.clone(),
            toggles,
            view_only,
        }
    }

    /// Load catalog and grants from the backend and seed a session
    ///
    /// For a user target the role grants are merged with the user's own
    /// grants, user grants winning.
    pub async fn open<A>(
        api: &A,
        ctx: &SessionContext,
        target: EditTarget,
        view_only: HashSet<String>,
    ) -> Result<Self>
    where
        A: AccessRightsApi + ?Sized,
    {
        info!("Opening access rights session for {}", target);

        let (modules, grants) = match &target {
            EditTarget::Role { role_id } => {
                tokio::try_join!(api.list_modules(ctx), api.role_access_rights(ctx, role_id))?
            }
            EditTarget::User { user_id, role_id } => {
                let (modules, role_grants, user_grants) = tokio::try_join!(
                    api.list_modules(ctx),
                    api.role_access_rights(ctx, role_id),
                    api.user_access_rights(ctx, user_id, role_id),
                )?;
                (modules, merge_grants(&role_grants, &user_grants))
            }
        };

        debug!(
            "Seeding session with {} modules and {} grants",
            modules.len(),
            grants.len()
        );
        Ok(Self::new(target, &modules, &grants, view_only))
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn toggle_map(&self) -> &ToggleMap {
        &self.toggles
    }

    pub fn is_view_only(&self, module: &str) -> bool {
        self.view_only.contains(module)
    }

    /// Rights the editor offers as toggles for a module
    pub fn editable_rights(&self, module: &str) -> &'static [Right] {
        if self.is_view_only(module) {
            VIEW_ONLY_RIGHTS
        } else {
            &Right::ALL
        }
    }

    /// Apply one toggle, returning whether the map changed
    ///
    /// Edit and Delete on view-only modules are refused.
    pub fn toggle(&mut self, key: &ToggleKey) -> bool {
        if !self.editable_rights(&key.module).contains(&key.right) {
            warn!("Refusing toggle of {}: module is view-only", key);
            return false;
        }
        self.toggles.toggle(key)
    }

    /// Apply one toggle given as a flat key; malformed keys change nothing
    pub fn toggle_key(&mut self, key: &str) -> bool {
        match ToggleKey::parse(key) {
            Some(parsed) => self.toggle(&parsed),
            None => {
                debug!("Ignoring malformed toggle key: {}", key);
                false
            }
        }
    }

    pub fn effective_grant(&self, module: &str) -> AccessGrant {
        self.toggles.effective_grant(module)
    }

    /// Whether the toggles differ from the last seeded or saved state
    pub fn is_dirty(&self) -> bool {
        self.toggles != self.saved
    }

    /// Grant list a save would submit, with Edit and Delete gated on View
    pub fn pending_grants(&self) -> Vec<AccessGrant> {
        self.toggles
            .iter()
            .cloned()
            .map(AccessGrant::gated)
            .collect()
    }

    /// Submit the grant list
    ///
    /// On success the submitted list is returned and becomes the saved
    /// state. On failure the toggles are left as they were so the save
    /// can be retried.
    pub async fn save<A>(&mut self, api: &A, ctx: &SessionContext) -> Result<Vec<AccessGrant>>
    where
        A: AccessRightsApi + ?Sized,
    {
        let grants = self.pending_grants();

        let result = match &self.target {
            EditTarget::Role { role_id } => {
                api.save_role_access_rights(ctx, role_id, &grants).await
            }
            EditTarget::User { user_id, role_id } => {
                api.save_user_access_rights(ctx, user_id, role_id, &grants)
                    .await
            }
        };

        match result {
            Ok(()) => {
                info!("Saved {} grants for {}", grants.len(), self.target);
                self.toggles = grants.iter().cloned().collect();
                self.saved = self.toggles.clone();
                Ok(grants)
            }
            Err(e) => {
                warn!("Failed to save access rights for {}: {}", self.target, e);
                Err(e)
            }
        }
    }

    /// Discard the session without saving
    pub fn cancel(self) {
        debug!("Discarding access rights session for {}", self.target);
    }
}

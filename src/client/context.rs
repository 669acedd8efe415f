//! Per-caller session credentials

use std::fmt;

/// Header carrying the tenant identifier
pub const TENANT_HEADER: &str = "X-Tenant-Id";

/// Credentials of the signed-in administrator
///
/// Passed to every backend call instead of being read from ambient state.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    tenant_id: Option<String>,
}

impl SessionContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tenant_id: None,
        }
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"***")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

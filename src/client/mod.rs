//! Access-rights backend client
//!
//! [`AccessRightsApi`] is the seam between edit sessions and the REST
//! backend. [`HttpAccessRightsClient`] implements it over reqwest.

mod context;
mod http;
mod wire;

pub use context::{SessionContext, TENANT_HEADER};
pub use http::HttpAccessRightsClient;

use crate::access::AccessGrant;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read and write access to module catalog and persisted grants
#[async_trait]
pub trait AccessRightsApi: Send + Sync {
    /// Names of every module the editor must show
    async fn list_modules(&self, ctx: &SessionContext) -> Result<Vec<String>>;

    /// Grants persisted for a role
    async fn role_access_rights(&self, ctx: &SessionContext, role_id: &str)
    -> Result<Vec<AccessGrant>>;

    /// User-specific grants within one of the user's roles
    async fn user_access_rights(
        &self,
        ctx: &SessionContext,
        user_id: &str,
        role_id: &str,
    ) -> Result<Vec<AccessGrant>>;

    /// Replace the grants of a role
    async fn save_role_access_rights(
        &self,
        ctx: &SessionContext,
        role_id: &str,
        grants: &[AccessGrant],
    ) -> Result<()>;

    /// Replace the user-specific grants of a user within a role
    async fn save_user_access_rights(
        &self,
        ctx: &SessionContext,
        user_id: &str,
        role_id: &str,
        grants: &[AccessGrant],
    ) -> Result<()>;
}

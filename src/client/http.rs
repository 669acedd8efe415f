//! REST implementation of the access-rights API

use super::context::{SessionContext, TENANT_HEADER};
use super::wire::{GrantsResponse, ModuleEntry};
use super::AccessRightsApi;
use crate::access::AccessGrant;
use crate::config::ClientConfig;
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

/// Access-rights client over HTTP
///
/// Routes, relative to the configured base URL:
/// - `GET modules`
/// - `GET|PUT roles/{roleId}/access-rights`
/// - `GET|PUT users/{userId}/roles/{roleId}/access-rights`
#[derive(Debug, Clone)]
pub struct HttpAccessRightsClient {
    client: Client,
    base_url: Url,
}

impl HttpAccessRightsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AccessError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;

        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AccessError::Config(format!(
                    "API base URL cannot be used as a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, ctx: &SessionContext) -> RequestBuilder {
        let builder = self.client.request(method, url).bearer_auth(ctx.token());
        match ctx.tenant_id() {
            Some(tenant) => builder.header(TENANT_HEADER, tenant),
            None => builder,
        }
    }

    async fn fetch_grants(&self, ctx: &SessionContext, url: Url) -> Result<Vec<AccessGrant>> {
        debug!("Fetching access rights from {}", url);

        let response = self.request(Method::GET, url, ctx).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No access rights stored yet");
            return Ok(Vec::new());
        }

        let response = check_status(response).await?;
        let grants = response.json::<GrantsResponse>().await?.into_grants();

        debug!("Fetched {} grants", grants.len());
        Ok(grants)
    }

    async fn put_grants(&self, ctx: &SessionContext, url: Url, grants: &[AccessGrant]) -> Result<()> {
        debug!("Saving {} grants to {}", grants.len(), url);

        let response = self.request(Method::PUT, url, ctx).json(grants).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-success response into an [`AccessError::Api`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body
    };

    warn!("Access rights API returned {}: {}", status, message);
    Err(AccessError::api(status.as_u16(), message))
}

#[async_trait]
impl AccessRightsApi for HttpAccessRightsClient {
    async fn list_modules(&self, ctx: &SessionContext) -> Result<Vec<String>> {
        let url = self.endpoint(&["modules"])?;
        debug!("Fetching module catalog from {}", url);

        let response = self.request(Method::GET, url, ctx).send().await?;
        let response = check_status(response).await?;
        let entries = response.json::<Vec<ModuleEntry>>().await?;

        Ok(entries.into_iter().map(ModuleEntry::into_name).collect())
    }

    async fn role_access_rights(
        &self,
        ctx: &SessionContext,
        role_id: &str,
    ) -> Result<Vec<AccessGrant>> {
        let url = self.endpoint(&["roles", role_id, "access-rights"])?;
        self.fetch_grants(ctx, url).await
    }

    async fn user_access_rights(
        &self,
        ctx: &SessionContext,
        user_id: &str,
        role_id: &str,
    ) -> Result<Vec<AccessGrant>> {
        let url = self.endpoint(&["users", user_id, "roles", role_id, "access-rights"])?;
        self.fetch_grants(ctx, url).await
    }

    async fn save_role_access_rights(
        &self,
        ctx: &SessionContext,
        role_id: &str,
        grants: &[AccessGrant],
    ) -> Result<()> {
        let url = self.endpoint(&["roles", role_id, "access-rights"])?;
        self.put_grants(ctx, url, grants).await
    }

    async fn save_user_access_rights(
        &self,
        ctx: &SessionContext,
        user_id: &str,
        role_id: &str,
        grants: &[AccessGrant],
    ) -> Result<()> {
        let url = self.endpoint(&["users", user_id, "roles", role_id, "access-rights"])?;
        self.put_grants(ctx, url, grants).await
    }
}

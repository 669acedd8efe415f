//! HTTP client integration tests

#[cfg(test)]
mod tests {
    use crate::common::backend::{TENANT, TOKEN};
    use crate::common::{GrantFactory, MockBackend};
    use crate::{assert_err, assert_ok};
    use projecthub_access::{AccessError, AccessGrant, AccessRightsApi, SessionContext};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_list_modules_sends_credentials() {
        let backend = MockBackend::start().await;
        backend.serve_modules(&["users", "projects"]).await;

        let modules = assert_ok!(
            backend
                .client()
                .list_modules(&MockBackend::context())
                .await
        );

        assert_eq!(modules, vec!["users", "projects"]);
    }

    #[tokio::test]
    async fn test_list_modules_accepts_plain_names() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/modules"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["users", "reports"])))
            .mount(&backend.server)
            .await;

        let modules = assert_ok!(
            backend
                .client()
                .list_modules(&MockBackend::context())
                .await
        );
        assert_eq!(modules, vec!["users", "reports"]);
    }

    #[tokio::test]
    async fn test_missing_credentials_do_not_match() {
        let backend = MockBackend::start().await;
        backend.serve_modules(&["users"]).await;

        // No tenant header: the mock does not match and wiremock answers 404
        let ctx = SessionContext::new(TOKEN);
        let err = assert_err!(backend.client().list_modules(&ctx).await);
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_role_grants_from_envelope() {
        let backend = MockBackend::start().await;
        let grants = vec![GrantFactory::full("users"), GrantFactory::read_only("projects")];
        backend.serve_role_grants("7", &grants).await;

        let fetched = assert_ok!(
            backend
                .client()
                .role_access_rights(&MockBackend::context(), "7")
                .await
        );
        assert_eq!(fetched, grants);
    }

    #[tokio::test]
    async fn test_user_grants_from_bare_list() {
        let backend = MockBackend::start().await;
        let grants = vec![GrantFactory::read_only("solutions")];
        backend.serve_user_grants("42", "7", &grants).await;

        let fetched = assert_ok!(
            backend
                .client()
                .user_access_rights(&MockBackend::context(), "42", "7")
                .await
        );
        assert_eq!(fetched, grants);
    }

    #[tokio::test]
    async fn test_read_not_found_is_empty() {
        let backend = MockBackend::start().await;

        let fetched = assert_ok!(
            backend
                .client()
                .user_access_rights(&MockBackend::context(), "42", "7")
                .await
        );
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_read_server_error_is_api_error() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/roles/7/access-rights"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&backend.server)
            .await;

        let err = assert_err!(
            backend
                .client()
                .role_access_rights(&MockBackend::context(), "7")
                .await
        );
        assert!(matches!(&err, AccessError::Api { status: 500, message } if message == "boom"));
    }

    #[tokio::test]
    async fn test_unrecognised_grant_body_is_an_error() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/roles/7/access-rights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "moduleName": "users", "canView": true }],
                "status": "ok",
            })))
            .mount(&backend.server)
            .await;

        let err = assert_err!(
            backend
                .client()
                .role_access_rights(&MockBackend::context(), "7")
                .await
        );
        assert!(matches!(err, AccessError::HttpClient(_)));
    }

    #[tokio::test]
    async fn test_role_grants_with_numeric_id() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/roles/7/access-rights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "roleId": 7,
                "roleName": "Manager",
                "accessRights": [{ "moduleName": "projects", "canView": true }],
            })))
            .mount(&backend.server)
            .await;

        let fetched = assert_ok!(
            backend
                .client()
                .role_access_rights(&MockBackend::context(), "7")
                .await
        );
        assert_eq!(fetched, vec![AccessGrant::new("projects", true, false, false)]);
    }

    #[tokio::test]
    async fn test_save_role_puts_grant_list() {
        let backend = MockBackend::start().await;
        let grants = vec![
            AccessGrant::new("users", true, true, false),
            GrantFactory::none("projects"),
        ];
        Mock::given(method("PUT"))
            .and(path("/api/roles/7/access-rights"))
            .and(header("x-tenant-id", TENANT))
            .and(body_json(json!([
                {"moduleName": "users", "canView": true, "canEdit": true, "canDelete": false},
                {"moduleName": "projects", "canView": false, "canEdit": false, "canDelete": false}
            ])))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&backend.server)
            .await;

        assert_ok!(
            backend
                .client()
                .save_role_access_rights(&MockBackend::context(), "7", &grants)
                .await
        );
    }

    #[tokio::test]
    async fn test_save_rejected_is_save_failure() {
        let backend = MockBackend::start().await;
        backend
            .accept_put("/api/users/42/roles/7/access-rights", 422)
            .await;

        let err = assert_err!(
            backend
                .client()
                .save_user_access_rights(
                    &MockBackend::context(),
                    "42",
                    "7",
                    &[GrantFactory::read_only("users")]
                )
                .await
        );
        assert!(err.is_save_failure());
        assert_eq!(err.status_code(), Some(422));
    }
}

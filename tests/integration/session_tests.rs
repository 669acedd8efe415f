//! Edit session integration tests over HTTP

#[cfg(test)]
mod tests {
    use crate::common::{GrantFactory, MockBackend};
    use crate::{assert_err, assert_ok};
    use projecthub_access::config::AccessConfig;
    use projecthub_access::{AccessGrant, EditSession, EditTarget, Right};

    const ROLE_ROUTE: &str = "/api/roles/7/access-rights";
    const USER_ROUTE: &str = "/api/users/42/roles/7/access-rights";

    #[tokio::test]
    async fn test_role_edit_round_trip() {
        let backend = MockBackend::start().await;
        backend.serve_modules(&GrantFactory::catalog()).await;
        backend
            .serve_role_grants("7", &[GrantFactory::read_only("projects")])
            .await;
        backend.accept_put(ROLE_ROUTE, 200).await;

        let client = backend.client();
        let ctx = MockBackend::context();
        let mut session = assert_ok!(
            EditSession::open(
                &client,
                &ctx,
                EditTarget::role("7"),
                AccessConfig::default().view_only_set()
            )
            .await
        );

        assert!(session.toggle_key("projects_canEdit"));
        assert!(session.toggle_key("users_canView"));
        assert!(!session.toggle_key("roles_canDelete"));
        assert!(!session.toggle_key("generate_invoice_canEdit"));

        let saved = assert_ok!(session.save(&client, &ctx).await);
        let sent = backend.put_body(ROLE_ROUTE).await;

        assert_eq!(sent, saved);
        assert_eq!(
            sent,
            vec![
                GrantFactory::read_only("users"),
                GrantFactory::none("roles"),
                AccessGrant::new("projects", true, true, false),
                GrantFactory::none("solutions"),
                GrantFactory::none("generate_invoice"),
            ]
        );
    }

    #[tokio::test]
    async fn test_user_edit_starts_from_merged_grants() {
        let backend = MockBackend::start().await;
        backend.serve_modules(&["users", "projects"]).await;
        backend
            .serve_role_grants(
                "7",
                &[GrantFactory::full("users"), GrantFactory::read_only("projects")],
            )
            .await;
        backend
            .serve_user_grants("42", "7", &[GrantFactory::none("users")])
            .await;
        backend.accept_put(USER_ROUTE, 204).await;

        let client = backend.client();
        let ctx = MockBackend::context();
        let mut session = assert_ok!(
            EditSession::open(
                &client,
                &ctx,
                EditTarget::user("42", "7"),
                Default::default()
            )
            .await
        );

        assert_eq!(session.effective_grant("users"), GrantFactory::none("users"));
        assert!(session.toggle_map().get("projects", Right::View));

        session.toggle_key("projects_canDelete");
        assert_ok!(session.save(&client, &ctx).await);

        let sent = backend.put_body(USER_ROUTE).await;
        assert_eq!(
            sent,
            vec![
                GrantFactory::none("users"),
                AccessGrant::new("projects", true, false, true),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_save_allows_retry() {
        let backend = MockBackend::start().await;
        backend.serve_modules(&["users"]).await;
        backend.accept_put(ROLE_ROUTE, 503).await;

        let client = backend.client();
        let ctx = MockBackend::context();
        let mut session = assert_ok!(
            EditSession::open(&client, &ctx, EditTarget::role("7"), Default::default()).await
        );
        session.toggle_key("users_canView");

        let err = assert_err!(session.save(&client, &ctx).await);
        assert!(err.is_save_failure());
        assert!(session.is_dirty());
        assert_eq!(
            session.pending_grants(),
            vec![GrantFactory::read_only("users")]
        );
    }

    #[tokio::test]
    async fn test_open_fails_when_catalog_unavailable() {
        let backend = MockBackend::start().await;

        let result = EditSession::open(
            &backend.client(),
            &MockBackend::context(),
            EditTarget::role("7"),
            Default::default(),
        )
        .await;

        let err = assert_err!(result);
        assert_eq!(err.status_code(), Some(404));
    }
}

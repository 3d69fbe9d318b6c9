#[cfg(test)]
mod tests {
    use axum::http::Method;
    use axum::http::StatusCode;
    use cloud_sdk::ids::InviteId;
    use cloud_sdk::ids::OrganizationId;
    use cloud_sdk::ids::UserId;
    use cloud_sdk::organizations::types::OrganizationCreateParameters;
    use cloud_sdk::organizations::types::OrganizationInviteCreateParameters;
    use cloud_sdk::organizations::types::OrganizationPermissionGroup;
    use cloud_sdk::SdkError;
    use serde_json::json;

    use crate::assert_request;
    use crate::tests::echo;
    use crate::tests::reply;
    use crate::tests::run_stub_server;

    #[tokio::test]
    async fn test_create_echo() -> anyhow::Result<()> {
        let srv = run_stub_server(echo()).await?;

        let org = srv
            .provider()
            .organizations
            .create(&OrganizationCreateParameters {
                name: "acme".to_string(),
                display_name: "Acme Inc".to_string(),
            })
            .await?;
        assert_eq!(org.name, "acme");
        assert_eq!(org.display_name, "Acme Inc");

        let recorded = srv.recorded();
        assert_request!(recorded[0], Method::POST, "/api/v1/organizations");
        assert_eq!(
            recorded[0].body,
            Some(json!({"name": "acme", "displayName": "Acme Inc"}))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_members() -> anyhow::Result<()> {
        let srv = run_stub_server(reply(
            StatusCode::OK,
            json!([{
                "permission": "owner",
                "user": {"id": 3, "name": "Jane", "email": "jane@acme.io", "username": "jane"}
            }]),
        ))
        .await?;

        let members = srv
            .provider()
            .organizations
            .list_members(OrganizationId(1))
            .await?;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].permission, OrganizationPermissionGroup::Owner);
        assert_eq!(members[0].user.id, UserId(3));

        assert_request!(
            srv.recorded()[0],
            Method::GET,
            "/api/v1/organizations/1/members"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_invites() -> anyhow::Result<()> {
        let srv = run_stub_server(reply(StatusCode::OK, json!({}))).await?;
        let orgs = srv.provider().organizations;

        orgs.create_invite(OrganizationId(1), &OrganizationInviteCreateParameters {
            email: "bob@acme.io".to_string(),
            permission: OrganizationPermissionGroup::Member,
        })
        .await?;
        orgs.delete_invite(OrganizationId(1), InviteId(9)).await?;

        let recorded = srv.recorded();
        assert_eq!(recorded.len(), 2);
        assert_request!(recorded[0], Method::POST, "/api/v1/organizations/1/invites");
        assert_eq!(
            recorded[0].body,
            Some(json!({"email": "bob@acme.io", "organizationPermission": "member"}))
        );
        assert_request!(
            recorded[1],
            Method::DELETE,
            "/api/v1/organizations/1/invites/9"
        );
        assert_eq!(recorded[1].body, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_member_not_found() -> anyhow::Result<()> {
        let srv = run_stub_server(reply(
            StatusCode::NOT_FOUND,
            json!({"title": "Not Found", "detail": "no such member"}),
        ))
        .await?;

        let err = srv
            .provider()
            .organizations
            .remove_member(OrganizationId(1), UserId(42))
            .await
            .unwrap_err();
        match err {
            SdkError::Api(err) => {
                assert_eq!(err.status, StatusCode::NOT_FOUND);
                assert_eq!(err.title.as_deref(), Some("Not Found"));
                assert_eq!(err.detail.as_deref(), Some("no such member"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let recorded = srv.recorded();
        assert_eq!(recorded.len(), 1);
        assert_request!(
            recorded[0],
            Method::DELETE,
            "/api/v1/organizations/1/members/42"
        );

        Ok(())
    }
}

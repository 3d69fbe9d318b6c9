#[cfg(test)]
mod tests {
    use axum::http::Method;
    use axum::http::StatusCode;
    use cloud_sdk::ids::OrganizationId;
    use cloud_sdk::ids::RobotId;
    use cloud_sdk::ids::TeamId;
    use cloud_sdk::robots::types::RobotCreateParameters;
    use cloud_sdk::robots::types::RobotTeamMembershipResourceIdentifier;
    use cloud_sdk::SdkError;
    use serde_json::json;

    use crate::assert_request;
    use crate::tests::reply;
    use crate::tests::run_stub_server;

    #[tokio::test]
    async fn test_create() -> anyhow::Result<()> {
        let id = RobotId::new_v4();
        let srv = run_stub_server(reply(
            StatusCode::CREATED,
            json!({
                "data": {
                    "id": id,
                    "type": "robots",
                    "attributes": {
                        "name": "ci",
                        "description": "builds",
                        "createdAt": "2023-01-02T03:04:05Z"
                    }
                }
            }),
        ))
        .await?;

        let params = RobotCreateParameters::new("ci", "builds", OrganizationId(7));
        let resp = srv.provider().robots.create(&params).await?;
        assert_eq!(resp.data.id, id);
        assert_eq!(resp.data.attributes.name, "ci");
        assert!(resp.data.attributes.created_at.is_some());

        let recorded = srv.recorded();
        assert_eq!(recorded.len(), 1);
        assert_request!(recorded[0], Method::POST, "/api/v2/robots");
        assert_eq!(recorded[0].header("content-type"), Some("application/json"));
        assert_eq!(
            recorded[0].body,
            Some(json!({
                "data": {
                    "type": "robots",
                    "attributes": {"name": "ci", "description": "builds"},
                    "relationships": {
                        "owner": {"data": {"type": "organization", "id": "7"}}
                    }
                }
            }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_tokens_empty() -> anyhow::Result<()> {
        let srv = run_stub_server(reply(StatusCode::OK, json!({"tokens": []}))).await?;
        let id = RobotId::new_v4();

        let resp = srv.provider().robots.list_tokens(id).await?;
        assert!(resp.data.is_empty());

        let recorded = srv.recorded();
        assert_request!(
            recorded[0],
            Method::GET,
            format!("/api/v2/robots/{}/tokens", id)
        );
        assert_eq!(recorded[0].body, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_team_membership() -> anyhow::Result<()> {
        let srv = run_stub_server(reply(StatusCode::OK, json!(null))).await?;
        let robots = srv.provider().robots;
        let id = RobotId::new_v4();
        let team = RobotTeamMembershipResourceIdentifier::team(TeamId::new_v4());

        robots.create_team_membership(id, &team).await?;
        robots.delete_team_membership(id, &team).await?;

        let recorded = srv.recorded();
        assert_eq!(recorded.len(), 2);
        let path = format!("/api/v2/robots/{}/relationships/teams", id);
        assert_request!(recorded[0], Method::POST, path);
        assert_request!(recorded[1], Method::DELETE, path);

        let body = json!({"data": [{"type": "team", "id": team.id}]});
        assert_eq!(recorded[0].body, Some(body.clone()));
        assert_eq!(recorded[1].body, Some(body));

        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() -> anyhow::Result<()> {
        let srv = run_stub_server(reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"title": "Internal Server Error", "detail": "boom"}),
        ))
        .await?;
        let id = RobotId::new_v4();

        let err = srv.provider().robots.delete(id).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        match err {
            SdkError::Api(err) => assert_eq!(err.detail.as_deref(), Some("boom")),
            other => panic!("unexpected error: {other:?}"),
        }

        let recorded = srv.recorded();
        assert_eq!(recorded.len(), 1);
        assert_request!(recorded[0], Method::DELETE, format!("/api/v2/robots/{}", id));

        Ok(())
    }
}

// Read paths swallow failures, write paths surface the response body.

#[cfg(test)]
mod test {
    use httpmock::Method::{GET, PATCH, POST, PUT};
    use httpmock::MockServer;
    use serde_json::json;
    use serial_test::serial;

    use crate::error::ApiError;
    use crate::models::{LinkedAccount, SearchResult, UserProfile, UserProfilePatch};
    use crate::services::ReportType;
    use crate::tests::common::*;

    #[tokio::test]
    #[serial]
    async fn read_operation_returns_none_on_error_status() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let history = server
            .mock_async(|when, then| {
                when.method(GET).path("/player/p1");
                then.status(500).body("boom");
            })
            .await;
        let client = server
            .mock_async(|when, then| {
                when.method(GET).path("/client/p1");
                then.status(404).body("not found");
            })
            .await;

        let api = test_api(&server);
        assert_eq!(api.player_cache().fetch_player_history("p1").await, None);
        assert_eq!(api.client().fetch_client("p1").await, None);
        history.assert_hits_async(1).await;
        client.assert_hits_async(1).await;
    }

    #[tokio::test]
    #[serial]
    async fn read_operation_returns_none_on_unexpected_body() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let _cosmetics = server
            .mock_async(|when, then| {
                when.method(GET).path("/cosmetics/p1");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let api = test_api(&server);
        assert_eq!(api.client().fetch_client_cosmetics("p1").await, None);
    }

    #[tokio::test]
    #[serial]
    async fn history_by_timestamp_posts_player_and_timestamp() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let history = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/player")
                    .header("authorization", "Bearer abc")
                    .json_body(json!({ "timestamp": "2024-05-01T00:00:00Z", "player_uuid": "p1" }));
                then.status(200).json_body(json!({
                    "history": [{
                        "data": { "displayname": "Steve" },
                        "last_fetched_at": "2024-05-01T00:00:00Z",
                        "cached_at": "2024-04-30T23:00:00Z",
                        "uuid": "p1"
                    }]
                }));
            })
            .await;

        let api = test_api(&server);
        let entries = api
            .player_cache()
            .fetch_player_history_by_timestamp("p1", "2024-05-01T00:00:00Z")
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].data["displayname"], "Steve");
        history.assert_hits_async(1).await;
    }

    #[tokio::test]
    #[serial]
    async fn search_listing_is_empty_on_failure_or_null() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let _ok = server
            .mock_async(|when, then| {
                when.method(POST).path("/search").json_body(json!({ "query": "steve" }));
                then.status(200).json_body(json!([{ "name": "Steve", "value": "p1" }]));
            })
            .await;
        let _null = server
            .mock_async(|when, then| {
                when.method(POST).path("/search").json_body(json!({ "query": "nobody" }));
                then.status(200).body("null");
            })
            .await;
        let _failing = server
            .mock_async(|when, then| {
                when.method(POST).path("/search").json_body(json!({ "query": "boom" }));
                then.status(502);
            })
            .await;

        let api = test_api(&server);
        assert_eq!(
            api.stash().fetch_search("steve").await,
            vec![SearchResult { name: "Steve".into(), value: "p1".into() }]
        );
        assert!(api.stash().fetch_search("nobody").await.is_empty());
        assert!(api.stash().fetch_search("boom").await.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn mojang_lookup_needs_no_credential() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let _mojang = server
            .mock_async(|when, then| {
                when.method(GET).path("/mojang/Steve");
                then.status(200).json_body(json!({ "id": "p1", "name": "Steve", "extra": true }));
            })
            .await;

        let api = test_api(&server);
        let player = api.mojang().fetch_mojang("Steve").await.unwrap();
        assert_eq!(player.id, "p1");
        assert_eq!(api.mojang().fetch_mojang("Nobody").await, None);
        refresh.assert_hits_async(0).await;
    }

    #[tokio::test]
    #[serial]
    async fn report_submission_surfaces_body_text() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let report = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/report")
                    .header("seraph-api-key", "abc")
                    .json_body(json!({ "uuid": "p1", "report_type": "cheating_blatant", "reason": "fly" }));
                then.status(400).body("player already reported");
            })
            .await;

        let api = test_api(&server);
        let err = api
            .reports()
            .report_player("p1", ReportType::CheatingBlatant, Some("fly"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "player already reported");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
        report.assert_hits_async(1).await;
    }

    #[tokio::test]
    #[serial]
    async fn report_lookup_swallows_errors() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let _blacklist = server
            .mock_async(|when, then| {
                when.method(GET).path("/blacklist/p1").header("seraph-api-key", "abc");
                then.status(200).json_body(json!({ "success": true, "data": { "uuid": "p1", "blacklist": { "tagged": false } } }));
            })
            .await;
        let _formatted = server
            .mock_async(|when, then| {
                when.method(GET).path("/cubelify/blacklist/p1");
                then.status(403).body("forbidden");
            })
            .await;

        let _missing = server
            .mock_async(|when, then| {
                when.method(GET).path("/blacklist/p2");
                then.status(404).body("not found");
            })
            .await;

        let api = test_api(&server);
        let report = api.reports().fetch_player_report("p1").await.unwrap();
        assert_eq!(report.status, 200);
        assert_eq!(report.data.unwrap()["blacklist"]["tagged"], false);

        let missing = api.reports().fetch_player_report("p2").await.unwrap();
        assert_eq!(missing.status, 404);
        assert!(missing.data.is_none());

        assert_eq!(api.reports().fetch_formatted_player_report("p1").await, None);
    }

    #[tokio::test]
    #[serial]
    async fn linking_operations_surface_body_text() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let _link = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/v1/user/42/link")
                    .header("authorization", "Bearer abc")
                    .json_body(json!({ "snowflake": "42", "id": "p1", "is_primary": true }));
                then.status(409).body("account already linked");
            })
            .await;
        let _accounts = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/user/42");
                then.status(404).body("user not found");
            })
            .await;
        let _prefix = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/v1/sync/rotational/prefix/p1");
                then.status(204);
            })
            .await;

        let api = test_api(&server);
        let account = LinkedAccount { snowflake: "42".into(), id: "p1".into(), is_primary: true };

        let err = api.linking().send_link_request(&account).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { ref body, .. } if body == "account already linked"));

        let err = api.linking().fetch_linked_accounts("42").await.unwrap_err();
        assert_eq!(err.to_string(), "user not found");

        assert!(api.linking().update_user_prefix_by_id("p1").await.is_ok());
    }

    #[tokio::test]
    #[serial]
    async fn user_profile_round_trip() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let fetch = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/user/42/profile").header("authorization", "Bearer abc");
                then.status(200).json_body(json!({
                    "user_profile": { "snowflake": "42", "locale": "en" },
                    "linked_accounts": [{ "snowflake": "42", "id": "p1", "is_primary": true }],
                    "lng": "en"
                }));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/v1/user/42/profile")
                    .header("authorization", "Bearer abc")
                    .json_body(json!({ "locale": "de" }));
                then.status(200).json_body(json!({ "snowflake": "42", "locale": "de" }));
            })
            .await;
        let rejected = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/v1/user/7/profile");
                then.status(422).body("unsupported locale");
            })
            .await;

        let api = test_api(&server);
        let profile = api.linking().fetch_user_profile("42").await.unwrap();
        assert_eq!(profile.user_profile.locale, "en");
        assert_eq!(profile.linked_accounts.map(|a| a.len()), Some(1));

        let patch = UserProfilePatch { locale: Some("de".into()) };
        let updated = api.linking().update_user_profile("42", &patch).await.unwrap();
        assert_eq!(updated, UserProfile { snowflake: "42".into(), locale: "de".into() });

        let err = api.linking().update_user_profile("7", &patch).await.unwrap_err();
        assert_eq!(err.to_string(), "unsupported locale");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(422));

        fetch.assert_hits_async(1).await;
        update.assert_hits_async(1).await;
        rejected.assert_hits_async(1).await;
    }

    #[tokio::test]
    #[serial]
    async fn server_verification_by_code() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = mock_refresh(&server, DEVELOPER_REFRESH_PATH, "abc", &future_iso(3600)).await;
        let _valid = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/verification/code/ABC123").header("authorization", "Bearer abc");
                then.status(200).json_body(json!({
                    "is_valid": true,
                    "success": true,
                    "message": "verified",
                    "minecraft_uuid": "p1"
                }));
            })
            .await;
        let _expired = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/verification/code/OLD");
                then.status(410).body("code expired");
            })
            .await;

        let api = test_api(&server);
        let verification = api.linking().fetch_server_verification_by_code("ABC123").await.unwrap();
        assert!(verification.is_valid);
        assert_eq!(verification.minecraft_uuid.as_deref(), Some("p1"));

        let err = api.linking().fetch_server_verification_by_code("OLD").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { ref body, .. } if body == "code expired"));
    }

    #[tokio::test]
    #[serial]
    async fn missing_credential_ends_in_upstream_rejection() {
        set_env_guard();
        let server = MockServer::start_async().await;
        let _refresh = server
            .mock_async(|when, then| {
                when.method(POST).path(DEVELOPER_REFRESH_PATH);
                then.status(500);
            })
            .await;
        let _history = server
            .mock_async(|when, then| {
                when.method(GET).path("/player/p1");
                then.status(401).body("missing authorization");
            })
            .await;

        let api = test_api(&server);
        assert_eq!(api.player_cache().fetch_player_history("p1").await, None);
        // unmatched by the mock server, which answers 404
        let err = api.linking().fetch_user_profile("42").await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    }
}

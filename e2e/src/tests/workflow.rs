use fictioneers::{Error, NewUser};
use httpmock::prelude::*;
use serde_json::json;

use super::utils::session;

#[tokio::test]
async fn initialise_creates_missing_user_then_loads_events() {
    let server = MockServer::start_async().await;
    let exchange = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/auth/token");
            then.status(200)
                .json_body(json!({"access_token": "tok", "expires_in": 300}));
        })
        .await;
    let me = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/users/me");
            then.status(200)
                .json_body(json!({"data": null, "error": null, "meta": null, "status": 200}));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/users")
                .header("authorization", "Bearer tok")
                .json_body_partial(r#"{"published_timeline_id": "t1"}"#);
            then.status(201).json_body(json!({
                "data": {"id": "new-player", "published_timeline_id": "t1", "timezone": "Europe/London"},
                "error": null,
                "meta": null,
                "status": 201
            }));
        })
        .await;
    let events = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/user-timeline-events");
            then.status(200).json_body(json!({"data": [
                {"id": "ute1", "timeline_event_id": "ev1", "state": "ACTIVE"}
            ]}));
        })
        .await;

    let sdk = session(&server, "p_public", "new-player");
    let result = sdk
        .initialise_and_progress_user(&NewUser::new("t1"))
        .await
        .unwrap();

    exchange.assert_hits_async(1).await;
    me.assert_hits_async(1).await;
    create.assert_hits_async(1).await;
    events.assert_hits_async(1).await;

    let user = result.user.unwrap();
    assert_eq!(user.id, "new-player");
    assert_eq!(user.published_timeline_id.as_deref(), Some("t1"));
    assert_eq!(user.timezone.as_deref(), Some("Europe/London"));
    assert_eq!(result.user_timeline_events.data().map(Vec::len), Some(1));
}

#[tokio::test]
async fn initialise_surfaces_lookup_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/users/me");
            then.status(503).body("maintenance");
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/users");
            then.status(201).json_body(json!({"data": {"id": "x"}}));
        })
        .await;

    let sdk = session(&server, "s_secret", "player");
    let err = sdk
        .initialise_and_progress_user(&NewUser::new("t1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
    create.assert_hits_async(0).await;
}

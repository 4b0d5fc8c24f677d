/// Contract tests for the API client
///
/// These drive the domain modules end-to-end against the mock transport and
/// pin down the wire contract:
/// - query encoding (array filters repeat the key)
/// - bearer attachment follows the session store
/// - 204 and malformed-success normalization
/// - error-body mapping with the generic fallback

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use campuslink_client::transport::mock::MockTransport;
use campuslink_client::{
    events, feed, hire, internships, likes, notifications, startups, users, ApiClient, ApiError,
};
use campuslink_shared::models::post::PostType;
use campuslink_shared::session::SessionStore;

fn test_client() -> (Arc<MockTransport>, ApiClient) {
    let mock = Arc::new(MockTransport::new());
    let api = ApiClient::new(mock.clone(), SessionStore::with_token("test-token"));
    (mock, api)
}

#[tokio::test]
async fn test_feed_filter_repeats_query_key() {
    let (mock, api) = test_client();
    mock.push_json(json!({"results": []}));

    feed::list_posts(&api, &[PostType::Project, PostType::StartupIdea])
        .await
        .unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.path, "/api/feed/posts");
    assert_eq!(
        request.query,
        vec![
            ("type".to_string(), "project".to_string()),
            ("type".to_string(), "startup_idea".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_bearer_token_follows_session() {
    let (mock, api) = test_client();
    mock.push_json(json!([]));
    mock.push_json(json!([]));

    events::list_events(&api, &[]).await.unwrap();
    assert_eq!(
        mock.requests()[0].bearer.as_deref(),
        Some("test-token"),
        "session token attached"
    );

    api.session().clear();
    events::list_events(&api, &[]).await.unwrap();
    assert!(
        mock.requests()[1].bearer.is_none(),
        "no token after sign-out; request proceeds unauthenticated"
    );
}

#[tokio::test]
async fn test_delete_resolves_204_without_body_parse() {
    let (mock, api) = test_client();
    mock.push_no_content();

    feed::delete_post(&api, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let (mock, api) = test_client();
    mock.push_status(403, br#"{"message":"Only admins can do that"}"#.to_vec());

    let err = events::admin_lock_team_formation(&api, Uuid::new_v4())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Only admins can do that");
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_unparsable_error_body_uses_generic_fallback() {
    let (mock, api) = test_client();
    mock.push_status(500, b"Internal Server Error".to_vec());

    let err = likes::toggle_like(&api, Uuid::new_v4()).await.unwrap_err();

    match err {
        ApiError::Status {
            status,
            message,
            details,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "API request failed");
            assert!(details.is_none());
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_me_without_role_is_a_decode_failure() {
    let (mock, api) = test_client();
    mock.push_json(json!({
        "id": Uuid::new_v4(),
        "email": "priya@college.edu",
        "name": "Priya"
        // no role field
    }));

    let err = users::fetch_me(&api).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_event_crud_paths() {
    let (mock, api) = test_client();
    let event_id = Uuid::new_v4();

    mock.push_json(json!({
        "id": event_id,
        "name": "Winter Hack Night",
        "description": "Overnight build sprint",
        "starts_at": "2025-01-10T18:00:00Z",
        "ends_at": "2025-01-11T09:00:00Z",
        "registration_status": "Open",
        "location": null,
        "organizer_id": Uuid::new_v4(),
        "team_min_size": null,
        "team_max_size": null
    }));
    mock.push_json(json!({}));
    mock.push_no_content();

    let created = events::create_event(
        &api,
        &events::EventPayload {
            name: "Winter Hack Night".to_string(),
            description: "Overnight build sprint".to_string(),
            starts_at: "2025-01-10T18:00:00Z".parse().unwrap(),
            ends_at: "2025-01-11T09:00:00Z".parse().unwrap(),
            location: None,
            team_min_size: None,
            team_max_size: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.name, "Winter Hack Night");

    events::update_event(
        &api,
        event_id,
        &events::UpdateEventRequest {
            registration_status: Some("Closed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    // Partial update serializes only the present field
    assert_eq!(
        mock.requests()[1].body,
        Some(json!({"registration_status": "Closed"}))
    );

    events::delete_event(&api, event_id).await.unwrap();
    assert_eq!(mock.requests()[2].path, format!("/api/events/{event_id}"));
}

#[tokio::test]
async fn test_hire_board_reads() {
    let (mock, api) = test_client();
    let job_id = Uuid::new_v4();
    let job = json!({
        "id": job_id,
        "role_title": "Backend Intern",
        "company_id": Uuid::new_v4(),
        "description": "APIs",
        "type": "Internship",
        "location": "Remote",
        "stipend": "₹10,000",
        "duration": "3 months",
        "application_deadline": null,
        "external_link": null
    });

    mock.push_json(json!({"results": [job.clone()]}));
    mock.push_json(job);

    let jobs = hire::list_jobs(&api, &["Internship", "Part-time"]).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(
        mock.requests()[0].query,
        vec![
            ("type".to_string(), "Internship".to_string()),
            ("type".to_string(), "Part-time".to_string()),
        ]
    );

    let detail = internships::fetch_internship(&api, job_id).await.unwrap();
    assert_eq!(detail.role_title, "Backend Intern");
}

#[tokio::test]
async fn test_startup_and_notification_reads() {
    let (mock, api) = test_client();
    let startup_id = Uuid::new_v4();
    let startup = json!({
        "id": startup_id,
        "user_id": Uuid::new_v4(),
        "name": "MessMate",
        "problem": "Campus food discovery",
        "domain": "foodtech",
        "stage": "MVP",
        "status": "APPROVED",
        "reapply_after": null
    });

    mock.push_json(json!([startup.clone()]));
    mock.push_json(startup);
    mock.push_json(json!({"results": [{
        "id": Uuid::new_v4(),
        "kind": "like",
        "message": "Priya liked your post",
        "read": false,
        "created_at": "2025-01-04T12:00:00Z"
    }]}));

    let listed = startups::list_startups(&api).await.unwrap();
    assert_eq!(listed.len(), 1);

    let fetched = startups::fetch_startup(&api, startup_id).await.unwrap();
    assert!(fetched.can_post_jobs());

    let inbox = notifications::my_notifications(&api).await.unwrap();
    assert_eq!(inbox[0].kind, "like");
    assert!(!inbox[0].read);
}

#[tokio::test]
async fn test_my_startup_treats_404_as_none() {
    let (mock, api) = test_client();
    mock.push_status(404, br#"{"message":"No startup"}"#.to_vec());

    let startup = startups::my_startup(&api).await.unwrap();
    assert!(startup.is_none());
}

#[tokio::test]
async fn test_team_status_patch_body() {
    let (mock, api) = test_client();
    mock.push_json(json!({}));

    let event_id = Uuid::new_v4();
    let team_id = Uuid::new_v4();
    events::admin_update_team_status(
        &api,
        event_id,
        team_id,
        campuslink_shared::models::team::TeamStatus::Locked,
    )
    .await
    .unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(
        request.path,
        format!("/api/events/{event_id}/admin/teams/{team_id}")
    );
    assert_eq!(request.body, Some(json!({"status": "locked"})));
}

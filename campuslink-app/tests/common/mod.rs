/// Shared test fixtures for controller tests
///
/// `TestContext` wires the mock transport into a real `ApiClient` with a
/// signed-in session. Fixture builders produce wire-shaped JSON for the
/// entities the controllers consume. `DelayedTransport` wraps the mock with
/// a per-request delay so tests can observe genuinely overlapping actions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use campuslink_client::transport::mock::MockTransport;
use campuslink_client::transport::{ApiRequest, ApiTransport, RawResponse};
use campuslink_client::{ApiClient, ApiError};
use campuslink_shared::session::SessionStore;

pub struct TestContext {
    pub mock: Arc<MockTransport>,
    pub api: ApiClient,
}

impl TestContext {
    pub fn new() -> Self {
        let mock = Arc::new(MockTransport::new());
        let api = ApiClient::new(mock.clone(), SessionStore::with_token("test-token"));
        Self { mock, api }
    }

    /// Context whose transport sleeps before answering, so two actions can
    /// genuinely overlap in a test
    pub fn with_delay(delay: Duration) -> Self {
        let mock = Arc::new(MockTransport::new());
        let delayed = DelayedTransport {
            inner: mock.clone(),
            delay,
        };
        let api = ApiClient::new(Arc::new(delayed), SessionStore::with_token("test-token"));
        Self { mock, api }
    }
}

/// Mock transport wrapper that delays every response
pub struct DelayedTransport {
    inner: Arc<MockTransport>,
    delay: Duration,
}

#[async_trait]
impl ApiTransport for DelayedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        tokio::time::sleep(self.delay).await;
        self.inner.send(request).await
    }
}

// --- fixture builders -----------------------------------------------------

pub fn event_json(id: Uuid) -> Value {
    json!({
        "id": id,
        "name": "Winter Hack Night",
        "description": "Overnight build sprint",
        "starts_at": "2025-01-10T18:00:00Z",
        "ends_at": "2025-01-11T09:00:00Z",
        "registration_status": "Open",
        "location": "Block C Auditorium",
        "organizer_id": Uuid::new_v4(),
        "team_min_size": 2,
        "team_max_size": 4,
        "milestones": []
    })
}

pub fn team_json(
    id: Uuid,
    event_id: Uuid,
    name: &str,
    status: &str,
    member_count: usize,
    max_size: Option<u32>,
) -> Value {
    let members: Vec<Value> = (0..member_count)
        .map(|i| json!({"id": Uuid::new_v4(), "name": format!("member-{i}")}))
        .collect();
    json!({
        "id": id,
        "event_id": event_id,
        "name": name,
        "leader_id": Uuid::new_v4(),
        "required_skills": ["rust"],
        "members": members,
        "max_size": max_size,
        "status": status
    })
}

pub fn participant_json(id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "user_id": Uuid::new_v4(),
        "name": name,
        "skills": ["python"],
        "applied_at": "2025-01-04T12:00:00Z"
    })
}

pub fn summary_json() -> Value {
    json!({
        "participant_count": 12,
        "team_count": 3,
        "solo_count": 2,
        "join_requests": [
            {"user_name": "Priya", "team_name": "Night Shift", "status": "pending"}
        ]
    })
}

pub fn profile_json(role: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "email": "priya@college.edu",
        "name": "Priya",
        "role": role
    })
}

pub fn post_json(id: Uuid, like_count: u32, liked_by_me: bool) -> Value {
    json!({
        "id": id,
        "author_id": Uuid::new_v4(),
        "title": "Mess-menu tracker",
        "description": "Scrapes the mess menu into a widget",
        "post_type": "project",
        "stage": "MVP",
        "required_skills": ["flutter"],
        "collaborators": [],
        "like_count": like_count,
        "comment_count": 0,
        "liked_by_me": liked_by_me
    })
}

pub fn startup_json(status: &str, reapply_after: Option<&str>) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "user_id": Uuid::new_v4(),
        "name": "MessMate",
        "problem": "Campus food discovery",
        "domain": "foodtech",
        "stage": "MVP",
        "status": status,
        "reapply_after": reapply_after
    })
}

pub fn application_json(job_id: Uuid, status: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "job_id": job_id,
        "applicant_id": Uuid::new_v4(),
        "status": status,
        "applied_at": "2025-01-04T12:00:00Z"
    })
}

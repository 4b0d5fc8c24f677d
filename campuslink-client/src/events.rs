/// Event endpoints
///
/// One thin function per REST endpoint - no business logic, no retries.
/// Student-facing reads/actions first, then the admin surface.
///
/// # Endpoints
///
/// - `GET/POST/PATCH/DELETE /api/events[/:id]` - event CRUD
/// - `GET /api/events/:id/timeline|teams|resources|faq` - sub-resources
/// - `POST /api/events/:id/teams` - create team
/// - `POST /api/events/:id/teams/:teamId/requests` - request to join
/// - `POST /api/events/:id/solo` - solo application
/// - `GET /api/events/:id/admin/summary|teams|participants` - admin reads
/// - `PATCH /api/events/:id/admin/teams/:teamId` - team status change
/// - `POST /api/events/:id/admin/participants/:id/move` - reassign solo
/// - `POST /api/events/:id/admin/teams/lock` - bulk lock
/// - `POST/PATCH/DELETE /api/events/:id/admin/resources[/:id]` - resources
/// - `POST/PATCH/DELETE /api/events/:id/admin/faq[/:id]` - FAQ

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use campuslink_shared::models::event::{Event, TimelineEntry};
use campuslink_shared::models::faq::Faq;
use campuslink_shared::models::resource::{Resource, ResourceType};
use campuslink_shared::models::team::{JoinRequest, SoloParticipant, Team, TeamStatus};

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Payload for creating an event (organizer/admin)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventPayload {
    /// Event name (required)
    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,

    /// Long-form description
    pub description: String,

    /// Start of the event window
    pub starts_at: chrono::DateTime<chrono::Utc>,

    /// End of the event window
    pub ends_at: chrono::DateTime<chrono::Utc>,

    /// Venue or "Online"
    pub location: Option<String>,

    /// Minimum team size
    pub team_min_size: Option<u32>,

    /// Maximum team size
    pub team_max_size: Option<u32>,
}

/// Partial event update; only present fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<String>,
}

/// Payload for creating a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    /// Team name (trimmed, non-empty - validated before any request)
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,

    /// Skills the leader is looking for
    #[serde(default)]
    pub required_skills: Vec<String>,

    /// Maximum member count, when the creator sets one
    pub max_size: Option<u32>,
}

/// Payload for a solo application
///
/// Not idempotent: submitting twice produces two registrations unless the
/// server rejects duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoloApplication {
    /// Self-reported skills
    #[serde(default)]
    pub skills: Vec<String>,

    /// Free-form note to the organizers
    pub note: Option<String>,
}

/// Payload for creating/updating a resource
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResourcePayload {
    /// Display title (required)
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Target URL (required)
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Link type
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Optional description
    pub description: Option<String>,
}

/// Payload for creating/updating an FAQ entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqPayload {
    /// Question text (required)
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,

    /// Answer text (required)
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,
}

/// Registration summary shown on the admin overview tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    /// Total registered participants (team members + solo)
    pub participant_count: u32,

    /// Total teams
    pub team_count: u32,

    /// Solo participants not yet in a team
    pub solo_count: u32,

    /// Join requests across all teams
    #[serde(default)]
    pub join_requests: Vec<JoinRequest>,
}

// --- student-facing reads -------------------------------------------------

/// Lists events, optionally filtered by registration status
pub async fn list_events(api: &ApiClient, statuses: &[&str]) -> ApiResult<Vec<Event>> {
    let query = Query::new().add_all("status", statuses.iter().copied());
    api.get_list("/api/events", query).await
}

/// Fetches one event
pub async fn fetch_event_detail(api: &ApiClient, event_id: Uuid) -> ApiResult<Event> {
    api.get(&format!("/api/events/{event_id}"), Query::new())
        .await
}

/// Fetches the event timeline
pub async fn fetch_timeline(api: &ApiClient, event_id: Uuid) -> ApiResult<Vec<TimelineEntry>> {
    api.get_list(&format!("/api/events/{event_id}/timeline"), Query::new())
        .await
}

/// Fetches the event's teams
pub async fn fetch_teams(api: &ApiClient, event_id: Uuid) -> ApiResult<Vec<Team>> {
    api.get_list(&format!("/api/events/{event_id}/teams"), Query::new())
        .await
}

/// Fetches the event's resources
pub async fn fetch_resources(api: &ApiClient, event_id: Uuid) -> ApiResult<Vec<Resource>> {
    api.get_list(&format!("/api/events/{event_id}/resources"), Query::new())
        .await
}

/// Fetches the event's FAQ entries
pub async fn fetch_faqs(api: &ApiClient, event_id: Uuid) -> ApiResult<Vec<Faq>> {
    api.get_list(&format!("/api/events/{event_id}/faq"), Query::new())
        .await
}

/// Creates an event (organizer/admin)
pub async fn create_event(api: &ApiClient, payload: &EventPayload) -> ApiResult<Event> {
    api.post("/api/events", payload).await
}

/// Applies a partial event update (organizer/admin)
pub async fn update_event(
    api: &ApiClient,
    event_id: Uuid,
    payload: &UpdateEventRequest,
) -> ApiResult<()> {
    api.patch_unit(&format!("/api/events/{event_id}"), payload)
        .await
}

/// Deletes an event (organizer/admin); answers 204
pub async fn delete_event(api: &ApiClient, event_id: Uuid) -> ApiResult<()> {
    api.delete_unit(&format!("/api/events/{event_id}")).await
}

// --- student-facing actions ----------------------------------------------

/// Creates a team; the caller becomes its leader server-side
pub async fn create_event_team(
    api: &ApiClient,
    event_id: Uuid,
    payload: &CreateTeamRequest,
) -> ApiResult<Team> {
    api.post(
        &format!("/api/events/{event_id}/teams"),
        payload,
    )
    .await
}

/// Requests to join a team
///
/// The request stays pending until an admin/leader acts on it; the caller
/// must not assume membership on success.
pub async fn request_to_join_team(api: &ApiClient, event_id: Uuid, team_id: Uuid) -> ApiResult<()> {
    api.post_unit(
        &format!("/api/events/{event_id}/teams/{team_id}/requests"),
        &json!({}),
    )
    .await
}

/// Registers the caller as a solo participant
pub async fn apply_solo_to_event(
    api: &ApiClient,
    event_id: Uuid,
    payload: &SoloApplication,
) -> ApiResult<()> {
    api.post_unit(
        &format!("/api/events/{event_id}/solo"),
        payload,
    )
    .await
}

// --- admin surface --------------------------------------------------------

/// Fetches the admin registration summary
pub async fn admin_fetch_summary(api: &ApiClient, event_id: Uuid) -> ApiResult<AdminSummary> {
    api.get(&format!("/api/events/{event_id}/admin/summary"), Query::new())
        .await
}

/// Fetches teams with admin-only fields
pub async fn admin_fetch_teams(api: &ApiClient, event_id: Uuid) -> ApiResult<Vec<Team>> {
    api.get_list(&format!("/api/events/{event_id}/admin/teams"), Query::new())
        .await
}

/// Fetches the solo-participant pool
pub async fn admin_fetch_participants(
    api: &ApiClient,
    event_id: Uuid,
) -> ApiResult<Vec<SoloParticipant>> {
    api.get_list(
        &format!("/api/events/{event_id}/admin/participants"),
        Query::new(),
    )
    .await
}

/// Sets a team's status (approve/reject/lock)
pub async fn admin_update_team_status(
    api: &ApiClient,
    event_id: Uuid,
    team_id: Uuid,
    status: TeamStatus,
) -> ApiResult<()> {
    api.patch_unit(
        &format!("/api/events/{event_id}/admin/teams/{team_id}"),
        &json!({ "status": status.as_str() }),
    )
    .await
}

/// Moves a solo participant into an existing team
pub async fn admin_move_solo_participant(
    api: &ApiClient,
    event_id: Uuid,
    participant_id: Uuid,
    target_team_id: Uuid,
) -> ApiResult<()> {
    api.post_unit(
        &format!("/api/events/{event_id}/admin/participants/{participant_id}/move"),
        &json!({ "team_id": target_team_id }),
    )
    .await
}

/// Freezes team formation for the whole event
pub async fn admin_lock_team_formation(api: &ApiClient, event_id: Uuid) -> ApiResult<()> {
    api.post_unit(&format!("/api/events/{event_id}/admin/teams/lock"), &json!({}))
        .await
}

/// Creates a resource
pub async fn admin_create_resource(
    api: &ApiClient,
    event_id: Uuid,
    payload: &ResourcePayload,
) -> ApiResult<()> {
    api.post_unit(
        &format!("/api/events/{event_id}/admin/resources"),
        payload,
    )
    .await
}

/// Updates a resource
pub async fn admin_update_resource(
    api: &ApiClient,
    event_id: Uuid,
    resource_id: Uuid,
    payload: &ResourcePayload,
) -> ApiResult<()> {
    api.patch_unit(
        &format!("/api/events/{event_id}/admin/resources/{resource_id}"),
        payload,
    )
    .await
}

/// Deletes a resource
pub async fn admin_delete_resource(
    api: &ApiClient,
    event_id: Uuid,
    resource_id: Uuid,
) -> ApiResult<()> {
    api.delete_unit(&format!("/api/events/{event_id}/admin/resources/{resource_id}"))
        .await
}

/// Creates an FAQ entry
pub async fn admin_create_faq(api: &ApiClient, event_id: Uuid, payload: &FaqPayload) -> ApiResult<()> {
    api.post_unit(
        &format!("/api/events/{event_id}/admin/faq"),
        payload,
    )
    .await
}

/// Updates an FAQ entry
pub async fn admin_update_faq(
    api: &ApiClient,
    event_id: Uuid,
    faq_id: Uuid,
    payload: &FaqPayload,
) -> ApiResult<()> {
    api.patch_unit(
        &format!("/api/events/{event_id}/admin/faq/{faq_id}"),
        payload,
    )
    .await
}

/// Deletes an FAQ entry
pub async fn admin_delete_faq(api: &ApiClient, event_id: Uuid, faq_id: Uuid) -> ApiResult<()> {
    api.delete_unit(&format!("/api/events/{event_id}/admin/faq/{faq_id}"))
        .await
}

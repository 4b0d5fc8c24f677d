/// Hire-board endpoints (job postings and application review)
///
/// Posting requires an approved startup; the gate is enforced server-side
/// and mirrored client-side by `Startup::can_post_jobs`.
///
/// # Endpoints
///
/// - `GET /api/hire/jobs` - list jobs (filters repeat as query entries)
/// - `POST /api/hire/jobs` - create a job posting
/// - `GET /api/hire/jobs/:id/applications` - list applications (owner)
/// - `PATCH /api/hire/applications/:id` - update application status (owner)

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use campuslink_shared::models::job::{Application, ApplicationStatus, Job};

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Payload for creating a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Role title (required)
    #[validate(length(min = 1, message = "Role title is required"))]
    pub role_title: String,

    /// Role description
    pub description: String,

    /// Engagement type, e.g. "Internship"
    #[serde(rename = "type")]
    pub job_type: String,

    /// Location or "Remote"
    pub location: Option<String>,

    /// Monthly stipend, free-form
    pub stipend: Option<String>,

    /// Duration, free-form
    pub duration: Option<String>,

    /// Applications close at this time
    pub application_deadline: Option<chrono::DateTime<chrono::Utc>>,

    /// External application link
    pub external_link: Option<String>,
}

/// Lists job postings, optionally filtered by type
pub async fn list_jobs(api: &ApiClient, types: &[&str]) -> ApiResult<Vec<Job>> {
    let query = Query::new().add_all("type", types.iter().copied());
    api.get_list("/api/hire/jobs", query).await
}

/// Creates a job posting (approved startup owners)
pub async fn create_job(api: &ApiClient, payload: &CreateJobRequest) -> ApiResult<Job> {
    api.post("/api/hire/jobs", payload).await
}

/// Lists applications to a job (posting owner)
pub async fn list_applications(api: &ApiClient, job_id: Uuid) -> ApiResult<Vec<Application>> {
    api.get_list(&format!("/api/hire/jobs/{job_id}/applications"), Query::new())
        .await
}

/// Moves an application to a new review status (posting owner)
pub async fn update_application_status(
    api: &ApiClient,
    application_id: Uuid,
    status: ApplicationStatus,
) -> ApiResult<()> {
    api.patch_unit(
        &format!("/api/hire/applications/{application_id}"),
        &json!({ "status": status.as_str() }),
    )
    .await
}

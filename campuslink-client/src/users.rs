/// User/profile endpoints
///
/// `fetch_me` is the role-resolution call: the `Profile` type requires the
/// `role` field, so a response without one fails to decode and the resolver
/// treats that as a hard failure rather than defaulting to a safe role.
///
/// # Endpoints
///
/// - `GET /api/users/me` - the caller's profile (role source of truth)
/// - `PATCH /api/users/profile` - update profile fields
/// - `POST /api/users/request-admin` - role upgrade request
/// - `POST /api/users/request-student` - role downgrade request

use serde::{Deserialize, Serialize};
use serde_json::json;

use campuslink_shared::models::profile::Profile;

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Partial profile update; only present fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_work: Option<bool>,
}

/// Fetches the caller's profile
pub async fn fetch_me(api: &ApiClient) -> ApiResult<Profile> {
    api.get("/api/users/me", Query::new()).await
}

/// Updates the caller's profile
pub async fn update_profile(api: &ApiClient, payload: &UpdateProfileRequest) -> ApiResult<()> {
    api.patch_unit("/api/users/profile", payload).await
}

/// Requests the admin role; follow with a role refresh
pub async fn request_admin(api: &ApiClient) -> ApiResult<()> {
    api.post_unit("/api/users/request-admin", &json!({})).await
}

/// Requests the student role; follow with a role refresh
pub async fn request_student(api: &ApiClient) -> ApiResult<()> {
    api.post_unit("/api/users/request-student", &json!({})).await
}

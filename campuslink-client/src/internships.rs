/// Internship search endpoints
///
/// The search box on the internships list is debounced at the controller
/// layer (see the app crate); this module just issues the query.
///
/// # Endpoints
///
/// - `GET /api/internships` - search/list (query `q`, type filters repeat)
/// - `GET /api/internships/:id` - one listing
/// - `POST /api/internships/:id/apply` - apply (status starts at Applied)
/// - `GET /api/internships/applications/me` - the caller's applications

use serde_json::json;
use uuid::Uuid;

use campuslink_shared::models::job::{Application, Job};

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Searches internships by free-text query and type filters
pub async fn search_internships(
    api: &ApiClient,
    q: Option<&str>,
    types: &[&str],
) -> ApiResult<Vec<Job>> {
    let query = Query::new()
        .add_opt("q", q)
        .add_all("type", types.iter().copied());
    api.get_list("/api/internships", query).await
}

/// Fetches one internship listing
pub async fn fetch_internship(api: &ApiClient, internship_id: Uuid) -> ApiResult<Job> {
    api.get(&format!("/api/internships/{internship_id}"), Query::new())
        .await
}

/// Applies to an internship
pub async fn apply_to_internship(api: &ApiClient, internship_id: Uuid) -> ApiResult<()> {
    api.post_unit(&format!("/api/internships/{internship_id}/apply"), &json!({}))
        .await
}

/// Lists the caller's own applications
pub async fn my_applications(api: &ApiClient) -> ApiResult<Vec<Application>> {
    api.get_list("/api/internships/applications/me", Query::new())
        .await
}

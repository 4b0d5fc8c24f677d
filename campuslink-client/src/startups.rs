/// Startup endpoints
///
/// # Endpoints
///
/// - `GET /api/startups` - list approved startups
/// - `GET /api/startups/me` - the caller's startup, if any
/// - `POST /api/startups` - register (or reapply after rejection)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use campuslink_shared::models::startup::Startup;

use crate::client::{ApiClient, Query};
use crate::error::{ApiError, ApiResult};

/// Payload for registering a startup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterStartupRequest {
    /// Startup name (required)
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Problem statement (required)
    #[validate(length(min = 1, message = "Problem statement is required"))]
    pub problem: String,

    /// Domain, e.g. "edtech"
    pub domain: String,

    /// Maturity stage, free-form
    pub stage: String,
}

/// Lists approved startups
pub async fn list_startups(api: &ApiClient) -> ApiResult<Vec<Startup>> {
    api.get_list("/api/startups", Query::new()).await
}

/// Fetches the caller's startup, `None` when they have none
///
/// A 404 here is "no startup yet", not a failure.
pub async fn my_startup(api: &ApiClient) -> ApiResult<Option<Startup>> {
    match api.get::<Startup>("/api/startups/me", Query::new()).await {
        Ok(startup) => Ok(Some(startup)),
        Err(ApiError::Status { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Registers a startup (enters PENDING review)
pub async fn register_startup(
    api: &ApiClient,
    payload: &RegisterStartupRequest,
) -> ApiResult<Startup> {
    api.post("/api/startups", payload).await
}

/// Fetches one startup
pub async fn fetch_startup(api: &ApiClient, startup_id: Uuid) -> ApiResult<Startup> {
    api.get(&format!("/api/startups/{startup_id}"), Query::new())
        .await
}

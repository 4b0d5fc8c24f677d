/// Like endpoints
///
/// Toggling is intentionally unsequenced client-side: two rapid toggles
/// produce two requests and the last resolved response wins.
///
/// # Endpoints
///
/// - `POST /api/posts/:id/like` - toggle like, returns the new like state
/// - `GET /api/posts/:id/like-info` - current like state

use serde_json::json;
use uuid::Uuid;

use campuslink_shared::models::post::LikeInfo;

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Toggles the current user's like on a post
pub async fn toggle_like(api: &ApiClient, post_id: Uuid) -> ApiResult<LikeInfo> {
    api.post(&format!("/api/posts/{post_id}/like"), &json!({}))
        .await
}

/// Fetches the current like state of a post
pub async fn like_info(api: &ApiClient, post_id: Uuid) -> ApiResult<LikeInfo> {
    api.get(&format!("/api/posts/{post_id}/like-info"), Query::new())
        .await
}

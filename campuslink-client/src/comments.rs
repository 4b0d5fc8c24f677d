/// Comment endpoints
///
/// # Endpoints
///
/// - `GET /api/posts/:id/comments` - list comments
/// - `POST /api/posts/:id/comments` - add a comment

use serde_json::json;
use uuid::Uuid;

use campuslink_shared::models::comment::Comment;

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Lists comments on a post
pub async fn list_comments(api: &ApiClient, post_id: Uuid) -> ApiResult<Vec<Comment>> {
    api.get_list(&format!("/api/posts/{post_id}/comments"), Query::new())
        .await
}

/// Adds a comment to a post
pub async fn add_comment(api: &ApiClient, post_id: Uuid, body: &str) -> ApiResult<Comment> {
    api.post(
        &format!("/api/posts/{post_id}/comments"),
        &json!({ "body": body }),
    )
    .await
}

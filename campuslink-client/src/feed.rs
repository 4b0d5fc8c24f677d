/// Feed endpoints
///
/// # Endpoints
///
/// - `GET /api/feed/posts` - list posts (post_type filter repeats as
///   `?type=A&type=B`)
/// - `POST /api/feed/posts` - create post
/// - `DELETE /api/feed/posts/:id` - delete own post (204)
/// - `POST /api/posts/:id/collaborate` - request to collaborate

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use campuslink_shared::models::post::{Post, PostType, Stage};

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Payload for creating a post
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title (required)
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Body text
    pub description: String,

    /// Post category
    pub post_type: PostType,

    /// Maturity stage (projects and startup ideas)
    pub stage: Option<Stage>,

    /// Skills the author is looking for
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Lists feed posts, optionally filtered by post type
pub async fn list_posts(api: &ApiClient, types: &[PostType]) -> ApiResult<Vec<Post>> {
    let query = Query::new().add_all("type", types.iter().map(|t| t.as_str()));
    api.get_list("/api/feed/posts", query).await
}

/// Creates a feed post
pub async fn create_post(api: &ApiClient, payload: &CreatePostRequest) -> ApiResult<Post> {
    api.post("/api/feed/posts", payload).await
}

/// Deletes a post (owner only)
pub async fn delete_post(api: &ApiClient, post_id: Uuid) -> ApiResult<()> {
    api.delete_unit(&format!("/api/feed/posts/{post_id}")).await
}

/// Requests to collaborate on a post
pub async fn request_collaboration(api: &ApiClient, post_id: Uuid) -> ApiResult<()> {
    api.post_unit(&format!("/api/posts/{post_id}/collaborate"), &json!({}))
        .await
}

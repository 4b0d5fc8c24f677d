/// Feed post model
///
/// Posts are the home-feed items: project showcases, startup ideas, and work
/// updates. Any authenticated user can create one; only the owner can delete
/// it. Like and comment counts are denormalized server-side and refreshed by
/// reloading the feed or the per-post like-info endpoint.
///
/// # Wire Shape
///
/// ```json
/// {
///   "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
///   "author_id": "9b2e...",
///   "title": "Mess-menu tracker",
///   "description": "Scrapes the mess menu into a widget",
///   "post_type": "project",
///   "stage": "MVP",
///   "required_skills": ["flutter"],
///   "collaborators": [],
///   "like_count": 12,
///   "comment_count": 3,
///   "liked_by_me": false
/// }
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feed post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Project,
    StartupIdea,
    WorkUpdate,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Project => "project",
            PostType::StartupIdea => "startup_idea",
            PostType::WorkUpdate => "work_update",
        }
    }
}

/// Project maturity stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Ideation,
    #[serde(rename = "MVP")]
    Mvp,
    Scaling,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Ideation => "Ideation",
            Stage::Mvp => "MVP",
            Stage::Scaling => "Scaling",
        }
    }
}

/// Feed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,

    /// Post author
    pub author_id: Uuid,

    /// Title
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

    /// Accepted collaborators
    #[serde(default)]
    pub collaborators: Vec<Uuid>,

    /// Denormalized like count
    #[serde(default)]
    pub like_count: u32,

    /// Denormalized comment count
    #[serde(default)]
    pub comment_count: u32,

    /// Whether the current user has liked this post
    #[serde(default)]
    pub liked_by_me: bool,
}

/// Like state for a single post, as returned by the like/like-info endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LikeInfo {
    /// Total likes on the post
    pub like_count: u32,

    /// Whether the current user has liked it
    pub is_liked: bool,
}

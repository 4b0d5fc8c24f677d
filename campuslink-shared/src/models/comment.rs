/// Post comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment on a feed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,

    /// Post the comment belongs to
    pub post_id: Uuid,

    /// Comment author
    pub author_id: Uuid,

    /// Author display name, when the server joins it in
    pub author_name: Option<String>,

    /// Comment text
    pub body: String,

    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

/// Notification read surface
///
/// Delivery is handled elsewhere; the client only lists what the server has
/// recorded for the current user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored notification for the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification ID
    pub id: Uuid,

    /// Kind tag, e.g. "like", "collab_request", "application"
    pub kind: String,

    /// Human-readable message
    pub message: String,

    /// Whether the user has seen it
    #[serde(default)]
    pub read: bool,

    /// When it was created
    pub created_at: DateTime<Utc>,
}

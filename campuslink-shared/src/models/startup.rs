/// Startup profile and approval state
///
/// A student-founded venture must be admin-approved before it can post jobs.
/// Rejection carries a `reapply_after` timestamp; the client blocks reapply
/// attempts before it.
///
/// # State Machine
///
/// ```text
/// PENDING → APPROVED
///         → REJECTED (reapply allowed after reapply_after)
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin review status of a startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartupStatus {
    Pending,
    Approved,
    Rejected,
}

impl StartupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartupStatus::Pending => "PENDING",
            StartupStatus::Approved => "APPROVED",
            StartupStatus::Rejected => "REJECTED",
        }
    }
}

/// Startup profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    /// Unique startup ID
    pub id: Uuid,

    /// Founder
    pub user_id: Uuid,

    /// Startup name
    pub name: String,

    /// Problem statement
    pub problem: String,

    /// Domain, e.g. "edtech"
    pub domain: String,

    /// Maturity stage, free-form
    pub stage: String,

    /// Admin review status
    pub status: StartupStatus,

    /// Earliest reapplication time, set when rejected
    pub reapply_after: Option<DateTime<Utc>>,
}

impl Startup {
    /// Whether the startup may post jobs
    pub fn can_post_jobs(&self) -> bool {
        self.status == StartupStatus::Approved
    }

    /// Whether a rejected startup may reapply at `now`
    ///
    /// Pending and approved startups never reapply; a rejected startup
    /// without a `reapply_after` may reapply immediately.
    pub fn can_reapply_at(&self, now: DateTime<Utc>) -> bool {
        match (self.status, self.reapply_after) {
            (StartupStatus::Rejected, Some(after)) => now >= after,
            (StartupStatus::Rejected, None) => true,
            _ => false,
        }
    }
}

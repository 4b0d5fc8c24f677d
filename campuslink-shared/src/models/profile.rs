/// User profile model
///
/// The `/users/me` response. The `role` field is deliberately **not**
/// optional here: role resolution treats a profile without a role as a hard
/// failure, so deserialization fails loudly instead of defaulting - the role
/// resolver turns that into a surfaced error with no role set.
///
/// # Wire Shape
///
/// ```json
/// {
///   "id": "9b2e...",
///   "email": "priya@college.edu",
///   "name": "Priya",
///   "role": "student",
///   "college": "NIT Campus",
///   "course": "B.Tech",
///   "branch": "CSE",
///   "year": 3,
///   "skills": ["rust", "figma"],
///   "trust_score": 74,
///   "level": 3,
///   "available_for_work": true,
///   "is_online": false,
///   "last_seen_at": "2025-01-04T12:00:00Z"
/// }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;

/// User profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user ID
    pub id: Uuid,

    /// Email address (owned by the auth provider)
    pub email: String,

    /// Display name
    pub name: String,

    /// Application role - required; absence is a resolution failure
    pub role: Role,

    /// College name
    pub college: Option<String>,

    /// Course, e.g. "B.Tech"
    pub course: Option<String>,

    /// Branch, e.g. "CSE"
    pub branch: Option<String>,

    /// Year of study
    pub year: Option<u8>,

    /// Self-reported skills
    #[serde(default)]
    pub skills: Vec<String>,

    /// Reputation score
    #[serde(default)]
    pub trust_score: u32,

    /// Gamification level
    #[serde(default)]
    pub level: u32,

    /// Open to collaboration/work
    #[serde(default)]
    pub available_for_work: bool,

    /// Currently online
    #[serde(default)]
    pub is_online: bool,

    /// Last seen timestamp
    pub last_seen_at: Option<DateTime<Utc>>,
}

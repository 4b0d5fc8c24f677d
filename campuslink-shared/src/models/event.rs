/// Event model
///
/// Events are created and edited by organizers/admins and read by every
/// role. The event detail screen additionally loads the timeline, teams,
/// resources, and FAQ sub-resources, each independently.
///
/// # Wire Shape
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Winter Hack Night",
///   "description": "Overnight build sprint",
///   "starts_at": "2025-01-10T18:00:00Z",
///   "ends_at": "2025-01-11T09:00:00Z",
///   "registration_status": "Open",
///   "location": "Block C Auditorium",
///   "organizer_id": "9b2e...",
///   "team_min_size": 2,
///   "team_max_size": 4,
///   "milestones": [{"title": "Idea pitch", "due_at": "2025-01-10T20:00:00Z"}]
/// }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration window status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// Accepting registrations
    Open,

    /// Event in progress, registration closed to new entries
    Ongoing,

    /// Registration and event finished
    Closed,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Open => "Open",
            RegistrationStatus::Ongoing => "Ongoing",
            RegistrationStatus::Closed => "Closed",
        }
    }

    /// Whether students can still register or form teams
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, RegistrationStatus::Open)
    }
}

/// A dated milestone inside an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone title
    pub title: String,

    /// When it is due
    pub due_at: DateTime<Utc>,
}

/// Event model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event ID
    pub id: Uuid,

    /// Event name
    pub name: String,

    /// Long-form description
    pub description: String,

    /// Start of the event window
    pub starts_at: DateTime<Utc>,

    /// End of the event window
    pub ends_at: DateTime<Utc>,

    /// Registration window status
    pub registration_status: RegistrationStatus,

    /// Venue or "Online"
    pub location: Option<String>,

    /// Organizing user/club
    pub organizer_id: Uuid,

    /// Minimum team size, when the event enforces one
    pub team_min_size: Option<u32>,

    /// Maximum team size, when the event enforces one
    pub team_max_size: Option<u32>,

    /// Milestones shown on the timeline tab
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// A single entry on the event timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Entry title
    pub title: String,

    /// Optional detail text
    pub description: Option<String>,

    /// When the entry happens
    pub at: DateTime<Utc>,
}

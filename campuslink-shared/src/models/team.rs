/// Team model and the team-formation status machine
///
/// Teams are the core entity of the event team-formation workflow. A student
/// creates a team (becoming its leader server-side) or requests to join an
/// existing one; an organizer or admin then approves, rejects, and finally
/// locks teams from the management dashboard.
///
/// # State Machine
///
/// ```text
/// pending → approved → locked
///         → rejected
/// ```
///
/// `locked` is terminal for the event's team-formation phase. `rejected` has
/// no re-approve path - the transition table treats it as terminal so the UI
/// never offers one. `open` is a server-assigned status for teams accepting
/// join requests before any review happened.
///
/// Enforcement of the transitions lives server-side; the client encodes the
/// same table so action availability is **status-driven**: once a team is
/// locked, the Lock action is disabled on every subsequent render no matter
/// what requests are in flight.
///
/// # Wire Shape
///
/// ```json
/// {
///   "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
///   "event_id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Night Shift",
///   "leader_id": "9b2e...",
///   "required_skills": ["rust", "design"],
///   "members": [{"id": "9b2e...", "name": "Priya"}],
///   "max_size": 4,
///   "status": "pending"
/// }
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team review/formation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    /// Waiting for organizer review
    Pending,

    /// Approved by an organizer/admin
    Approved,

    /// Rejected by an organizer/admin
    Rejected,

    /// Frozen for the rest of the team-formation phase
    Locked,

    /// Accepting join requests (pre-review)
    Open,
}

impl TeamStatus {
    /// Converts status to the wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Pending => "pending",
            TeamStatus::Approved => "approved",
            TeamStatus::Rejected => "rejected",
            TeamStatus::Locked => "locked",
            TeamStatus::Open => "open",
        }
    }

    /// Checks if status is terminal for the formation phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, TeamStatus::Locked | TeamStatus::Rejected)
    }

    /// Checks if transition to target status is valid
    ///
    /// Mirrors the server's table. Rejected has no re-approve path.
    pub fn can_transition_to(&self, target: TeamStatus) -> bool {
        match (self, target) {
            // Review outcomes
            (TeamStatus::Pending, TeamStatus::Approved) => true,
            (TeamStatus::Pending, TeamStatus::Rejected) => true,
            (TeamStatus::Open, TeamStatus::Approved) => true,
            (TeamStatus::Open, TeamStatus::Rejected) => true,

            // Only approved teams can be locked
            (TeamStatus::Approved, TeamStatus::Locked) => true,

            // Terminal states cannot transition
            _ => false,
        }
    }
}

/// A member entry as embedded in a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// User ID
    pub id: Uuid,

    /// Display name
    pub name: String,
}

/// Team model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team ID
    pub id: Uuid,

    /// Owning event
    pub event_id: Uuid,

    /// Team name (trimmed, non-empty)
    pub name: String,

    /// Team leader (the creator, assigned server-side)
    pub leader_id: Uuid,

    /// Skills the leader is looking for (trimmed, deduplicated)
    #[serde(default)]
    pub required_skills: Vec<String>,

    /// Current members, leader included
    #[serde(default)]
    pub members: Vec<TeamMember>,

    /// Maximum member count, when the event sets one
    pub max_size: Option<u32>,

    /// Review/formation status
    pub status: TeamStatus,
}

impl Team {
    /// Current member count
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether the team is at capacity
    ///
    /// Invariant (server-enforced): member count ≤ max_size when set.
    pub fn is_full(&self) -> bool {
        match self.max_size {
            Some(max) => self.members.len() as u32 >= max,
            None => false,
        }
    }

    /// Whether the Lock action should be offered for this team
    ///
    /// Status-driven: locked teams never offer it again.
    pub fn can_lock(&self) -> bool {
        self.status.can_transition_to(TeamStatus::Locked)
    }

    /// Whether review actions (approve/reject) should be offered
    pub fn can_review(&self) -> bool {
        self.status.can_transition_to(TeamStatus::Approved)
    }
}

/// A student's request to join a team, as surfaced in the admin summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinRequest {
    /// Requesting user's display name
    pub user_name: String,

    /// Target team's name
    pub team_name: String,

    /// Request status (pending until acted on)
    pub status: JoinRequestStatus,
}

/// Join request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A student registered for an event without a team
///
/// Admins can move a solo participant into an existing team, which removes
/// them from the solo pool and adds them to the team's membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoloParticipant {
    /// Participant record ID
    pub id: Uuid,

    /// The registered user
    pub user_id: Uuid,

    /// Display name
    pub name: String,

    /// Self-reported skills
    #[serde(default)]
    pub skills: Vec<String>,

    /// When the solo application was submitted
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// Parses a comma-separated skills string into the canonical list
///
/// Entries are trimmed, empty entries dropped, and duplicates (after trim)
/// removed while preserving first-seen order. This is the client-side rule
/// for the team-creation form.
///
/// # Example
///
/// ```
/// use campuslink_shared::models::team::parse_skills;
///
/// let skills = parse_skills(" rust, design ,, rust ,ml");
/// assert_eq!(skills, vec!["rust", "design", "ml"]);
/// ```
pub fn parse_skills(input: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_string()))
        .map(str::to_string)
        .collect()
}

/// Application roles and action gating
///
/// This module provides the application-level role assigned to every profile
/// and the gating predicates the controllers use to decide which actions a
/// user may see.
///
/// # Roles
///
/// - **student**: browse events, form/join teams, apply solo, post to the feed
/// - **organizer**: manage the events they organize (teams, resources, FAQ)
/// - **club**: same management surface as organizer, for club-run events
/// - **admin**: full management surface across all events
///
/// Role resolution happens once per session change (see the role resolver in
/// the app crate); a profile without a role is a hard failure, never a
/// default.
///
/// # Example
///
/// ```
/// use campuslink_shared::roles::Role;
///
/// let role = Role::Student;
/// assert!(role.can_form_teams());
/// assert!(!role.can_manage_events());
/// ```

use serde::{Deserialize, Serialize};

/// Application role attached to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular student account
    Student,

    /// Platform administrator
    Admin,

    /// Event organizer account
    Organizer,

    /// Student club account
    Club,
}

impl Role {
    /// Converts role to string for display and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Organizer => "organizer",
            Role::Club => "club",
        }
    }

    /// Can create teams, request to join teams, and apply solo
    ///
    /// Team actions on the event detail screen are student-only; management
    /// roles are pointed at the admin dashboard instead.
    pub fn can_form_teams(&self) -> bool {
        matches!(self, Role::Student)
    }

    /// Can open the event management dashboard
    pub fn can_manage_events(&self) -> bool {
        matches!(self, Role::Admin | Role::Organizer | Role::Club)
    }

    /// Can create events and manage their content (resources, FAQ)
    pub fn can_author_events(&self) -> bool {
        matches!(self, Role::Admin | Role::Organizer | Role::Club)
    }

    /// Can post jobs (requires an approved startup on top of this)
    pub fn can_post_jobs(&self) -> bool {
        matches!(self, Role::Student | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

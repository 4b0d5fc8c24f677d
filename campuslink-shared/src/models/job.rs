/// Internship/job posting and application models
///
/// Jobs are posted by approved startup owners on the hire board. Students
/// apply; the posting owner moves applications through
/// `Applied → Shortlisted | Rejected`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internship/job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job ID
    pub id: Uuid,

    /// Role title, e.g. "Backend Intern"
    pub role_title: String,

    /// Posting startup/company
    pub company_id: Uuid,

    /// Role description
    pub description: String,

    /// Engagement type, e.g. "Internship", "Part-time"
    #[serde(rename = "type")]
    pub job_type: String,

    /// Location or "Remote"
    pub location: Option<String>,

    /// Monthly stipend, free-form (e.g. "₹10,000")
    pub stipend: Option<String>,

    /// Duration, free-form (e.g. "3 months")
    pub duration: Option<String>,

    /// Applications close at this time
    pub application_deadline: Option<DateTime<Utc>>,

    /// External application link, when applications happen off-platform
    pub external_link: Option<String>,
}

impl Job {
    /// Whether the application window is still open at `now`
    pub fn accepts_applications_at(&self, now: DateTime<Utc>) -> bool {
        match self.application_deadline {
            Some(deadline) => now <= deadline,
            None => true,
        }
    }
}

/// Application review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// A student's application to a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Unique application ID
    pub id: Uuid,

    /// Target job
    pub job_id: Uuid,

    /// Applying student
    pub applicant_id: Uuid,

    /// Review status (starts at Applied)
    pub status: ApplicationStatus,

    /// When the application was submitted
    pub applied_at: DateTime<Utc>,
}

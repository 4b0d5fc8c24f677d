/// Event FAQ entry
///
/// Question/answer pairs attached to an event. CRUD is admin-only; reads are
/// open to all roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// FAQ entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    /// Unique FAQ ID
    pub id: Uuid,

    /// Owning event
    pub event_id: Uuid,

    /// Question text (required)
    pub question: String,

    /// Answer text (required)
    pub answer: String,
}

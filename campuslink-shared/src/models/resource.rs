/// Event resource model
///
/// Resources are links attached to an event (problem statements, decks,
/// starter repos). CRUD is admin-only; reads are open to all roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resource link type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Link,
    #[serde(rename = "PDF")]
    Pdf,
    Deck,
    Github,
    Drive,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Link => "Link",
            ResourceType::Pdf => "PDF",
            ResourceType::Deck => "Deck",
            ResourceType::Github => "Github",
            ResourceType::Drive => "Drive",
        }
    }
}

/// Resource attached to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource ID
    pub id: Uuid,

    /// Owning event
    pub event_id: Uuid,

    /// Display title (required)
    pub title: String,

    /// Target URL (required)
    pub url: String,

    /// Link type
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Optional description
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_wire_values() {
        assert_eq!(serde_json::to_string(&ResourceType::Pdf).unwrap(), "\"PDF\"");
        assert_eq!(serde_json::to_string(&ResourceType::Github).unwrap(), "\"Github\"");
        let parsed: ResourceType = serde_json::from_str("\"Deck\"").unwrap();
        assert_eq!(parsed, ResourceType::Deck);
    }

    #[test]
    fn test_resource_type_field_renamed() {
        let resource = Resource {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            title: "Starter repo".to_string(),
            url: "https://github.com/campus/starter".to_string(),
            resource_type: ResourceType::Github,
            description: None,
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "Github");
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Room wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub capacity: u32,
    pub is_active: bool,
    /// ISO-8601 timestamp, passed through as-is.
    pub created_at: String,
}

impl Room {
    /// Location with the same placeholder the room list shows.
    pub fn location_label(&self) -> &str {
        self.location
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("No location info")
    }
}

/// Payload for creating a room; `PUT /rooms/{id}` takes the same shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub name: String,
    pub capacity: u32,
    pub location: String,
}

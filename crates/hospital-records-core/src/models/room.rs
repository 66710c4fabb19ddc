//! Room and room-type records.

use serde::{Deserialize, Serialize};

/// A hospital room.
///
/// `room_type_id` is required but carries no foreign key constraint in the
/// storage schema; `available` is a boolean in both projections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Unique identifier
    pub id: i64,
    /// Room type, matched by id only
    pub room_type_id: i64,
    /// Whether the room is currently available
    pub available: bool,
}

impl Room {
    pub fn new(id: i64, room_type_id: i64, available: bool) -> Self {
        Self {
            id,
            room_type_id,
            available,
        }
    }
}

/// A room classification (e.g. "ICU", "Ward").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomType {
    /// Unique identifier
    pub id: i64,
    /// Classification label, if recorded
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RoomType {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: Some(kind.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_availability_is_boolean() {
        let room = Room::new(1, 2, true);
        let json = serde_json::to_value(room).unwrap();
        assert_eq!(json["available"], true);
    }

    #[test]
    fn test_room_type_serializes_as_type() {
        let rt = RoomType::new(2, "ICU");
        let json = serde_json::to_value(&rt).unwrap();
        assert_eq!(json["type"], "ICU");
    }
}

//! Room and room-type transfer shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{require_bool, require_i64, require_text, ValidationError};

/// External representation of a room.
///
/// `available` is a boolean, matching the storage column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoomShape {
    pub id: i64,
    pub room_type_id: i64,
    pub available: bool,
}

impl RoomShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            room_type_id: require_i64(map, "room_type_id")?,
            available: require_bool(map, "available")?,
        })
    }
}

/// External representation of a room type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomTypeShape {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RoomTypeShape {
    /// Build from a raw JSON mapping (the label key is `type`).
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            kind: require_text(map, "type")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_available_is_boolean() {
        let value = json!({"id": 1, "room_type_id": 2, "available": true});
        let shape = RoomShape::from_map(value.as_object().unwrap()).unwrap();
        assert!(shape.available);
    }

    #[test]
    fn test_room_rejects_date_for_available() {
        let value = json!({"id": 1, "room_type_id": 2, "available": "2024-06-01"});
        let err = RoomShape::from_map(value.as_object().unwrap()).unwrap_err();
        assert_eq!(err.field(), "available");
    }

    #[test]
    fn test_room_type_uses_type_key() {
        let value = json!({"id": 1, "type": "ICU"});
        let shape = RoomTypeShape::from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(shape.kind, "ICU");

        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "ICU");
    }
}

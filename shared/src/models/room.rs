//! Room Model

use serde::{Deserialize, Serialize};

/// Room category as offered at the desk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Deluxe => "Deluxe",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupancy status of a room
///
/// Changes only through [`RoomStatus::apply`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RoomStatus {
    #[default]
    Vacant,
    Occupied,
}

impl RoomStatus {
    pub fn is_vacant(&self) -> bool {
        matches!(self, RoomStatus::Vacant)
    }

    /// Next status after `event`, or the rejected transition
    ///
    /// | From | Event | To |
    /// |------|-------|----|
    /// | Vacant | Book | Occupied |
    ///
    /// There is no release transition yet: a booked room stays Occupied.
    pub fn apply(self, event: RoomEvent) -> Result<RoomStatus, InvalidTransition> {
        match (self, event) {
            (RoomStatus::Vacant, RoomEvent::Book) => Ok(RoomStatus::Occupied),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }
}

/// Something that happens to a room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomEvent {
    /// A booking was committed against the room
    Book,
}

/// A room event that is not allowed from the current status
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot apply {event:?} to a room that is {from:?}")]
pub struct InvalidTransition {
    pub from: RoomStatus,
    pub event: RoomEvent,
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Rate per day
    pub price: f64,
    pub status: RoomStatus,
    #[serde(default)]
    pub floor: i32,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

fn default_capacity() -> i32 {
    1
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price: f64,
    pub floor: Option<i32>,
    pub capacity: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&RoomStatus::Vacant).unwrap(),
            "\"Vacant\""
        );
        assert_eq!(
            serde_json::to_string(&RoomStatus::Occupied).unwrap(),
            "\"Occupied\""
        );
    }

    #[test]
    fn test_book_moves_vacant_to_occupied() {
        assert_eq!(
            RoomStatus::Vacant.apply(RoomEvent::Book),
            Ok(RoomStatus::Occupied)
        );
    }

    #[test]
    fn test_book_rejected_on_occupied_room() {
        let err = RoomStatus::Occupied.apply(RoomEvent::Book).unwrap_err();
        assert_eq!(err.from, RoomStatus::Occupied);
        assert_eq!(err.event, RoomEvent::Book);
    }

    #[test]
    fn test_room_defaults_missing_display_fields() {
        let json = r#"{"id":1,"room_number":"101","type":"Single","price":1000.0,"status":"Vacant"}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.floor, 0);
        assert_eq!(room.capacity, 1);
        assert!(room.amenities.is_empty());
        assert!(room.status.is_vacant());
    }
}

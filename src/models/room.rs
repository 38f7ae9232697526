//! Room model.
//!
//! Rooms are the spatial resource of a timetable. Each has a seat capacity
//! and belongs to a building; building membership matters for back-to-back
//! sessions that require walking between distant buildings.

use serde::{Deserialize, Serialize};

/// A room activities can be placed in.
///
/// Two rooms are the same room when all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Room name (e.g. "Slater 003").
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Building the room is located in.
    pub building: String,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, capacity: u32, building: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity,
            building: building.into(),
        }
    }

    /// Whether the room is located in any of the given buildings.
    pub fn in_any_building<S: AsRef<str>>(&self, buildings: &[S]) -> bool {
        buildings.iter().any(|b| b.as_ref() == self.building)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_new() {
        let room = Room::new("Beach 201", 60, "Beach");
        assert_eq!(room.name, "Beach 201");
        assert_eq!(room.capacity, 60);
        assert_eq!(room.building, "Beach");
    }

    #[test]
    fn test_in_any_building() {
        let room = Room::new("Roman 216", 30, "Roman");
        assert!(room.in_any_building(&["Roman", "Beach"]));
        assert!(!room.in_any_building(&["Loft"]));
        assert!(!room.in_any_building::<&str>(&[]));
    }

    #[test]
    fn test_room_equality() {
        assert_eq!(Room::new("Loft 206", 75, "Loft"), Room::new("Loft 206", 75, "Loft"));
        assert_ne!(Room::new("Loft 206", 75, "Loft"), Room::new("Loft 310", 108, "Loft"));
    }
}

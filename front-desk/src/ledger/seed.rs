//! Standard room inventory
//!
//! | Floor | Numbers | Type | Rate | Capacity |
//! |-------|---------|------|------|----------|
//! | 1 | 101-108 | Single | 1500 | 1 |
//! | 2 | 201-208 | Double | 2500 | 2 |
//! | 3 | 301-308 | Deluxe | 3500 | 4 |

use shared::models::{RoomCreate, RoomType};

pub const ROOMS_PER_FLOOR: i32 = 8;

struct FloorPlan {
    floor: i32,
    room_type: RoomType,
    price: f64,
    capacity: i32,
    amenities: &'static [&'static str],
}

const FLOORS: [FloorPlan; 3] = [
    FloorPlan {
        floor: 1,
        room_type: RoomType::Single,
        price: 1500.0,
        capacity: 1,
        amenities: &["AC", "WiFi", "TV", "Bathroom"],
    },
    FloorPlan {
        floor: 2,
        room_type: RoomType::Double,
        price: 2500.0,
        capacity: 2,
        amenities: &["AC", "WiFi", "TV", "Bathroom", "Mini Fridge"],
    },
    FloorPlan {
        floor: 3,
        room_type: RoomType::Deluxe,
        price: 3500.0,
        capacity: 4,
        amenities: &[
            "AC",
            "WiFi",
            "TV",
            "Bathroom",
            "Mini Fridge",
            "Balcony",
            "Room Service",
        ],
    },
];

/// Room definitions for the standard inventory, floor by floor
pub fn standard_rooms() -> Vec<RoomCreate> {
    FLOORS
        .iter()
        .flat_map(|plan| {
            (1..=ROOMS_PER_FLOOR).map(move |i| RoomCreate {
                room_number: (plan.floor * 100 + i).to_string(),
                room_type: plan.room_type,
                price: plan.price,
                floor: Some(plan.floor),
                capacity: Some(plan.capacity),
                amenities: plan.amenities.iter().map(|a| a.to_string()).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_inventory_layout() {
        let rooms = standard_rooms();
        assert_eq!(rooms.len(), 24);

        assert_eq!(rooms[0].room_number, "101");
        assert_eq!(rooms[7].room_number, "108");
        assert_eq!(rooms[8].room_number, "201");
        assert_eq!(rooms[8].room_type, RoomType::Double);
        assert_eq!(rooms[23].room_number, "308");
        assert_eq!(rooms[23].price, 3500.0);
        assert_eq!(rooms[23].capacity, Some(4));
        assert!(rooms[23].amenities.contains(&"Balcony".to_string()));
    }
}

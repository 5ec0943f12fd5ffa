use crate::ship::{ShipKind, ShipSpec};

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order. Every kind-dependent lookup goes through this table.
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new(ShipKind::Carrier, "Aircraft Carrier", 5),
    ShipSpec::new(ShipKind::Battleship, "Battleship", 4),
    ShipSpec::new(ShipKind::Cruiser, "Cruiser", 3),
    ShipSpec::new(ShipKind::Submarine, "Submarine", 3),
    ShipSpec::new(ShipKind::Destroyer, "Destroyer", 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

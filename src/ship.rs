//! Ship kinds, their fixed specifications and per-ship damage bookkeeping.

use core::fmt;

use crate::config::{FLEET, NUM_SHIPS};

/// One of the five ships of the classic fleet.
///
/// Declaration order is the placement order and the order in which sunk
/// ships are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// All kinds in placement order.
    pub const ALL: [ShipKind; NUM_SHIPS] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Position of this kind in the fleet table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Static specification for this kind.
    pub const fn spec(self) -> ShipSpec {
        FLEET[self.index()]
    }

    /// Display name, e.g. "Aircraft Carrier".
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        self.spec().length
    }

    /// Kind placed after this one, if any.
    pub fn next(self) -> Option<ShipKind> {
        ShipKind::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind, name and length of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    kind: ShipKind,
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    pub const fn new(kind: ShipKind, name: &'static str, length: usize) -> Self {
        Self { kind, name, length }
    }

    pub const fn kind(&self) -> ShipKind {
        self.kind
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// Damage state of one ship on a battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipStatus {
    /// Segments not hit yet.
    pub remaining: usize,
    /// Set once the sinking has been announced.
    pub reported_sunk: bool,
    /// Whether the ship has been put on the grid.
    pub placed: bool,
}

impl ShipStatus {
    pub const fn new(kind: ShipKind) -> Self {
        Self {
            remaining: kind.length(),
            reported_sunk: false,
            placed: false,
        }
    }

    /// All segments have been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }
}

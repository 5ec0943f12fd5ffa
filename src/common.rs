//! Common types: battlefield errors and shot results.

use core::fmt;

use crate::ship::ShipKind;

/// Raw effect of a single shot on the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Hit,
    Miss,
}

/// What the shooter is told after a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot landed in water.
    Miss,
    /// A ship lost its last segment, carrying its kind.
    Sunk(ShipKind),
    /// The whole fleet is gone; the shooter won.
    FleetDestroyed,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "You hit a ship!"),
            ShotOutcome::Miss => write!(f, "You missed!"),
            ShotOutcome::Sunk(_) => write!(f, "You sank a ship!"),
            ShotOutcome::FleetDestroyed => {
                write!(f, "You sank the last ship. You won. Congratulations!")
            }
        }
    }
}

/// Errors returned by battlefield and game operations.
///
/// All of them are recoverable: the caller reports the message and asks for
/// new input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlefieldError {
    /// Malformed coordinate token or wrong number of tokens.
    CoordinateFormat,
    /// Ship is neither horizontal nor vertical.
    Location,
    /// Span length does not match the ship being placed.
    Length(ShipKind),
    /// Span touches another ship or its buffer.
    Adjacency,
    /// Ship of this kind is already on the grid.
    ShipAlreadyPlaced(ShipKind),
    /// No legal random spot was found.
    UnableToPlaceShip(ShipKind),
    /// Both fleets are placed; ships can no longer be added.
    PlacementClosed,
    /// Shots are only accepted once both fleets are placed.
    CombatNotStarted,
    /// A fleet has been destroyed already.
    GameOver,
}

impl fmt::Display for BattlefieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattlefieldError::CoordinateFormat => write!(f, "You entered the wrong coordinates"),
            BattlefieldError::Location => write!(f, "Wrong ship location"),
            BattlefieldError::Length(kind) => write!(f, "Wrong length of the {}", kind),
            BattlefieldError::Adjacency => write!(f, "You placed it too close to another one"),
            BattlefieldError::ShipAlreadyPlaced(kind) => {
                write!(f, "The {} is already on the field", kind)
            }
            BattlefieldError::UnableToPlaceShip(kind) => {
                write!(f, "No free spot left for the {}", kind)
            }
            BattlefieldError::PlacementClosed => write!(f, "All ships are already placed"),
            BattlefieldError::CombatNotStarted => write!(f, "Ships are still being placed"),
            BattlefieldError::GameOver => write!(f, "The game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BattlefieldError {}

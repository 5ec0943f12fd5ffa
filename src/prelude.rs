//! Commonly used types and utilities for ease of import.

pub use crate::{Battlefield, BattlefieldError, Coordinate, Game, GamePhase, ShipKind, ShotOutcome};

#[cfg(feature = "std")]
pub use crate::{init_logging, Console};

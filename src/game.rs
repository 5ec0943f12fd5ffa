//! Two-player hot-seat game: placement phase followed by alternating shots.

use alloc::string::String;
use rand::Rng;

use crate::battlefield::Battlefield;
use crate::common::{BattlefieldError, ShotOutcome};
use crate::coordinate::{parse_span, Coordinate};
use crate::ship::ShipKind;

/// Number of players sharing the game.
pub const PLAYERS: usize = 2;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// `player` must place `ship` next.
    Placement { player: usize, ship: ShipKind },
    /// `attacker` shoots at the other player's battlefield.
    Combat { attacker: usize },
    /// `winner` destroyed the opposing fleet.
    Finished { winner: usize },
}

/// Both battlefields and the turn state tying them together.
#[derive(Debug, Clone)]
pub struct Game {
    fields: [Battlefield; PLAYERS],
    phase: GamePhase,
}

impl Game {
    /// Start a game; `first` places ships and shoots first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            fields: [Battlefield::new(first), Battlefield::new(second)],
            phase: GamePhase::Placement {
                player: 0,
                ship: ShipKind::Carrier,
            },
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Battlefield owned by `player` (0 or 1).
    pub fn battlefield(&self, player: usize) -> &Battlefield {
        &self.fields[player]
    }

    /// Player expected to act, if the game is still running.
    pub fn current_player(&self) -> Option<usize> {
        match self.phase {
            GamePhase::Placement { player, .. } => Some(player),
            GamePhase::Combat { attacker } => Some(attacker),
            GamePhase::Finished { .. } => None,
        }
    }

    /// The winning player once a fleet has been destroyed.
    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Place the current player's next ship from a line such as `A1 A5`.
    pub fn place_ship(&mut self, line: &str) -> Result<ShipKind, BattlefieldError> {
        let (player, ship) = self.placement_turn()?;
        let (begin, end) = parse_span(line)?;
        self.fields[player].place_ship(ship, begin, end)?;
        self.advance_placement(player, ship);
        Ok(ship)
    }

    /// Place the current player's next ship at a random legal spot.
    pub fn place_ship_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(ShipKind, Coordinate, Coordinate), BattlefieldError> {
        let (player, ship) = self.placement_turn()?;
        let (begin, end) = self.fields[player].place_randomly(rng, ship)?;
        self.advance_placement(player, ship);
        Ok((ship, begin, end))
    }

    /// Shoot at the opponent of the current attacker.
    ///
    /// Turns alternate after every shot, hit or miss.
    pub fn fire(&mut self, token: &str) -> Result<ShotOutcome, BattlefieldError> {
        let attacker = match self.phase {
            GamePhase::Placement { .. } => return Err(BattlefieldError::CombatNotStarted),
            GamePhase::Combat { attacker } => attacker,
            GamePhase::Finished { .. } => return Err(BattlefieldError::GameOver),
        };
        let at = Coordinate::parse(token)?;
        let target = opponent(attacker);
        let outcome = self.fields[target].shoot(at);
        self.phase = if self.fields[target].is_alive() {
            GamePhase::Combat { attacker: target }
        } else {
            log::info!("{} wins", self.fields[attacker].name());
            GamePhase::Finished { winner: attacker }
        };
        Ok(outcome)
    }

    fn placement_turn(&self) -> Result<(usize, ShipKind), BattlefieldError> {
        match self.phase {
            GamePhase::Placement { player, ship } => Ok((player, ship)),
            GamePhase::Combat { .. } => Err(BattlefieldError::PlacementClosed),
            GamePhase::Finished { .. } => Err(BattlefieldError::GameOver),
        }
    }

    fn advance_placement(&mut self, player: usize, ship: ShipKind) {
        self.phase = match (ship.next(), player + 1 < PLAYERS) {
            (Some(next), _) => GamePhase::Placement { player, ship: next },
            (None, true) => GamePhase::Placement {
                player: player + 1,
                ship: ShipKind::Carrier,
            },
            (None, false) => GamePhase::Combat { attacker: 0 },
        };
    }
}

/// The other player.
pub fn opponent(player: usize) -> usize {
    (player + 1) % PLAYERS
}

//! One player's grid and fleet: ship placement, shot resolution and
//! destruction tracking.

use alloc::string::String;
use core::fmt;
use rand::Rng;

use crate::common::{BattlefieldError, Shot, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::coordinate::{parse_span, Coordinate};
use crate::ship::{ShipKind, ShipStatus};
use crate::view::FieldView;

const SIZE: usize = BOARD_SIZE as usize;

/// Upper bound on random spots tried before giving up on a ship.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 500;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water.
    Empty,
    /// Water bordering a ship; no other ship may be placed here.
    Restricted,
    /// Intact part of a ship.
    ShipSegment(ShipKind),
    /// Ship segment that has been shot.
    Hit,
    /// Water that has been shot.
    Miss,
}

impl CellState {
    /// Whether a new ship may not cover this cell.
    fn blocks_placement(self) -> bool {
        matches!(
            self,
            CellState::Restricted | CellState::ShipSegment(_) | CellState::Hit
        )
    }
}

/// A player's private grid together with the state of their fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct Battlefield {
    name: String,
    cells: [[CellState; SIZE]; SIZE],
    ships: [ShipStatus; NUM_SHIPS],
    last_shot: Option<Shot>,
    alive: bool,
}

impl Battlefield {
    /// Create an empty battlefield labelled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Battlefield {
            name: name.into(),
            cells: [[CellState::Empty; SIZE]; SIZE],
            ships: ShipKind::ALL.map(ShipStatus::new),
            last_shot: None,
            alive: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// State of the cell at `at`.
    pub fn cell(&self, at: Coordinate) -> CellState {
        let (r, c) = at.index();
        self.cells[r][c]
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (Coordinate::from_index(r, c), cell))
        })
    }

    /// Damage state of one ship.
    pub fn ship_status(&self, kind: ShipKind) -> ShipStatus {
        self.ships[kind.index()]
    }

    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.ships[kind.index()].placed
    }

    /// All five ships are on the grid.
    pub fn fleet_placed(&self) -> bool {
        self.ships.iter().all(|s| s.placed)
    }

    /// Ship segments not yet hit, across the whole fleet.
    pub fn segments_remaining(&self) -> usize {
        self.ships.iter().map(|s| s.remaining).sum()
    }

    /// `false` once the fleet-destroyed outcome has been produced.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Render helper; ships are only drawn when `reveal` is set.
    pub fn view(&self, reveal: bool) -> FieldView<'_> {
        FieldView::new(self, reveal)
    }

    /// Place `kind` on the span between `begin` and `end` inclusive.
    ///
    /// Checks run in a fixed order: straightness, length, clearance. The
    /// endpoints may be given in either order.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        begin: Coordinate,
        end: Coordinate,
    ) -> Result<(), BattlefieldError> {
        if self.is_placed(kind) {
            return Err(BattlefieldError::ShipAlreadyPlaced(kind));
        }
        if begin.row() != end.row() && begin.col() != end.col() {
            return Err(BattlefieldError::Location);
        }
        let (begin, end) = if begin.row() > end.row() || begin.col() > end.col() {
            (end, begin)
        } else {
            (begin, end)
        };
        let (r0, c0) = begin.index();
        let (r1, c1) = end.index();
        let length = (r1 - r0) + (c1 - c0) + 1;
        if length != kind.length() {
            return Err(BattlefieldError::Length(kind));
        }
        if (r0..=r1).any(|r| (c0..=c1).any(|c| self.cells[r][c].blocks_placement())) {
            return Err(BattlefieldError::Adjacency);
        }

        for r in r0..=r1 {
            for c in c0..=c1 {
                self.cells[r][c] = CellState::ShipSegment(kind);
            }
        }
        // one-cell border, clipped at the grid edge; only open water changes
        for r in r0.saturating_sub(1)..=(r1 + 1).min(SIZE - 1) {
            for c in c0.saturating_sub(1)..=(c1 + 1).min(SIZE - 1) {
                if self.cells[r][c] == CellState::Empty {
                    self.cells[r][c] = CellState::Restricted;
                }
            }
        }
        self.ships[kind.index()].placed = true;
        log::debug!("{}: placed {} at {} {}", self.name, kind, begin, end);
        Ok(())
    }

    /// Parse a placement line such as `A1 A5` and place `kind` there.
    pub fn place_ship_str(&mut self, kind: ShipKind, line: &str) -> Result<(), BattlefieldError> {
        let (begin, end) = parse_span(line)?;
        self.place_ship(kind, begin, end)
    }

    /// Find a legal span for `kind` without placing it.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(Coordinate, Coordinate), BattlefieldError> {
        if self.is_placed(kind) {
            return Err(BattlefieldError::ShipAlreadyPlaced(kind));
        }
        let span = kind.length() - 1;
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let horizontal: bool = rng.random();
            let (max_r, max_c) = if horizontal {
                (SIZE - 1, SIZE - 1 - span)
            } else {
                (SIZE - 1 - span, SIZE - 1)
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let (er, ec) = if horizontal { (r, c + span) } else { (r + span, c) };
            let clear = (r..=er).all(|r| (c..=ec).all(|c| !self.cells[r][c].blocks_placement()));
            if clear {
                return Ok((Coordinate::from_index(r, c), Coordinate::from_index(er, ec)));
            }
        }
        Err(BattlefieldError::UnableToPlaceShip(kind))
    }

    /// Place `kind` at a random legal spot and return the chosen span.
    pub fn place_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(Coordinate, Coordinate), BattlefieldError> {
        let (begin, end) = self.random_placement(rng, kind)?;
        self.place_ship(kind, begin, end)?;
        Ok((begin, end))
    }

    /// Shoot at `at`, updating the cell and the struck ship.
    ///
    /// Shooting a cell twice repeats the earlier result and leaves the fleet
    /// untouched.
    pub fn fire(&mut self, at: Coordinate) -> Shot {
        let (r, c) = at.index();
        let shot = match self.cells[r][c] {
            CellState::ShipSegment(kind) => {
                self.cells[r][c] = CellState::Hit;
                let ship = &mut self.ships[kind.index()];
                ship.remaining = ship.remaining.saturating_sub(1);
                Shot::Hit
            }
            CellState::Hit => Shot::Hit,
            CellState::Empty | CellState::Restricted | CellState::Miss => {
                self.cells[r][c] = CellState::Miss;
                Shot::Miss
            }
        };
        log::debug!("{}: shot at {} -> {:?}", self.name, at, shot);
        self.last_shot = Some(shot);
        shot
    }

    /// Parse `token` and shoot at it.
    pub fn fire_str(&mut self, token: &str) -> Result<Shot, BattlefieldError> {
        Ok(self.fire(Coordinate::parse(token)?))
    }

    /// Outcome to announce for the latest shot, or `None` before any shot.
    ///
    /// Priority: fleet destroyed, then the first newly sunk ship in fleet
    /// order, then the plain hit or miss. A sunk ship is announced once.
    pub fn outcome(&mut self) -> Option<ShotOutcome> {
        let shot = self.last_shot?;
        Some(self.evaluate(shot))
    }

    /// Shoot at `at` and return the outcome to announce.
    pub fn shoot(&mut self, at: Coordinate) -> ShotOutcome {
        let shot = self.fire(at);
        self.evaluate(shot)
    }

    fn evaluate(&mut self, shot: Shot) -> ShotOutcome {
        if self.ships.iter().all(ShipStatus::is_sunk) {
            if self.alive {
                log::info!("{}: fleet destroyed", self.name);
            }
            self.alive = false;
            return ShotOutcome::FleetDestroyed;
        }
        let newly_sunk = ShipKind::ALL
            .into_iter()
            .find(|kind| {
                let ship = &self.ships[kind.index()];
                ship.is_sunk() && !ship.reported_sunk
            });
        if let Some(kind) = newly_sunk {
            self.ships[kind.index()].reported_sunk = true;
            log::info!("{}: {} sunk", self.name, kind);
            return ShotOutcome::Sunk(kind);
        }
        match shot {
            Shot::Hit => ShotOutcome::Hit,
            Shot::Miss => ShotOutcome::Miss,
        }
    }
}

impl fmt::Debug for Battlefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Battlefield {{ name: {:?}, alive: {}, last_shot: {:?}, ships: {:?} }}",
            self.name, self.alive, self.last_shot, self.ships
        )?;
        write!(f, "{}", self.view(true))
    }
}

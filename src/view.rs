//! Text rendering of a battlefield.
//!
//! ```text
//!   1 2 3 4 5 6 7 8 9 10
//! A O O ~ ~ ~ ~ ~ ~ ~ ~
//! B ~ ~ ~ M ~ ~ ~ ~ ~ ~
//! ```

use core::fmt;

use crate::battlefield::{Battlefield, CellState};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Borrowed view of a battlefield, with or without the owner's ships.
pub struct FieldView<'a> {
    field: &'a Battlefield,
    reveal: bool,
}

impl<'a> FieldView<'a> {
    pub fn new(field: &'a Battlefield, reveal: bool) -> Self {
        Self { field, reveal }
    }
}

/// Symbol for a cell; ships are fog unless `reveal` is set.
pub fn cell_symbol(cell: CellState, reveal: bool) -> char {
    match cell {
        CellState::Empty | CellState::Restricted => '~',
        CellState::ShipSegment(_) if reveal => 'O',
        CellState::ShipSegment(_) => '~',
        CellState::Hit => 'X',
        CellState::Miss => 'M',
    }
}

impl fmt::Display for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 1..=BOARD_SIZE {
            write!(f, "{}", (b'A' + row - 1) as char)?;
            for col in 1..=BOARD_SIZE {
                let at = Coordinate::new(row, col).map_err(|_| fmt::Error)?;
                write!(f, " {}", cell_symbol(self.field.cell(at), self.reveal))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

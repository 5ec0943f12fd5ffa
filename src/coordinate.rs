//! Grid coordinates and their text notation (`A1` .. `J10`).

use core::fmt;
use core::str::FromStr;

use crate::common::BattlefieldError;
use crate::config::BOARD_SIZE;

/// A cell on the grid. Row and column are 1-based: row `1` is `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate, rejecting anything outside `1..=10`.
    pub fn new(row: u8, col: u8) -> Result<Self, BattlefieldError> {
        if (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col) {
            Ok(Self { row, col })
        } else {
            Err(BattlefieldError::CoordinateFormat)
        }
    }

    /// Parse a token such as `B7` or `j10`.
    ///
    /// The letter is case-insensitive. The number must be `1`..`9` or `10`
    /// with nothing before or after it.
    pub fn parse(token: &str) -> Result<Self, BattlefieldError> {
        let mut chars = token.chars();
        let letter = chars
            .next()
            .ok_or(BattlefieldError::CoordinateFormat)?
            .to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(BattlefieldError::CoordinateFormat);
        }
        let digits = chars.as_str();
        let well_formed = (1..=2).contains(&digits.len())
            && digits.bytes().all(|b| b.is_ascii_digit())
            && !digits.starts_with('0');
        if !well_formed {
            return Err(BattlefieldError::CoordinateFormat);
        }
        let col: u8 = digits
            .parse()
            .map_err(|_| BattlefieldError::CoordinateFormat)?;
        let row = letter as u8 - b'A' + 1;
        Self::new(row, col)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Zero-based (row, col) index into the grid.
    pub(crate) fn index(&self) -> (usize, usize) {
        (self.row as usize - 1, self.col as usize - 1)
    }

    pub(crate) fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: row as u8 + 1,
            col: col as u8 + 1,
        }
    }
}

impl FromStr for Coordinate {
    type Err = BattlefieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row - 1) as char, self.col)
    }
}

/// Split a placement line such as `A1 A5` into its two endpoints.
///
/// Exactly two tokens separated by a single space are accepted.
pub fn parse_span(line: &str) -> Result<(Coordinate, Coordinate), BattlefieldError> {
    let mut parts = line.split(' ');
    let (Some(begin), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BattlefieldError::CoordinateFormat);
    };
    Ok((Coordinate::parse(begin)?, Coordinate::parse(end)?))
}

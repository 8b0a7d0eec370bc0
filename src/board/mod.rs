//! Board topology: cells, the static layout, and the winning lines.
//!
//! The board is a fixed 10×10 grid addressed by a 0..=99 row-major index.
//! Externally a cell travels as a `"row,col"` string (0-based); the two forms
//! convert losslessly in both directions.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod layout;
pub mod lines;

pub use layout::{cell_kind, positions_for, CellKind};
pub use lines::{all_lines, lines_through, Line, Orientation, LINE_LEN};

/// Board side length.
pub const GRID: u8 = 10;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (GRID as usize) * (GRID as usize);

/// A board cell, identified by its row-major index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

/// The four wild corners.
pub const CORNERS: [Cell; 4] = [Cell(0), Cell(9), Cell(90), Cell(99)];

impl Cell {
    /// Cell from a raw row-major index. Panics if out of range.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index out of range: {index}");
        Self(index as u8)
    }

    /// Cell from row and column. Panics if out of range.
    #[must_use]
    pub fn at(row: u8, col: u8) -> Self {
        assert!(row < GRID && col < GRID, "cell out of range: {row},{col}");
        Self(row * GRID + col)
    }

    /// Row-major index, 0..=99.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / GRID
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % GRID
    }

    /// One of the four fixed wild corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(self.0, 0 | 9 | 90 | 99)
    }

    /// Iterate every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}

/// Failure to parse a `"row,col"` coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed coordinate: {0:?}")]
pub struct ParseCoordError(pub String);

impl FromStr for Cell {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseCoordError(s.to_owned());
        let (row, col) = s.split_once(',').ok_or_else(bad)?;
        let row: u8 = row.trim().parse().map_err(|_| bad())?;
        let col: u8 = col.trim().parse().map_err(|_| bad())?;
        if row >= GRID || col >= GRID {
            return Err(bad());
        }
        Ok(Cell::at(row, col))
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

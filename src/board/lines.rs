//! Precomputed winning lines.
//!
//! Every run of five consecutive cells in the four orientations, in the
//! canonical enumeration order: all horizontals, then all verticals, then
//! both diagonal families, each ordered by row then column. The greedy
//! sequence-acceptance pass is order-dependent, so every code path (preview
//! and authority alike) must walk lines in exactly this order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Cell, CELL_COUNT, GRID};

/// Cells per winning line.
pub const LINE_LEN: usize = 5;

/// Line orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

/// A winning line: five cells in one orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub cells: [Cell; LINE_LEN],
    pub orientation: Orientation,
}

impl Line {
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The line's cells minus the wild corners.
    pub fn non_corner_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied().filter(|c| !c.is_corner())
    }
}

fn line(orientation: Orientation, start_row: u8, start_col: u8, dr: i8, dc: i8) -> Line {
    let mut cells = [Cell::at(0, 0); LINE_LEN];
    for (step, slot) in cells.iter_mut().enumerate() {
        let row = (start_row as i8 + dr * step as i8) as u8;
        let col = (start_col as i8 + dc * step as i8) as u8;
        *slot = Cell::at(row, col);
    }
    Line { cells, orientation }
}

static ALL_LINES: Lazy<Vec<Line>> = Lazy::new(|| {
    let span = GRID - LINE_LEN as u8; // last valid start offset, inclusive
    let mut lines = Vec::with_capacity(192);
    for r in 0..GRID {
        for c in 0..=span {
            lines.push(line(Orientation::Horizontal, r, c, 0, 1));
        }
    }
    for c in 0..GRID {
        for r in 0..=span {
            lines.push(line(Orientation::Vertical, r, c, 1, 0));
        }
    }
    for r in 0..=span {
        for c in 0..=span {
            lines.push(line(Orientation::DiagonalDown, r, c, 1, 1));
        }
    }
    for r in (LINE_LEN as u8 - 1)..GRID {
        for c in 0..=span {
            lines.push(line(Orientation::DiagonalUp, r, c, -1, 1));
        }
    }
    lines
});

static LINES_BY_CELL: Lazy<Vec<SmallVec<[u16; 20]>>> = Lazy::new(|| {
    let mut by_cell: Vec<SmallVec<[u16; 20]>> = vec![SmallVec::new(); CELL_COUNT];
    for (i, line) in ALL_LINES.iter().enumerate() {
        for cell in line.cells {
            by_cell[cell.index()].push(i as u16);
        }
    }
    by_cell
});

/// All winning lines in canonical enumeration order.
#[must_use]
pub fn all_lines() -> &'static [Line] {
    &ALL_LINES
}

/// Lines that pass through a cell, in canonical order.
pub fn lines_through(cell: Cell) -> impl Iterator<Item = &'static Line> {
    LINES_BY_CELL[cell.index()]
        .iter()
        .map(|&i| &ALL_LINES[i as usize])
}

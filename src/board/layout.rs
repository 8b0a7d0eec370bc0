//! The static cell layout.
//!
//! Fixed for the lifetime of the process: four wild corners, and each
//! non-jack card printed on exactly two cells. Jacks are never printed,
//! which is what gives them their special powers.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Cell;
use crate::cards::{Card, Rank, Suit};

/// What is printed on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "card")]
pub enum CellKind {
    /// Wild corner: matches any team's sequence, never occupied or removed.
    Wild,
    /// A printed card cell.
    Card(Card),
}

const fn c(rank: Rank, suit: Suit) -> CellKind {
    CellKind::Card(Card::new(rank, suit))
}

use Rank::{Ace as RA, Eight as R8, Five as R5, Four as R4, King as RK, Nine as R9, Queen as RQ, Seven as R7, Six as R6, Ten as R10, Three as R3, Two as R2};
use Suit::{Club as SC, Diamond as SD, Heart as SH, Spade as SS};

/// The 100-cell board, row-major.
#[rustfmt::skip]
pub const LAYOUT: [CellKind; 100] = [
    // row 0
    CellKind::Wild, c(R6, SD), c(R7, SD), c(R8, SD), c(R9, SD), c(R10, SD), c(RQ, SD), c(RK, SD), c(RA, SD), CellKind::Wild,
    // row 1
    c(R5, SD), c(R3, SH), c(R2, SH), c(R2, SS), c(R3, SS), c(R4, SS), c(R5, SS), c(R6, SS), c(R7, SS), c(RA, SC),
    // row 2
    c(R4, SD), c(R4, SH), c(RK, SD), c(RA, SD), c(RA, SC), c(RK, SC), c(RQ, SC), c(R10, SC), c(R8, SS), c(RK, SC),
    // row 3
    c(R3, SD), c(R5, SH), c(RQ, SD), c(RQ, SH), c(R10, SH), c(R9, SH), c(R8, SH), c(R9, SC), c(R9, SS), c(RQ, SC),
    // row 4
    c(R2, SD), c(R6, SH), c(R10, SD), c(RK, SH), c(R3, SH), c(R2, SH), c(R7, SH), c(R8, SC), c(R10, SS), c(R10, SC),
    // row 5
    c(RA, SS), c(R7, SH), c(R9, SD), c(RA, SH), c(R4, SH), c(R5, SH), c(R6, SH), c(R7, SC), c(RQ, SS), c(R9, SC),
    // row 6
    c(RK, SS), c(R8, SH), c(R8, SD), c(R2, SC), c(R3, SC), c(R4, SC), c(R5, SC), c(R6, SC), c(RK, SS), c(R8, SC),
    // row 7
    c(RQ, SS), c(R9, SH), c(R7, SD), c(R6, SD), c(R5, SD), c(R4, SD), c(R3, SD), c(R2, SD), c(RA, SS), c(R7, SC),
    // row 8
    c(R10, SS), c(R10, SH), c(RQ, SH), c(RK, SH), c(RA, SH), c(R2, SC), c(R3, SC), c(R4, SC), c(R5, SC), c(R6, SC),
    // row 9
    CellKind::Wild, c(R9, SS), c(R8, SS), c(R7, SS), c(R6, SS), c(R5, SS), c(R4, SS), c(R3, SS), c(R2, SS), CellKind::Wild,
];

/// What is printed on a cell.
#[must_use]
pub fn cell_kind(cell: Cell) -> CellKind {
    LAYOUT[cell.index()]
}

static CARD_POSITIONS: Lazy<FxHashMap<Card, SmallVec<[Cell; 2]>>> = Lazy::new(|| {
    let mut index: FxHashMap<Card, SmallVec<[Cell; 2]>> = FxHashMap::default();
    for cell in Cell::all() {
        if let CellKind::Card(card) = cell_kind(cell) {
            index.entry(card).or_default().push(cell);
        }
    }
    index
});

/// Board cells printed with this card, in index order. Empty for jacks.
#[must_use]
pub fn positions_for(card: Card) -> &'static [Cell] {
    CARD_POSITIONS.get(&card).map_or(&[], |cells| cells.as_slice())
}

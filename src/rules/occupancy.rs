//! Occupancy: the derived cell→owner mapping.
//!
//! Never stored. Always a pure fold over the move log, so any party holding
//! the log derives the identical board. The four corners are forced to the
//! synthetic corner owner no matter what the log says, which makes them
//! permanently matchable by every team and immune to removal.

use rustc_hash::FxHashMap;

use crate::board::{Cell, CORNERS};
use crate::core::player::{ChipOwner, Team};
use crate::core::state::{Move, MoveKind, MoveLog};

/// Derived cell→owner mapping.
pub type Occupancy = FxHashMap<Cell, ChipOwner>;

/// Fold a move log into an occupancy, in log order.
///
/// `place` sets the mover's team, `remove` clears; `dead` and `timeout`
/// leave the board untouched. Corners are forced last.
#[must_use]
pub fn occupancy_from(log: &MoveLog) -> Occupancy {
    let mut occ = Occupancy::default();
    for mv in log {
        apply_to_occupancy(&mut occ, mv);
    }
    force_corners(&mut occ);
    occ
}

/// Apply one move to an occupancy under construction.
fn apply_to_occupancy(occ: &mut Occupancy, mv: &Move) {
    match (mv.kind, mv.coord) {
        (MoveKind::Place, Some(cell)) => {
            occ.insert(cell, ChipOwner::Team(mv.team));
        }
        (MoveKind::Remove, Some(cell)) => {
            occ.remove(&cell);
        }
        _ => {}
    }
}

/// Force the four wild corners to the synthetic corner owner.
pub fn force_corners(occ: &mut Occupancy) {
    for corner in CORNERS {
        occ.insert(corner, ChipOwner::Corner);
    }
}

/// The team holding a cell, if any real team does.
#[must_use]
pub fn team_at(occ: &Occupancy, cell: Cell) -> Option<Team> {
    occ.get(&cell).and_then(|owner| owner.team())
}

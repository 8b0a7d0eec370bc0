//! Sequence detection under the one-shared-chip rule.
//!
//! A line is *complete* for a team when every non-corner cell on it carries
//! that team's chip (corners always match). A complete line is *accepted*
//! when it shares at most one non-corner cell with previously accepted
//! lines. Acceptance is a greedy pass in the canonical line order: which
//! line claims a shared cell is decided by that order, so preview and
//! authority must walk lines identically or their verdicts diverge.

use rustc_hash::FxHashSet;

use super::occupancy::{team_at, Occupancy};
use crate::board::{all_lines, Cell, Line};
use crate::core::player::Team;

/// Whether every non-corner cell of a line carries `team`'s chip.
fn line_complete(occ: &Occupancy, line: &Line, team: Team) -> bool {
    line.non_corner_cells()
        .all(|cell| team_at(occ, cell) == Some(team))
}

/// All complete lines for a team, in canonical order (no overlap rule).
#[must_use]
pub fn complete_lines(occ: &Occupancy, team: Team) -> Vec<&'static Line> {
    all_lines()
        .iter()
        .filter(|line| line_complete(occ, line, team))
        .collect()
}

/// Greedily accept complete lines under the one-shared-chip rule.
///
/// Walks the canonical order keeping a `used` set of non-corner cells
/// consumed by accepted lines; a complete line is accepted iff it overlaps
/// `used` in at most one cell, and then contributes its own cells to `used`.
#[must_use]
pub fn accepted_lines(occ: &Occupancy, team: Team) -> Vec<&'static Line> {
    let mut used: FxHashSet<Cell> = FxHashSet::default();
    let mut accepted = Vec::new();
    for line in all_lines() {
        if !line_complete(occ, line, team) {
            continue;
        }
        if try_accept(line, &mut used) {
            accepted.push(line);
        }
    }
    accepted
}

/// Accept `line` against `used` if it shares at most one cell; on success,
/// its non-corner cells join `used`.
fn try_accept(line: &Line, used: &mut FxHashSet<Cell>) -> bool {
    let overlap = line.non_corner_cells().filter(|c| used.contains(c)).count();
    if overlap > 1 {
        return false;
    }
    used.extend(line.non_corner_cells());
    true
}

/// Number of accepted sequences for a team.
#[must_use]
pub fn sequence_count(occ: &Occupancy, team: Team) -> usize {
    accepted_lines(occ, team).len()
}

/// Whether a cell is a non-corner member of an accepted line for `team`.
///
/// Locked cells can never be targeted by a removal move.
#[must_use]
pub fn is_cell_locked(occ: &Occupancy, cell: Cell, team: Team) -> bool {
    if cell.is_corner() {
        return false;
    }
    accepted_lines(occ, team)
        .iter()
        .any(|line| line.contains(cell))
}

/// Sequence count after a placement, computed incrementally.
///
/// Baseline: the accepted lines (count and used set) on the occupancy before
/// the move. Candidates: lines complete after but not before, greedily
/// accepted against the baseline `used` set under the same one-shared-chip
/// rule. Counts are monotonically non-decreasing under pure placement;
/// removal only affects the opponent's future completions, never an already
/// accepted, now-locked sequence.
#[must_use]
pub fn sequence_count_after_placement(before: &Occupancy, after: &Occupancy, team: Team) -> usize {
    let baseline = accepted_lines(before, team);
    let mut used: FxHashSet<Cell> = FxHashSet::default();
    let mut already: FxHashSet<[Cell; 5]> = FxHashSet::default();
    for line in &baseline {
        used.extend(line.non_corner_cells());
        already.insert(line.cells);
    }

    let mut newly_accepted = 0;
    for line in all_lines() {
        if already.contains(&line.cells) || !line_complete(after, line, team) {
            continue;
        }
        // Skip lines that were complete before the move but lost the greedy
        // pass; re-offering them would double-count shared chips.
        if line_complete(before, line, team) {
            continue;
        }
        if try_accept(line, &mut used) {
            newly_accepted += 1;
        }
    }

    baseline.len() + newly_accepted
}

//! Game state and the append-only move log.
//!
//! The move log is the single durable source of truth: occupancy, sequence
//! counts, and every other board fact are folds over it. `GameState` carries
//! only what cannot be derived: the seed, the cursors, and the phase.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerId, Team};
use crate::board::Cell;
use crate::cards::Card;

/// Game lifecycle phase. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Lobby,
    Active,
    Finished,
}

/// The kind of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Place,
    Remove,
    Dead,
    Timeout,
}

/// One committed, immutable move-log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub turn_index: u32,
    pub player: PlayerId,
    pub team: Team,
    #[serde(rename = "move_type")]
    pub kind: MoveKind,
    pub card: Option<Card>,
    pub coord: Option<Cell>,
}

/// Append-only move log.
///
/// A persistent vector so snapshots for preview or replay are O(1) clones of
/// the committed log.
pub type MoveLog = Vector<Move>;

/// One player's hand: an ordered multiset of cards.
pub type Hand = SmallVec<[Card; 8]>;

/// Per-game state that is not derivable from the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Opaque seed string; regenerates the full deck ordering.
    pub seed: String,
    pub phase: Phase,
    /// Monotonic, 0-based; advances by exactly 1 per committed move.
    pub turn_index: u32,
    /// Cards consumed from the seed-derived deck so far.
    pub deck_cursor: usize,
    /// Team on turn.
    pub current_team: Team,
}

impl GameState {
    /// Fresh active state at turn 0.
    #[must_use]
    pub fn new(seed: impl Into<String>, deck_cursor: usize, current_team: Team) -> Self {
        Self {
            seed: seed.into(),
            phase: Phase::Active,
            turn_index: 0,
            deck_cursor,
            current_team,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Mark the game finished. Terminal and idempotent: once finished, a
    /// state never becomes active again.
    pub fn finish(&mut self) {
        self.phase = Phase::Finished;
    }
}

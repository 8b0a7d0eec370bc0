//! # sequence-engine
//!
//! A deterministic rule engine for a team board-and-cards game: a 10x10
//! board of printed cards, a double deck dealt from a seed, chip placement
//! and removal with wild and cutting jacks, and wins by counting five-chip
//! sequences.
//!
//! ## Design Principles
//!
//! 1. **Log Is Truth**: The committed state is the seed, the cursors, and
//!    the move log. Board occupancy and sequence counts are always derived
//!    by folding the log, never stored.
//!
//! 2. **Deterministic Replay**: The deck order is a pure function of the
//!    seed string. Any process holding `(settings, roster, seed, log)`
//!    reconstructs the identical game.
//!
//! 3. **Pure Transitions**: [`rules::apply_move`] takes the current values
//!    and a request and returns the complete next values or an error with
//!    nothing changed. The embedding decides how to persist outcomes.
//!
//! ## Modules
//!
//! - `core`: Player and team identity, settings, state, errors, seeded RNG
//! - `board`: Cell coordinates, the printed card layout, the sequence lines
//! - `cards`: Ranks, suits, deck construction, shuffling, dealing
//! - `rules`: Occupancy, sequence detection, turn order, move validation,
//!   lobby setup, and the [`rules::Game`] aggregate

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ChipOwner, EngineError, GameState, Hand, InvalidMove, Move, MoveKind, MoveLog, Phase,
    PlayerId, RoomSettings, Roster, Seat, SettingsUpdate, Team, TeamCount,
};

pub use crate::board::{all_lines, cell_kind, lines_through, Cell, CellKind, Line, CORNERS};

pub use crate::cards::{
    deck::{deal_round_robin, double_deck, shuffled_deck, DECK_SIZE},
    Card, Rank, Suit,
};

pub use crate::rules::{
    accepted_lines, apply_move, occupancy_from, replay, sequence_count, start_game, Game,
    GameStart, MoveAction, MoveOutcome, MoveRequest, Occupancy, Snapshot, TurnOrder,
};

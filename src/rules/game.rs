//! In-memory game aggregate and the pure replay query.
//!
//! [`Game`] bundles settings, roster, turn order, state, log, and hands and
//! applies validated outcomes, which makes it the reference embedding for
//! the engine (tests and single-process hosts). A networked embedding holds
//! these values in storage instead and applies each [`MoveOutcome`] under a
//! compare-and-swap on `turn_index`; the [`EngineError::TurnConflict`] check
//! inside [`apply_move`] is what makes two submissions for the same turn
//! mutually exclusive.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::occupancy::{occupancy_from, Occupancy};
use super::sequences::sequence_count;
use super::turn_order::TurnOrder;
use super::validator::{apply_move, MoveOutcome, MoveRequest};
use crate::core::config::RoomSettings;
use crate::core::error::EngineError;
use crate::core::player::{PlayerId, Roster, Seat, Team};
use crate::core::state::{GameState, Hand, MoveLog};

/// Derived view of a game at some point in its log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn_index: u32,
    pub current: Seat,
    pub next_team: Team,
    #[serde(skip)]
    pub occupancy: Occupancy,
    /// Accepted-sequence count per active team, in team order.
    pub sequence_counts: Vec<(Team, usize)>,
    pub finished: bool,
}

/// Reconstruct the derived game view purely from `(roster, log)`.
///
/// Idempotent and side-effect-free: any client or server instance holding
/// the same inputs derives an identical snapshot. `finished` here reflects
/// only sequence wins; a host-ended game is visible on [`GameState`], not in
/// the log.
pub fn replay(
    settings: &RoomSettings,
    roster: &Roster,
    log: &MoveLog,
) -> Result<Snapshot, EngineError> {
    let turn_order = TurnOrder::build(roster)?;
    // Every committed move advances the turn by exactly one.
    let turn_index = log.len() as u32;
    let occupancy = occupancy_from(log);
    let sequence_counts: Vec<(Team, usize)> = roster
        .active_teams()
        .map(|team| (team, sequence_count(&occupancy, team)))
        .collect();
    let finished = sequence_counts
        .iter()
        .any(|&(_, count)| count >= settings.win_sequences);

    Ok(Snapshot {
        turn_index,
        current: turn_order.current(turn_index),
        next_team: turn_order.next_team(turn_index),
        occupancy,
        sequence_counts,
        finished,
    })
}

/// A running game with all of its owned state.
#[derive(Clone, Debug)]
pub struct Game {
    settings: RoomSettings,
    roster: Roster,
    turn_order: TurnOrder,
    state: GameState,
    log: MoveLog,
    hands: FxHashMap<PlayerId, Hand>,
}

impl Game {
    /// Start a game from a lobby roster.
    pub fn start(settings: RoomSettings, roster: Roster, seed: &str) -> Result<Self, EngineError> {
        let start = super::lobby::start_game(&settings, &roster, seed)?;
        Ok(Self {
            settings,
            roster,
            turn_order: start.turn_order,
            state: start.state,
            log: MoveLog::new(),
            hands: start.hands.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &RoomSettings {
        &self.settings
    }

    #[must_use]
    pub fn turn_order(&self) -> &TurnOrder {
        &self.turn_order
    }

    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// A player's current hand.
    pub fn hand(&self, player: PlayerId) -> Result<&Hand, EngineError> {
        self.hands.get(&player).ok_or(EngineError::NotFound("hand"))
    }

    /// Validate a request and, if legal, commit its outcome.
    ///
    /// Commit applies the whole outcome (hand, log record, state) or, on
    /// any error, nothing.
    pub fn submit(&mut self, req: &MoveRequest) -> Result<MoveOutcome, EngineError> {
        let hand = self
            .hands
            .get(&req.player)
            .ok_or(EngineError::NotFound("hand"))?;
        let outcome = apply_move(
            &self.settings,
            &self.turn_order,
            &self.state,
            &self.log,
            hand,
            req,
        )?;

        self.hands.insert(req.player, outcome.hand.clone());
        self.log.push_back(outcome.mv);
        self.state = outcome.state.clone();
        Ok(outcome)
    }

    /// Host-initiated end: finish the game regardless of the board.
    pub fn finish(&mut self) {
        self.state.finish();
    }

    /// Derived view of the current position.
    pub fn snapshot(&self) -> Result<Snapshot, EngineError> {
        let mut snapshot = replay(&self.settings, &self.roster, &self.log)?;
        snapshot.finished = snapshot.finished || self.state.is_finished();
        Ok(snapshot)
    }
}

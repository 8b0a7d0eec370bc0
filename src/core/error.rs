//! Engine error categories.
//!
//! Callers branch on four categories, never on strings:
//!
//! - [`EngineError::Invalid`]: the move is simply illegal; nothing changed
//! - [`EngineError::TurnConflict`]: the submitted turn index is stale; the
//!   caller refetches state and may resubmit against the new index
//! - [`EngineError::NotYourTurn`]: authorization-style rejection
//! - [`EngineError::NotFound`]: unknown game/player/hand
//!
//! No category is fatal: every rejection leaves prior committed state intact.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::ParseCoordError;
use crate::cards::ParseCardError;

/// Reason a move (or lobby operation) is illegal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("malformed card key {0:?}")]
    BadCard(String),
    #[error("malformed coordinate {0:?}")]
    BadCoord(String),
    #[error("card is not in hand")]
    CardNotInHand,
    #[error("corner cells are immutable")]
    CornerImmutable,
    #[error("cell is already occupied")]
    SquareOccupied,
    #[error("card does not match the target cell")]
    CardCellMismatch,
    #[error("removal requires a one-eyed jack")]
    RemovalRequiresOneEyedJack,
    #[error("no opponent chip on the target cell")]
    NoOpponentChip,
    #[error("chip belongs to a locked sequence")]
    ChipLocked,
    #[error("card still has a playable board cell")]
    CardNotDead,
    #[error("game is not active")]
    GameNotActive,
    #[error("need at least two players")]
    NotEnoughPlayers,
    #[error("teams must be balanced")]
    UnbalancedTeams,
    #[error("settings can only change in the lobby")]
    SettingsLocked,
    #[error("teams can only change in the lobby")]
    RosterLocked,
    #[error("hand size and winning sequence count must be nonzero")]
    BadSettings,
}

/// Engine-level error, discriminated by recovery strategy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    Invalid(#[from] InvalidMove),

    #[error("turn conflict: submitted turn {submitted}, current turn {current}")]
    TurnConflict { submitted: u32, current: u32 },

    #[error("not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("{0} not found")]
    NotFound(&'static str),
}

impl From<ParseCardError> for EngineError {
    fn from(err: ParseCardError) -> Self {
        InvalidMove::BadCard(err.0).into()
    }
}

impl From<ParseCoordError> for EngineError {
    fn from(err: ParseCoordError) -> Self {
        InvalidMove::BadCoord(err.0).into()
    }
}

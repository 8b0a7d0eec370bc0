//! Core value types: players, teams, settings, state, errors, deck RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{RoomSettings, SettingsUpdate, TeamCount};
pub use error::{EngineError, InvalidMove};
pub use player::{ChipOwner, PlayerId, Roster, Seat, Team};
pub use rng::DeckRng;
pub use state::{GameState, Hand, Move, MoveKind, MoveLog, Phase};

//! Room settings.
//!
//! Settings are plain immutable values passed into every core call. They are
//! chosen in the lobby and frozen at game start; the engine never reads
//! ambient configuration.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, InvalidMove};

/// How many teams a room plays with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamCount {
    Two,
    Three,
}

impl TeamCount {
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            TeamCount::Two => 2,
            TeamCount::Three => 3,
        }
    }
}

/// Immutable room settings supplied at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSettings {
    /// Number of teams (2 or 3).
    pub teams: TeamCount,
    /// Opening hand size per player.
    pub hand_size: usize,
    /// Accepted sequences required to win.
    pub win_sequences: usize,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            teams: TeamCount::Two,
            hand_size: 5,
            win_sequences: 2,
        }
    }
}

/// Partial settings update applied while a room is still in the lobby.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub teams: Option<TeamCount>,
    pub hand_size: Option<usize>,
    pub win_sequences: Option<usize>,
}

impl RoomSettings {
    /// Reject degenerate settings before they reach a game.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.hand_size == 0 || self.win_sequences == 0 {
            return Err(InvalidMove::BadSettings.into());
        }
        Ok(())
    }

    /// Merge an update over these settings, field by field.
    #[must_use]
    pub fn merged(&self, update: SettingsUpdate) -> Self {
        Self {
            teams: update.teams.unwrap_or(self.teams),
            hand_size: update.hand_size.unwrap_or(self.hand_size),
            win_sequences: update.win_sequences.unwrap_or(self.win_sequences),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RoomSettings::default();
        assert_eq!(settings.teams, TeamCount::Two);
        assert_eq!(settings.hand_size, 5);
        assert_eq!(settings.win_sequences, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let mut settings = RoomSettings::default();
        settings.win_sequences = 0;
        assert!(settings.validate().is_err());

        let mut settings = RoomSettings::default();
        settings.hand_size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merged_overrides_only_given_fields() {
        let settings = RoomSettings::default();
        let merged = settings.merged(SettingsUpdate {
            win_sequences: Some(3),
            ..SettingsUpdate::default()
        });
        assert_eq!(merged.win_sequences, 3);
        assert_eq!(merged.hand_size, 5);
        assert_eq!(merged.teams, TeamCount::Two);
    }
}

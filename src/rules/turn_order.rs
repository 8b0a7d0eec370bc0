//! Turn order: round-robin across teams.
//!
//! Round 0 takes the first seated player of each active team in fixed team
//! order, round 1 the second, and so on, skipping teams that run out of
//! players. With balanced teams (a precondition enforced at game start) no
//! two consecutive turns ever belong to the same team. The order is built
//! once at game start and never changes: rosters are frozen.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, InvalidMove};
use crate::core::player::{Roster, Seat, Team};

/// Fixed per-game player order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    seats: Vec<Seat>,
}

impl TurnOrder {
    /// Interleave team rosters round-robin.
    pub fn build(roster: &Roster) -> Result<Self, EngineError> {
        let teams: Vec<Team> = roster.active_teams().collect();
        let rosters: Vec<Vec<_>> = teams
            .iter()
            .map(|&team| roster.team_players(team).collect())
            .collect();
        let rounds = rosters.iter().map(Vec::len).max().unwrap_or(0);

        let mut seats = Vec::with_capacity(roster.len());
        for round in 0..rounds {
            for (team, players) in teams.iter().zip(&rosters) {
                if let Some(&player) = players.get(round) {
                    seats.push(Seat { player, team: *team });
                }
            }
        }
        if seats.is_empty() {
            return Err(InvalidMove::NotEnoughPlayers.into());
        }
        Ok(Self { seats })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// All seats in turn order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The seat on turn at a given turn index.
    #[must_use]
    pub fn current(&self, turn_index: u32) -> Seat {
        self.seats[turn_index as usize % self.seats.len()]
    }

    /// The team on turn after the given turn index.
    #[must_use]
    pub fn next_team(&self, turn_index: u32) -> Team {
        self.current(turn_index + 1).team
    }
}

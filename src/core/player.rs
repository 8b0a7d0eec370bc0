//! Players, teams, and seating.
//!
//! ## PlayerId
//!
//! Opaque player identifier. The embedding maps its own identities (database
//! rows, session ids) onto these; the engine only compares them.
//!
//! ## Roster
//!
//! Seats in join order (seat index 0, 1, 2, ...), each carrying its team.
//! Frozen once a game starts: turn order and dealing both derive from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A team. Three exist; a two-team room simply never seats anyone on C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
    C,
}

impl Team {
    /// All teams in the fixed round-robin order.
    pub const ALL: [Team; 3] = [Team::A, Team::B, Team::C];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("A"),
            Team::B => f.write_str("B"),
            Team::C => f.write_str("C"),
        }
    }
}

/// Who holds a board cell in a derived occupancy.
///
/// The four wild corners are always `Corner`: they match every team's
/// sequences and no move can occupy or clear them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipOwner {
    Corner,
    Team(Team),
}

impl ChipOwner {
    /// The owning team, if a real team holds the cell.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            ChipOwner::Corner => None,
            ChipOwner::Team(team) => Some(team),
        }
    }
}

/// One seat: a player and the team they sit on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player: PlayerId,
    pub team: Team,
}

/// All seats in a room, ordered by seat index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: Vec<Seat>,
}

impl Roster {
    /// Empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player on a team, taking the next seat index.
    pub fn seat(&mut self, player: PlayerId, team: Team) {
        self.seats.push(Seat { player, team });
    }

    /// All seats in seat order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Total players seated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// A team's players, in seat order.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats
            .iter()
            .filter(move |s| s.team == team)
            .map(|s| s.player)
    }

    /// Per-team player counts, indexed by [`Team::index`].
    #[must_use]
    pub fn team_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for seat in &self.seats {
            counts[seat.team.index()] += 1;
        }
        counts
    }

    /// Reassign a seated player's team without changing their seat index.
    /// Returns false if the player is not seated.
    pub fn set_team(&mut self, player: PlayerId, team: Team) -> bool {
        match self.seats.iter_mut().find(|s| s.player == player) {
            Some(seat) => {
                seat.team = team;
                true
            }
            None => false,
        }
    }

    /// The team a player sits on, if seated.
    #[must_use]
    pub fn team_of(&self, player: PlayerId) -> Option<Team> {
        self.seats
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.team)
    }

    /// Teams with at least one seat, in fixed A, B, C order.
    pub fn active_teams(&self) -> impl Iterator<Item = Team> + '_ {
        let counts = self.team_counts();
        Team::ALL.into_iter().filter(move |t| counts[t.index()] > 0)
    }
}

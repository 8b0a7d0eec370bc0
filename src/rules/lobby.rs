//! Lobby rules and game start.
//!
//! Everything here is pure except the identifier generators: joining players
//! land on the smallest team, teams must be balanced before a game starts,
//! and starting a game shuffles from the seed, deals round-robin in seat
//! order, and freezes the turn order.

use rand::Rng;
use tracing::info;

use super::turn_order::TurnOrder;
use crate::cards::deck::{deal_round_robin, shuffled_deck};
use crate::core::config::{RoomSettings, SettingsUpdate, TeamCount};
use crate::core::error::{EngineError, InvalidMove};
use crate::core::player::{PlayerId, Roster, Team};
use crate::core::state::{GameState, Hand, Phase};

/// Room-code alphabet: no 0/O, 1/I lookalikes.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a shareable room code.
#[must_use]
pub fn generate_room_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Generate a readable seed string for a new game.
#[must_use]
pub fn generate_seed() -> String {
    let mut rng = rand::thread_rng();
    let word = |rng: &mut rand::rngs::ThreadRng, len: usize| -> String {
        (0..len)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    };
    format!("{}-{}", word(&mut rng, 6), word(&mut rng, 6))
}

/// The team a joining player should land on: the active team with the
/// fewest members, ties resolved in fixed A, B, C order.
#[must_use]
pub fn assign_team(roster: &Roster, teams: TeamCount) -> Team {
    let counts = roster.team_counts();
    let active = &Team::ALL[..teams.as_usize()];
    *active
        .iter()
        .min_by_key(|team| counts[team.index()])
        .unwrap_or(&Team::A)
}

/// Apply a settings update. Settings freeze at game start.
pub fn update_settings(
    phase: Phase,
    settings: &RoomSettings,
    update: SettingsUpdate,
) -> Result<RoomSettings, EngineError> {
    if phase != Phase::Lobby {
        return Err(InvalidMove::SettingsLocked.into());
    }
    let merged = settings.merged(update);
    merged.validate()?;
    Ok(merged)
}

/// Move a seated player to a team of their choosing. Rosters freeze at
/// game start; balance is only enforced later, when the game starts.
pub fn switch_team(
    phase: Phase,
    roster: &mut Roster,
    player: PlayerId,
    team: Team,
) -> Result<(), EngineError> {
    if phase != Phase::Lobby {
        return Err(InvalidMove::RosterLocked.into());
    }
    if !roster.set_team(player, team) {
        return Err(EngineError::NotFound("player"));
    }
    Ok(())
}

/// Every active team must field the same nonzero player count.
pub fn validate_balanced(roster: &Roster, teams: TeamCount) -> Result<(), EngineError> {
    let counts = roster.team_counts();
    let active = &counts[..teams.as_usize()];
    if active.iter().any(|&c| c == 0 || c != active[0]) {
        return Err(InvalidMove::UnbalancedTeams.into());
    }
    Ok(())
}

/// Everything a freshly started game consists of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStart {
    pub state: GameState,
    pub turn_order: TurnOrder,
    /// Opening hands, one per roster seat, in seat order.
    pub hands: Vec<(PlayerId, Hand)>,
}

/// Start a game: validate the lobby, shuffle from the seed, deal, and build
/// the turn order.
pub fn start_game(
    settings: &RoomSettings,
    roster: &Roster,
    seed: &str,
) -> Result<GameStart, EngineError> {
    settings.validate()?;
    if roster.len() < 2 {
        return Err(InvalidMove::NotEnoughPlayers.into());
    }
    validate_balanced(roster, settings.teams)?;

    let deck = shuffled_deck(seed);
    let (hands, deck_cursor) = deal_round_robin(&deck, roster.len(), settings.hand_size);
    let turn_order = TurnOrder::build(roster)?;
    let current_team = turn_order.current(0).team;

    info!(players = roster.len(), hand_size = settings.hand_size, "game started");

    Ok(GameStart {
        state: GameState::new(seed, deck_cursor, current_team),
        turn_order,
        hands: roster
            .seats()
            .iter()
            .map(|seat| seat.player)
            .zip(hands)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_assign_team_prefers_smallest_then_a() {
        let mut roster = Roster::new();
        assert_eq!(assign_team(&roster, TeamCount::Two), Team::A);
        roster.seat(p(1), Team::A);
        assert_eq!(assign_team(&roster, TeamCount::Two), Team::B);
        roster.seat(p(2), Team::B);
        assert_eq!(assign_team(&roster, TeamCount::Two), Team::A);

        // Three-team rooms may route to C.
        roster.seat(p(3), Team::A);
        assert_eq!(assign_team(&roster, TeamCount::Three), Team::C);
    }

    #[test]
    fn test_update_settings_only_in_lobby() {
        let settings = RoomSettings::default();
        let update = SettingsUpdate {
            win_sequences: Some(3),
            ..SettingsUpdate::default()
        };

        let merged = update_settings(Phase::Lobby, &settings, update).unwrap();
        assert_eq!(merged.win_sequences, 3);

        assert!(matches!(
            update_settings(Phase::Active, &settings, update).unwrap_err(),
            EngineError::Invalid(InvalidMove::SettingsLocked)
        ));

        let bad = SettingsUpdate {
            hand_size: Some(0),
            ..SettingsUpdate::default()
        };
        assert!(update_settings(Phase::Lobby, &settings, bad).is_err());
    }

    #[test]
    fn test_switch_team_only_in_lobby() {
        let mut roster = Roster::new();
        roster.seat(p(1), Team::A);
        roster.seat(p(2), Team::B);

        switch_team(Phase::Lobby, &mut roster, p(1), Team::B).unwrap();
        assert_eq!(roster.team_of(p(1)), Some(Team::B));
        assert_eq!(roster.seats()[0].player, p(1));

        assert!(matches!(
            switch_team(Phase::Active, &mut roster, p(1), Team::A).unwrap_err(),
            EngineError::Invalid(InvalidMove::RosterLocked)
        ));
        assert_eq!(roster.team_of(p(1)), Some(Team::B));

        assert!(matches!(
            switch_team(Phase::Lobby, &mut roster, p(9), Team::A).unwrap_err(),
            EngineError::NotFound("player")
        ));
    }

    #[test]
    fn test_validate_balanced() {
        let mut roster = Roster::new();
        roster.seat(p(1), Team::A);
        roster.seat(p(2), Team::B);
        assert!(validate_balanced(&roster, TeamCount::Two).is_ok());

        roster.seat(p(3), Team::A);
        assert!(validate_balanced(&roster, TeamCount::Two).is_err());

        // An empty active team is also unbalanced.
        let mut lone = Roster::new();
        lone.seat(p(1), Team::A);
        lone.seat(p(2), Team::A);
        assert!(validate_balanced(&lone, TeamCount::Two).is_err());
    }

    #[test]
    fn test_start_game_deals_and_freezes_order() {
        let mut roster = Roster::new();
        roster.seat(p(1), Team::A);
        roster.seat(p(2), Team::B);

        let settings = RoomSettings::default();
        let start = start_game(&settings, &roster, "TESTSEED").unwrap();

        assert_eq!(start.state.turn_index, 0);
        assert_eq!(start.state.deck_cursor, 10);
        assert_eq!(start.state.current_team, Team::A);
        assert_eq!(start.hands.len(), 2);
        for (_, hand) in &start.hands {
            assert_eq!(hand.len(), 5);
        }

        let deck = shuffled_deck("TESTSEED");
        assert_eq!(start.hands[0].1.as_slice(), &[deck[0], deck[2], deck[4], deck[6], deck[8]]);
        assert_eq!(start.hands[1].1.as_slice(), &[deck[1], deck[3], deck[5], deck[7], deck[9]]);
    }

    #[test]
    fn test_start_game_rejects_bad_lobbies() {
        let settings = RoomSettings::default();

        let mut lone = Roster::new();
        lone.seat(p(1), Team::A);
        assert!(start_game(&settings, &lone, "S").is_err());

        let mut lopsided = Roster::new();
        lopsided.seat(p(1), Team::A);
        lopsided.seat(p(2), Team::A);
        lopsided.seat(p(3), Team::B);
        assert!(matches!(
            start_game(&settings, &lopsided, "S").unwrap_err(),
            EngineError::Invalid(InvalidMove::UnbalancedTeams)
        ));
    }

    #[test]
    fn test_generated_identifiers_use_the_alphabet() {
        let code = generate_room_code(6);
        assert_eq!(code.len(), 6);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));

        let seed = generate_seed();
        assert_eq!(seed.len(), 13);
        assert!(seed.contains('-'));
    }
}

//! Move validation and state transition.
//!
//! A pure request/response validator: given the committed state, the move
//! log, the acting player's hand, and a request, it either returns the full
//! next state as a [`MoveOutcome`] or an error with nothing changed.
//! Validation runs to completion before any value is built, so a transition
//! is atomic by construction; the embedding storage layer applies the
//! outcome under its own compare-and-swap on `turn_index` (no two committed
//! moves may ever share one).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::occupancy::{occupancy_from, team_at, Occupancy};
use super::sequences::{is_cell_locked, sequence_count, sequence_count_after_placement};
use super::turn_order::TurnOrder;
use crate::board::{positions_for, Cell};
use crate::cards::deck::shuffled_deck;
use crate::cards::Card;
use crate::core::config::RoomSettings;
use crate::core::error::{EngineError, InvalidMove};
use crate::core::player::{ChipOwner, PlayerId, Team};
use crate::core::state::{GameState, Hand, Move, MoveKind, MoveLog};

/// What a player asks to do with their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "move_type")]
pub enum MoveAction {
    /// Put a chip on a cell, from a matching card or a two-eyed jack.
    Place { card: Card, coord: Cell },
    /// Remove an unlocked opponent chip with a one-eyed jack.
    Remove { card: Card, coord: Cell },
    /// Exchange a dead card (both board cells covered) for a fresh draw.
    Dead { card: Card },
    /// Skip the turn.
    Timeout,
}

/// A move submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub player: PlayerId,
    /// The turn the client believes it is acting on. A stale value is a
    /// turn conflict: the caller refetches and may resubmit, never the
    /// engine.
    pub expected_turn_index: u32,
    #[serde(flatten)]
    pub action: MoveAction,
}

/// The complete effect of a committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The log record to append.
    pub mv: Move,
    /// The acting player's hand after discard and draw.
    pub hand: Hand,
    /// The advanced game state.
    pub state: GameState,
    /// Card drawn to replace the played one, if the deck had any left.
    pub drew: Option<Card>,
    /// The acting team's accepted-sequence count after the move.
    pub sequence_count: usize,
}

/// Validate a request and compute the resulting state.
///
/// Checks run in a fixed order for every move kind: game active, turn index
/// fresh, actor on turn; then the kind-specific legality rules. On success
/// the returned outcome holds every changed value; the caller persists them
/// together or not at all.
pub fn apply_move(
    settings: &RoomSettings,
    turn_order: &TurnOrder,
    state: &GameState,
    log: &MoveLog,
    hand: &Hand,
    req: &MoveRequest,
) -> Result<MoveOutcome, EngineError> {
    if !state.is_active() {
        return Err(InvalidMove::GameNotActive.into());
    }
    if req.expected_turn_index != state.turn_index {
        return Err(EngineError::TurnConflict {
            submitted: req.expected_turn_index,
            current: state.turn_index,
        });
    }
    let seat = turn_order.current(state.turn_index);
    if seat.player != req.player {
        return Err(EngineError::NotYourTurn { player: req.player });
    }
    let team = seat.team;

    let occupancy = occupancy_from(log);

    match req.action {
        MoveAction::Place { card, coord } => {
            check_place(&occupancy, hand, card, coord)?;
            let mut after = occupancy.clone();
            after.insert(coord, ChipOwner::Team(team));
            let count = sequence_count_after_placement(&occupancy, &after, team);

            let mut outcome = commit(
                turn_order, state, hand, req, team,
                MoveKind::Place, Some(card), Some(coord),
            );
            outcome.sequence_count = count;
            if count >= settings.win_sequences {
                outcome.state.finish();
                info!(team = %team, sequences = count, "winning sequence count reached");
            }
            Ok(outcome)
        }
        MoveAction::Remove { card, coord } => {
            check_remove(&occupancy, hand, team, card, coord)?;
            let mut after = occupancy.clone();
            after.remove(&coord);
            let mut outcome = commit(
                turn_order, state, hand, req, team,
                MoveKind::Remove, Some(card), Some(coord),
            );
            outcome.sequence_count = sequence_count(&after, team);
            Ok(outcome)
        }
        MoveAction::Dead { card } => {
            check_dead(&occupancy, hand, card)?;
            let mut outcome = commit(
                turn_order, state, hand, req, team,
                MoveKind::Dead, Some(card), None,
            );
            outcome.sequence_count = sequence_count(&occupancy, team);
            Ok(outcome)
        }
        MoveAction::Timeout => {
            // Always legal for the player on turn; hand and deck untouched.
            let mv = Move {
                turn_index: state.turn_index,
                player: req.player,
                team,
                kind: MoveKind::Timeout,
                card: None,
                coord: None,
            };
            let mut next = state.clone();
            next.turn_index += 1;
            next.current_team = turn_order.next_team(state.turn_index);
            debug!(turn = mv.turn_index, player = %req.player, "timeout committed");
            Ok(MoveOutcome {
                mv,
                hand: hand.clone(),
                state: next,
                drew: None,
                sequence_count: sequence_count(&occupancy, team),
            })
        }
    }
}

fn check_place(occ: &Occupancy, hand: &Hand, card: Card, coord: Cell) -> Result<(), EngineError> {
    if !hand.contains(&card) {
        return Err(InvalidMove::CardNotInHand.into());
    }
    if coord.is_corner() {
        return Err(InvalidMove::CornerImmutable.into());
    }
    if occ.contains_key(&coord) {
        return Err(InvalidMove::SquareOccupied.into());
    }
    // Two-eyed jacks are wild; anything else must match the printed cell.
    if !card.is_two_eyed_jack() && !positions_for(card).contains(&coord) {
        return Err(InvalidMove::CardCellMismatch.into());
    }
    Ok(())
}

fn check_remove(
    occ: &Occupancy,
    hand: &Hand,
    team: Team,
    card: Card,
    coord: Cell,
) -> Result<(), EngineError> {
    if !hand.contains(&card) {
        return Err(InvalidMove::CardNotInHand.into());
    }
    if !card.is_one_eyed_jack() {
        return Err(InvalidMove::RemovalRequiresOneEyedJack.into());
    }
    if coord.is_corner() {
        return Err(InvalidMove::CornerImmutable.into());
    }
    let owner = match team_at(occ, coord) {
        Some(owner) if owner != team => owner,
        _ => return Err(InvalidMove::NoOpponentChip.into()),
    };
    if is_cell_locked(occ, coord, owner) {
        return Err(InvalidMove::ChipLocked.into());
    }
    Ok(())
}

fn check_dead(occ: &Occupancy, hand: &Hand, card: Card) -> Result<(), EngineError> {
    if !hand.contains(&card) {
        return Err(InvalidMove::CardNotInHand.into());
    }
    // Jacks have no printed cells, so they can never be dead.
    let positions = positions_for(card);
    let covered = !positions.is_empty()
        && positions
            .iter()
            .all(|cell| cell.is_corner() || occ.contains_key(cell));
    if !covered {
        return Err(InvalidMove::CardNotDead.into());
    }
    Ok(())
}

/// Build the outcome shared by place/remove/dead: discard the played card,
/// draw the next deck card if any remain, append the record, advance the
/// turn and cursor.
#[allow(clippy::too_many_arguments)]
fn commit(
    turn_order: &TurnOrder,
    state: &GameState,
    hand: &Hand,
    req: &MoveRequest,
    team: Team,
    kind: MoveKind,
    card: Option<Card>,
    coord: Option<Cell>,
) -> MoveOutcome {
    let mut hand = hand.clone();
    if let Some(card) = card {
        if let Some(pos) = hand.iter().position(|&c| c == card) {
            hand.remove(pos);
        }
    }

    let deck = shuffled_deck(&state.seed);
    let drew = deck.get(state.deck_cursor).copied();
    if let Some(card) = drew {
        hand.push(card);
    }

    let mv = Move {
        turn_index: state.turn_index,
        player: req.player,
        team,
        kind,
        card,
        coord,
    };

    let mut next = state.clone();
    next.turn_index += 1;
    if drew.is_some() {
        next.deck_cursor += 1;
    }
    next.current_team = turn_order.next_team(state.turn_index);

    debug!(turn = mv.turn_index, player = %req.player, kind = ?kind, "move committed");

    MoveOutcome {
        mv,
        hand,
        state: next,
        drew,
        sequence_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Roster;
    use crate::core::state::Phase;
    use smallvec::smallvec;

    fn two_player_order() -> TurnOrder {
        let mut roster = Roster::new();
        roster.seat(PlayerId::new(1), Team::A);
        roster.seat(PlayerId::new(2), Team::B);
        TurnOrder::build(&roster).unwrap()
    }

    fn active_state() -> GameState {
        GameState::new("VALIDATOR-SEED", 10, Team::A)
    }

    fn place_req(player: u32, turn: u32, card: Card, coord: &str) -> MoveRequest {
        MoveRequest {
            player: PlayerId::new(player),
            expected_turn_index: turn,
            action: MoveAction::Place { card, coord: coord.parse().unwrap() },
        }
    }

    #[test]
    fn test_stale_turn_index_is_a_conflict() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let state = active_state();
        let card: Card = "2_spade".parse().unwrap();
        let hand: Hand = smallvec![card];

        let err = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(1, 5, card, "1,3"),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::TurnConflict { submitted: 5, current: 0 });
    }

    #[test]
    fn test_wrong_player_rejected() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let state = active_state();
        let card: Card = "2_spade".parse().unwrap();
        let hand: Hand = smallvec![card];

        let err = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(2, 0, card, "1,3"),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::NotYourTurn { player: PlayerId::new(2) });
    }

    #[test]
    fn test_finished_game_rejects_everything() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let mut state = active_state();
        state.finish();
        let err = apply_move(
            &settings, &order, &state, &MoveLog::new(), &Hand::new(),
            &MoveRequest {
                player: PlayerId::new(1),
                expected_turn_index: 0,
                action: MoveAction::Timeout,
            },
        )
        .unwrap_err();
        assert_eq!(err, EngineError::Invalid(InvalidMove::GameNotActive));
    }

    #[test]
    fn test_place_matching_card_commits() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let state = active_state();
        let card: Card = "2_spade".parse().unwrap();
        let hand: Hand = smallvec![card];

        let outcome = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(1, 0, card, "1,3"),
        )
        .unwrap();

        assert_eq!(outcome.mv.kind, MoveKind::Place);
        assert_eq!(outcome.mv.turn_index, 0);
        assert_eq!(outcome.state.turn_index, 1);
        assert_eq!(outcome.state.deck_cursor, 11);
        assert_eq!(outcome.state.current_team, Team::B);
        assert_eq!(outcome.hand.len(), 1); // discarded one, drew one
        assert_eq!(outcome.hand[0], outcome.drew.unwrap());
    }

    #[test]
    fn test_place_rejects_mismatch_corner_and_occupied() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let state = active_state();
        let card: Card = "2_spade".parse().unwrap();
        let hand: Hand = smallvec![card];

        let err = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(1, 0, card, "5,5"),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::Invalid(InvalidMove::CardCellMismatch));

        let err = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(1, 0, card, "0,0"),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::Invalid(InvalidMove::CornerImmutable));

        let mut log = MoveLog::new();
        log.push_back(Move {
            turn_index: 0,
            player: PlayerId::new(2),
            team: Team::B,
            kind: MoveKind::Place,
            card: None,
            coord: Some("1,3".parse().unwrap()),
        });
        let err = apply_move(
            &settings, &order, &state, &log, &hand,
            &place_req(1, 0, card, "1,3"),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::Invalid(InvalidMove::SquareOccupied));
    }

    #[test]
    fn test_two_eyed_jack_is_wild() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let state = active_state();
        let jack: Card = "J_club".parse().unwrap();
        let hand: Hand = smallvec![jack];

        // A cell whose printed card is unrelated to the jack.
        let outcome = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(1, 0, jack, "5,5"),
        )
        .unwrap();
        assert_eq!(outcome.mv.coord, Some("5,5".parse().unwrap()));
    }

    #[test]
    fn test_timeout_touches_nothing_but_turn() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let state = active_state();
        let hand: Hand = smallvec!["2_spade".parse().unwrap()];

        let outcome = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &MoveRequest {
                player: PlayerId::new(1),
                expected_turn_index: 0,
                action: MoveAction::Timeout,
            },
        )
        .unwrap();

        assert_eq!(outcome.hand, hand);
        assert_eq!(outcome.drew, None);
        assert_eq!(outcome.state.turn_index, 1);
        assert_eq!(outcome.state.deck_cursor, state.deck_cursor);
        assert_eq!(outcome.mv.kind, MoveKind::Timeout);
    }

    #[test]
    fn test_exhausted_deck_shrinks_hand_and_freezes_cursor() {
        let settings = RoomSettings::default();
        let order = two_player_order();
        let mut state = active_state();
        state.deck_cursor = 104;
        let card: Card = "2_spade".parse().unwrap();
        let hand: Hand = smallvec![card];

        let outcome = apply_move(
            &settings, &order, &state, &MoveLog::new(), &hand,
            &place_req(1, 0, card, "1,3"),
        )
        .unwrap();

        assert_eq!(outcome.drew, None);
        assert!(outcome.hand.is_empty());
        assert_eq!(outcome.state.deck_cursor, 104);
        assert_eq!(outcome.state.turn_index, 1);
    }

    #[test]
    fn test_win_flag_set_when_count_reached() {
        let settings = RoomSettings {
            win_sequences: 1,
            ..RoomSettings::default()
        };
        let order = two_player_order();
        let state = active_state();

        // Four A chips on row 1 cols 4..=7; completing (1,8) with the
        // printed 7_spade closes the horizontal line cols 4-8.
        let mut log = MoveLog::new();
        for (turn, col) in (4..8).enumerate() {
            log.push_back(Move {
                turn_index: turn as u32,
                player: PlayerId::new(1),
                team: Team::A,
                kind: MoveKind::Place,
                card: None,
                coord: Some(Cell::at(1, col)),
            });
        }
        let card: Card = "7_spade".parse().unwrap();
        let hand: Hand = smallvec![card];

        let outcome = apply_move(
            &settings, &order, &state, &log, &hand,
            &place_req(1, 0, card, "1,8"),
        )
        .unwrap();

        assert_eq!(outcome.sequence_count, 1);
        assert_eq!(outcome.state.phase, Phase::Finished);
    }
}

//! The double deck and deterministic seeded shuffling.
//!
//! The deck is never persisted as a list. A game stores only its seed string
//! and a cursor; any party holding the seed regenerates the identical
//! ordering with [`shuffled_deck`]. That contract is what makes board state
//! reconstructible from `(seed, move log)` alone.

use smallvec::SmallVec;

use super::{Card, Rank, Suit};
use crate::core::rng::DeckRng;
use crate::core::state::Hand;

/// Number of cards in the double deck (two full 52-card sets, no jokers).
pub const DECK_SIZE: usize = 104;

/// Build the unshuffled double deck.
///
/// Two copies of each of the 52 cards, suit-major then rank-major per copy.
/// Jacks stay in: they carry the wild/removal powers.
#[must_use]
pub fn double_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..2 {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(rank, suit));
            }
        }
    }
    deck
}

/// Shuffle the double deck deterministically from a seed string.
///
/// Identical seed, identical ordering, forever. See [`DeckRng`] for the
/// canonical hash/PRNG pair this contract is pinned to.
#[must_use]
pub fn shuffled_deck(seed: &str) -> Vec<Card> {
    let mut deck = double_deck();
    DeckRng::from_seed_str(seed).shuffle(&mut deck);
    deck
}

/// Deal opening hands round-robin: one card per player per round.
///
/// Returns one hand per entry in `0..player_count` (players in seat order)
/// and the deck cursor after dealing. With 2 players and hand size 5,
/// player 0 receives `deck[0, 2, 4, 6, 8]` and player 1 `deck[1, 3, 5, 7, 9]`.
#[must_use]
pub fn deal_round_robin(deck: &[Card], player_count: usize, hand_size: usize) -> (Vec<Hand>, usize) {
    let mut hands: Vec<Hand> = vec![SmallVec::new(); player_count];
    let mut cursor = 0;
    for _ in 0..hand_size {
        for hand in hands.iter_mut() {
            if let Some(&card) = deck.get(cursor) {
                hand.push(card);
                cursor += 1;
            }
        }
    }
    (hands, cursor)
}

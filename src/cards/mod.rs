//! Cards: ranks, suits, jack powers, and the canonical string key.
//!
//! ## Canonical key
//!
//! A card's wire form is `"rank_suit"` (e.g. `"10_spade"`, `"A_diamond"`).
//! `Display`, `FromStr`, and serde all use this form, so a card round-trips
//! losslessly between the engine and any client holding the same log.
//!
//! ## Jacks
//!
//! Jacks never appear on the board; they carry powers instead:
//! - spade/heart jacks are **one-eyed**: remove one unlocked opponent chip
//! - club/diamond jacks are **two-eyed**: place on any empty non-corner cell

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod deck;

/// Card rank. Declared in deck-construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

impl Rank {
    /// All ranks in deck-construction order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Canonical key fragment ("A", "K", "Q", "J", "10", ..., "2").
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    /// All suits in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// Canonical key fragment ("spade", "heart", "club", "diamond").
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Heart => "heart",
            Suit::Club => "club",
            Suit::Diamond => "diamond",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Any jack, regardless of eye count.
    #[must_use]
    pub const fn is_jack(self) -> bool {
        matches!(self.rank, Rank::Jack)
    }

    /// One-eyed jack (spade or heart): removal power.
    #[must_use]
    pub const fn is_one_eyed_jack(self) -> bool {
        matches!(
            (self.rank, self.suit),
            (Rank::Jack, Suit::Spade) | (Rank::Jack, Suit::Heart)
        )
    }

    /// Two-eyed jack (club or diamond): wild placement power.
    #[must_use]
    pub const fn is_two_eyed_jack(self) -> bool {
        matches!(
            (self.rank, self.suit),
            (Rank::Jack, Suit::Club) | (Rank::Jack, Suit::Diamond)
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.rank, self.suit)
    }
}

/// Failure to parse a `"rank_suit"` card key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed card key: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.split_once('_').ok_or_else(|| ParseCardError(s.to_owned()))?;
        let rank = Rank::from_key(rank).ok_or_else(|| ParseCardError(s.to_owned()))?;
        let suit = Suit::from_key(suit).ok_or_else(|| ParseCardError(s.to_owned()))?;
        Ok(Card::new(rank, suit))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_round_trip() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }

    #[test]
    fn test_key_format() {
        assert_eq!(Card::new(Rank::Ten, Suit::Spade).to_string(), "10_spade");
        assert_eq!(Card::new(Rank::Ace, Suit::Diamond).to_string(), "A_diamond");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!("10spade".parse::<Card>().is_err());
        assert!("11_spade".parse::<Card>().is_err());
        assert!("10_spades".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn test_jack_powers() {
        assert!(Card::new(Rank::Jack, Suit::Spade).is_one_eyed_jack());
        assert!(Card::new(Rank::Jack, Suit::Heart).is_one_eyed_jack());
        assert!(Card::new(Rank::Jack, Suit::Club).is_two_eyed_jack());
        assert!(Card::new(Rank::Jack, Suit::Diamond).is_two_eyed_jack());

        let one_eyed = Card::new(Rank::Jack, Suit::Spade);
        assert!(one_eyed.is_jack());
        assert!(!one_eyed.is_two_eyed_jack());

        let plain = Card::new(Rank::Ten, Suit::Club);
        assert!(!plain.is_jack());
        assert!(!plain.is_one_eyed_jack());
        assert!(!plain.is_two_eyed_jack());
    }

    #[test]
    fn test_serde_as_string() {
        let card = Card::new(Rank::Queen, Suit::Heart);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Q_heart\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}

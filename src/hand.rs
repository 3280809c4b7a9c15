use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

/// Cards per hand.
pub const HAND_SIZE: usize = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("expected exactly three cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's three cards, kept in dealt order.
///
/// ```
/// use teen_patti::hand::Hand;
///
/// let hand: Hand = "As Ks Qs".parse().unwrap();
/// assert_eq!(hand.to_string(), "A of Spades, K of Spades, Q of Spades");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let [a, b, c] = cards;
        if a == b || a == c || b == c {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b, c] => Self::try_new([*a, *b, *c]),
            _ => Err(HandError::CardCount(slice.len())),
        }
    }

    /// Cards straight off a deck are distinct by construction.
    pub(crate) fn dealt(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(Self::try_new(cards).is_ok(), "deck dealt a duplicate card");
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "{a}, {b}, {c}")
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

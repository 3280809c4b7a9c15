use crate::cards::{Card, Suit};

/// Whether all three cards share a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_color: bool,
    pub color_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 3]) -> Self {
        let first_suit = cards[0].suit();
        if cards.iter().all(|c| c.suit() == first_suit) {
            SuitInfo { is_color: true, color_suit: Some(first_suit) }
        } else {
            SuitInfo { is_color: false, color_suit: None }
        }
    }
}

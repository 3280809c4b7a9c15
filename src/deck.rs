use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Players at the table.
pub const PLAYERS: usize = 3;

/// A standard 52-card deck. Cards are drawn from the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Unshuffled deck: Spades, Hearts, Diamonds, Clubs; A through K within each suit.
    ///
    /// ```
    /// use teen_patti::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// Fresh deck shuffled by `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(rng);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Uniform Fisher-Yates shuffle with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Drop every card held in `hands`, as if they had been dealt from this deck.
    pub(crate) fn retain_undealt(&mut self, hands: &[Hand]) {
        self.cards.retain(|c| !hands.iter().any(|h| h.cards().contains(c)));
    }

    /// Deal three cards to each of three players, one card at a time in seat order.
    ///
    /// Panics if fewer than nine cards remain; a round always starts from a full deck.
    pub fn deal_hands(&mut self) -> [Hand; PLAYERS] {
        let needed = PLAYERS * HAND_SIZE;
        assert!(self.len() >= needed, "deck has {} cards, need {needed}", self.len());
        // Reversed so index 0 is the first card popped off the top.
        let dealt: Vec<Card> = self.cards.split_off(self.len() - needed).into_iter().rev().collect();
        std::array::from_fn(|seat| {
            Hand::dealt(std::array::from_fn(|round| dealt[round * PLAYERS + seat]))
        })
    }
}

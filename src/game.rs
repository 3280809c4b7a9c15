use crate::deck::{Deck, PLAYERS};
use crate::evaluator::{evaluate, Evaluation};
use crate::hand::{Hand, HAND_SIZE};
use crate::showdown::{resolve_players, Outcome};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Default cap on re-deals while waiting for an untied round.
pub const DEFAULT_MAX_DEALS: usize = 1000;

/// One of the three fixed identities at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seat {
    A,
    B,
    C,
}

impl Seat {
    pub const ALL: [Seat; PLAYERS] = [Seat::A, Seat::B, Seat::C];

    pub const fn name(self) -> &'static str {
        match self {
            Seat::A => "Player A",
            Seat::B => "Player B",
            Seat::C => "Player C",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeatParseError {
    #[error("invalid seat: '{0}' (expected A, B or C)")]
    Invalid(String),
}

impl FromStr for Seat {
    type Err = SeatParseError;

    /// Exactly `A`, `B` or `C` after trimming whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Seat::A),
            "B" => Ok(Seat::B),
            "C" => Ok(Seat::C),
            _ => Err(SeatParseError::Invalid(s.trim().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("no untied round after {attempts} deals")]
    RedealLimit { attempts: usize },
}

/// What free play does when the best hands tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePolicy {
    /// Return the tie so it can be shown as such.
    #[default]
    Report,
    /// Deal again until there is a single winner.
    Redeal,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) evaluation: Evaluation,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self { name: name.into(), hand, evaluation: evaluate(&hand) }
    }

    /// Returns the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    fn reevaluate(&mut self) {
        self.evaluation = evaluate(&self.hand);
    }
}

/// One dealt round: three players and what is left of the deck.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Round {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
}

impl Round {
    /// Fresh deck, shuffled by `rng`, three cards each to A, B and C.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::shuffled(rng);
        let hands = deck.deal_hands();
        let players = Seat::ALL
            .iter()
            .zip(hands)
            .map(|(seat, hand)| Player::new(seat.name(), hand))
            .collect();
        Self { players, deck }
    }

    /// Build a round from known hands, for replaying or testing a deal.
    pub fn from_hands(hands: [Hand; PLAYERS]) -> Self {
        let mut deck = Deck::standard();
        let players = Seat::ALL
            .iter()
            .zip(hands)
            .map(|(seat, hand)| Player::new(seat.name(), hand))
            .collect();
        deck.retain_undealt(&hands);
        debug_assert_eq!(deck.len(), Deck::SIZE - PLAYERS * HAND_SIZE, "hands share a card");
        Self { players, deck }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Cards never dealt this round.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn resolve(&self) -> Outcome {
        resolve_players(&self.players)
    }

    /// Swap display names between the holder of `seat`'s name and `winner`.
    /// Hands and evaluations stay where they are.
    fn relabel(&mut self, seat: Seat, winner: usize) {
        let Some(target) = self.players.iter().position(|p| p.name == seat.name()) else {
            return;
        };
        if target != winner {
            log::info!("relabel: {} <-> {}", self.players[target].name, self.players[winner].name);
            let name = std::mem::take(&mut self.players[target].name);
            self.players[target].name = std::mem::replace(&mut self.players[winner].name, name);
        }
    }

    fn reevaluate(&mut self) {
        for p in &mut self.players {
            p.reevaluate();
        }
    }

    fn sort_by_name(&mut self) {
        self.players.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// Deal until a round has a single winner, with a fresh shuffle each time.
fn deal_until_winner<R: Rng + ?Sized>(
    rng: &mut R,
    max_deals: usize,
) -> Result<(Round, usize), GameError> {
    for attempt in 1..=max_deals {
        let round = Round::deal(rng);
        match round.resolve() {
            Outcome::Winner(i) => {
                log::debug!("deal {attempt}: {} wins", round.players[i].name);
                return Ok((round, i));
            }
            Outcome::Tie(tied) => {
                log::warn!("deal {attempt}: tie between seats {tied:?}, dealing again");
            }
        }
    }
    Err(GameError::RedealLimit { attempts: max_deals })
}

/// Free play: one round, winner by chance.
///
/// Under `TiePolicy::Report` a tie comes back as `Outcome::Tie`; under
/// `TiePolicy::Redeal` the round is dealt again up to `max_deals` times.
pub fn play_free<R: Rng + ?Sized>(
    rng: &mut R,
    policy: TiePolicy,
    max_deals: usize,
) -> Result<(Round, Outcome), GameError> {
    match policy {
        TiePolicy::Report => {
            let round = Round::deal(rng);
            let outcome = round.resolve();
            log::debug!("free play outcome: {outcome:?}");
            Ok((round, outcome))
        }
        TiePolicy::Redeal => {
            let (round, winner) = deal_until_winner(rng, max_deals)?;
            Ok((round, Outcome::Winner(winner)))
        }
    }
}

/// Controlled outcome: deal until someone wins outright, hand the winning
/// name to `seat`, then re-evaluate and re-resolve the relabeled table.
///
/// The returned players are sorted by name and the winner's name is `seat.name()`.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use teen_patti::game::{play_controlled, Seat, DEFAULT_MAX_DEALS};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let (round, outcome) = play_controlled(&mut rng, Seat::B, DEFAULT_MAX_DEALS).unwrap();
/// let winner = outcome.winner().unwrap();
/// assert_eq!(round.players()[winner].name(), "Player B");
/// ```
pub fn play_controlled<R: Rng + ?Sized>(
    rng: &mut R,
    seat: Seat,
    max_deals: usize,
) -> Result<(Round, Outcome), GameError> {
    let (mut round, natural) = deal_until_winner(rng, max_deals)?;
    round.relabel(seat, natural);
    round.reevaluate();
    round.sort_by_name();
    let outcome = round.resolve();
    debug_assert_eq!(
        outcome.winner().map(|i| round.players[i].name.as_str()),
        Some(seat.name()),
        "relabeling must hand the win to the selected seat"
    );
    Ok((round, outcome))
}

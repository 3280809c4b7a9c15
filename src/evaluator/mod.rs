pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod sequence_info;
pub(crate) mod suit_info;

use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Hand category from weakest to strongest. The discriminant is the category rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    Color = 3,
    Sequence = 4,
    PureSequence = 5,
    Trail = 6,
}

impl Category {
    /// Strongest first.
    pub const ALL: [Category; 6] = [
        Category::Trail,
        Category::PureSequence,
        Category::Sequence,
        Category::Color,
        Category::Pair,
        Category::HighCard,
    ];

    /// Integer rank 1..=6, higher is better.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::Color => "Color",
            Category::Sequence => "Sequence",
            Category::PureSequence => "Pure Sequence",
            Category::Trail => "Trail",
        }
    }

    /// Flat tiebreak for every category but High Card, whose tiebreak depends on the cards.
    pub const fn fixed_tiebreak(self) -> Option<u8> {
        match self {
            Category::Trail => Some(100),
            Category::PureSequence => Some(90),
            Category::Sequence => Some(80),
            Category::Color => Some(70),
            Category::Pair => Some(60),
            Category::HighCard => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparable hand strength: category rank first, tiebreak second.
///
/// Tiebreaks only mean something between equal category ranks, which the
/// derived lexicographic ordering already guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    category_rank: u8,
    tiebreak: u8,
}

impl HandValue {
    pub const fn new(category: Category, tiebreak: u8) -> Self {
        Self { category_rank: category.rank(), tiebreak }
    }

    pub const fn category_rank(self) -> u8 {
        self.category_rank
    }

    pub const fn tiebreak(self) -> u8 {
        self.tiebreak
    }
}

/// Evaluation result for one hand. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub(crate) const fn new(category: Category, value: HandValue) -> Self {
        Self { category, value }
    }

    pub const fn value(&self) -> HandValue {
        self.value
    }

    pub const fn category_rank(&self) -> u8 {
        self.value.category_rank()
    }

    pub const fn tiebreak(&self) -> u8 {
        self.value.tiebreak()
    }

    pub const fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Classify a hand. Categories overlap, so they are tried in precedence order
/// Trail, Pure Sequence, Sequence, Color, Pair, High Card and the first match wins.
///
/// ```
/// use teen_patti::evaluator::{classify, Category};
/// use teen_patti::hand::Hand;
///
/// let hand: Hand = "As Kh Qd".parse().unwrap();
/// assert_eq!(classify(&hand), Category::Sequence);
/// ```
pub fn classify(hand: &Hand) -> Category {
    use detector::DETECTORS;
    let analysis = hand_analysis::HandAnalysis::new(hand);
    DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.category())
        .unwrap_or(Category::HighCard)
}

/// Map a classified hand to its comparable value.
///
/// High Card scores the best face value in the hand (A=14 ... 2=2); every
/// other category scores its flat constant.
pub fn rank(hand: &Hand, category: Category) -> HandValue {
    let tiebreak = category
        .fixed_tiebreak()
        .unwrap_or_else(|| hand.iter().map(|c| c.rank().value()).max().unwrap_or(0));
    HandValue::new(category, tiebreak)
}

/// Classify and rank in one step. Both game modes evaluate through here.
///
/// ```
/// use teen_patti::evaluator::{evaluate, Category};
/// use teen_patti::hand::Hand;
///
/// let e = evaluate(&"2s 5h 9d".parse().unwrap());
/// assert_eq!(e.category, Category::HighCard);
/// assert_eq!(e.tiebreak(), 9);
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    let category = classify(hand);
    Evaluation::new(category, rank(hand, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn category_ranks_are_one_through_six() {
        let ranks: Vec<u8> = Category::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![6, 5, 4, 3, 2, 1]);
        assert!(Category::Trail > Category::PureSequence);
        assert!(Category::Pair > Category::HighCard);
    }

    #[test]
    fn fixed_tiebreaks() {
        assert_eq!(evaluate(&hand("7s 7h 7d")).tiebreak(), 100);
        assert_eq!(evaluate(&hand("As Ks Qs")).tiebreak(), 90);
        assert_eq!(evaluate(&hand("As Kh Qd")).tiebreak(), 80);
        assert_eq!(evaluate(&hand("As Ks 5s")).tiebreak(), 70);
        assert_eq!(evaluate(&hand("9s 9h 2d")).tiebreak(), 60);
    }

    #[test]
    fn high_card_tiebreak_is_best_face_value() {
        assert_eq!(evaluate(&hand("Ah 3d Jc")).tiebreak(), 14);
        assert_eq!(evaluate(&hand("2s 5h 9d")).tiebreak(), 9);
        assert_eq!(evaluate(&hand("Kh 3d 10c")).tiebreak(), 13);
    }

    #[test]
    fn category_beats_tiebreak() {
        let high = evaluate(&hand("Ah Kd 9c"));
        let pair = evaluate(&hand("2s 2h 3d"));
        assert!(pair > high);
        assert!(high.tiebreak() < pair.tiebreak());
    }

    #[test]
    fn pairs_compare_equal_regardless_of_pair_rank() {
        let aces = evaluate(&hand("As Ah Kd"));
        let twos = evaluate(&hand("2s 2h 3d"));
        assert_eq!(aces, twos);
    }

    #[test]
    fn evaluation_exposes_label_and_rank() {
        let e = evaluate(&hand("As Ks Qs"));
        assert_eq!(e.label(), "Pure Sequence");
        assert_eq!(e.category_rank(), 5);
        assert_eq!(e.category.to_string(), "Pure Sequence");
    }
}

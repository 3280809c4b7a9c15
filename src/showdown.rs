use crate::evaluator::Evaluation;
use crate::game::Player;

/// Result of comparing every hand at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    /// Index of the single strongest hand.
    Winner(usize),
    /// Indices sharing the strongest value. Empty only for an empty table.
    Tie(Vec<usize>),
}

impl Outcome {
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Winner(i) => Some(*i),
            Outcome::Tie(_) => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie(_))
    }
}

/// Pick the unique greatest (category rank, tiebreak).
///
/// Two or more hands sharing the maximum is a tie, never an arbitrary pick.
///
/// ```
/// use teen_patti::evaluator::evaluate;
/// use teen_patti::showdown::{resolve, Outcome};
///
/// let evals = [
///     evaluate(&"9s 9h 2d".parse().unwrap()),
///     evaluate(&"As Kh Qd".parse().unwrap()),
///     evaluate(&"2s 5h 9d".parse().unwrap()),
/// ];
/// assert_eq!(resolve(&evals), Outcome::Winner(1));
/// ```
pub fn resolve(evaluations: &[Evaluation]) -> Outcome {
    let Some(best) = evaluations.iter().max() else {
        return Outcome::Tie(Vec::new());
    };
    let top: Vec<usize> = evaluations
        .iter()
        .enumerate()
        .filter(|(_, e)| *e == best)
        .map(|(i, _)| i)
        .collect();
    match top.as_slice() {
        [only] => Outcome::Winner(*only),
        _ => Outcome::Tie(top),
    }
}

/// `resolve` over the players' current evaluations, in table order.
pub fn resolve_players(players: &[Player]) -> Outcome {
    let evaluations: Vec<Evaluation> = players.iter().map(|p| p.evaluation()).collect();
    resolve(&evaluations)
}

use crate::cards::Rank;

/// The only run this game recognises.
pub const RUN: [Rank; 3] = [Rank::Ace, Rank::King, Rank::Queen];

/// Whether the hand's ranks are exactly {A, K, Q}.
///
/// Other consecutive triples (2-3-4, J-Q-K, Q-K-A wrapping to 2) are not runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceInfo {
    pub is_sequence: bool,
}

impl SequenceInfo {
    /// `ranks_desc` must be sorted high to low.
    pub fn detect(ranks_desc: &[Rank; 3]) -> Self {
        SequenceInfo { is_sequence: *ranks_desc == RUN }
    }
}

use super::rank_groups::RankGroups;
use super::sequence_info::SequenceInfo;
use super::suit_info::SuitInfo;
use crate::cards::Rank;
use crate::hand::Hand;

/// Pre-computed analysis of a 3-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub ranks_desc: [Rank; 3],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub sequence_info: SequenceInfo,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let cards = hand.cards();
        let mut ranks_desc = cards.map(|c| c.rank());
        ranks_desc.sort_by(|a, b| b.cmp(a));

        let mut rank_counts = [0u8; 15];
        for rank in ranks_desc {
            rank_counts[rank.value() as usize] += 1;
        }

        Self {
            ranks_desc,
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(cards),
            sequence_info: SequenceInfo::detect(&ranks_desc),
        }
    }
}

use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: 9 9 2 groups as [(Nine, 2), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by face value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Number of distinct ranks in the hand.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Returns the rank held three times, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// Returns the rank held exactly twice, if present.
    pub fn pair(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 2).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

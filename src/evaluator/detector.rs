use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category.
///
/// Detectors are not mutually exclusive (a pure sequence is also a color);
/// `DETECTORS` fixes the order in which they are consulted.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn category(&self) -> Category;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Trail: all three cards share a rank
pub struct TrailDetector;

impl CategoryDetector for TrailDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some()
    }

    fn category(&self) -> Category {
        Category::Trail
    }
}

/// Pure Sequence: A, K, Q of one suit
pub struct PureSequenceDetector;

impl CategoryDetector for PureSequenceDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_color && analysis.sequence_info.is_sequence
    }

    fn category(&self) -> Category {
        Category::PureSequence
    }
}

/// Sequence: A, K, Q in any suits
pub struct SequenceDetector;

impl CategoryDetector for SequenceDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.sequence_info.is_sequence
    }

    fn category(&self) -> Category {
        Category::Sequence
    }
}

/// Color: all three cards share a suit
pub struct ColorDetector;

impl CategoryDetector for ColorDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_color
    }

    fn category(&self) -> Category {
        Category::Color
    }
}

/// Pair: exactly two distinct ranks
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.distinct() == 2
    }

    fn category(&self) -> Category {
        Category::Pair
    }
}

/// High Card: fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn category(&self) -> Category {
        Category::HighCard
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 6] = [
    &TrailDetector,
    &PureSequenceDetector,
    &SequenceDetector,
    &ColorDetector,
    &PairDetector,
    &HighCardDetector,
];

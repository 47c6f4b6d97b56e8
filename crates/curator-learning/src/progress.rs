//! Synthetic progress indicators.
//!
//! Nothing here measures a classifier. The "accuracy" is a saturating curve
//! of the labeled fraction, and the confidence histogram is a fixed
//! allocation table picked by that curve's tier.

use curator_core::constants::{
    SYNTHETIC_ACCURACY_CEILING, SYNTHETIC_ACCURACY_FLOOR, SYNTHETIC_ACCURACY_RATE,
    SYNTHETIC_ACCURACY_SPAN,
};
use curator_core::models::ConfidenceDistribution;

/// `min(0.5 + 0.45 * (1 - e^(-5 * labeled/total)), 0.95)`.
pub fn synthetic_accuracy(labeled: usize, total: usize) -> f64 {
    if total == 0 {
        return SYNTHETIC_ACCURACY_FLOOR;
    }
    let progress = labeled as f64 / total as f64;
    let value = SYNTHETIC_ACCURACY_FLOOR
        + SYNTHETIC_ACCURACY_SPAN * (1.0 - (-SYNTHETIC_ACCURACY_RATE * progress).exp());
    value.min(SYNTHETIC_ACCURACY_CEILING)
}

/// Coarse tier of the synthetic accuracy that selects an allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// accuracy > 0.9
    High,
    /// 0.8 < accuracy <= 0.9
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn for_accuracy(accuracy: f64) -> Self {
        if accuracy > 0.9 {
            Self::High
        } else if accuracy > 0.8 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Bucket fractions, highest-confidence bucket first.
    pub fn allocation(self) -> [f64; 6] {
        match self {
            Self::High => [0.4, 0.3, 0.2, 0.05, 0.03, 0.02],
            Self::Medium => [0.2, 0.4, 0.2, 0.1, 0.05, 0.05],
            Self::Low => [0.05, 0.15, 0.2, 0.3, 0.2, 0.1],
        }
    }
}

/// Spread `unlabeled` over the buckets of the tier active at `accuracy`,
/// truncating each share.
pub fn confidence_distribution(accuracy: f64, unlabeled: usize) -> ConfidenceDistribution {
    let fractions = ConfidenceTier::for_accuracy(accuracy).allocation();
    let mut counts = [0usize; 6];
    for (count, fraction) in counts.iter_mut().zip(fractions) {
        *count = (unlabeled as f64 * fraction) as usize;
    }
    ConfidenceDistribution::new(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::models::ConfidenceBucket;

    #[test]
    fn curve_starts_at_floor() {
        assert_eq!(synthetic_accuracy(0, 10), 0.5);
    }

    #[test]
    fn curve_never_reaches_ceiling() {
        let full = synthetic_accuracy(10, 10);
        assert!(full < 0.95);
        assert!((full - (0.5 + 0.45 * (1.0 - (-5.0f64).exp()))).abs() < 1e-12);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ConfidenceTier::for_accuracy(0.95), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::for_accuracy(0.9), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::for_accuracy(0.85), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::for_accuracy(0.8), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::for_accuracy(0.0), ConfidenceTier::Low);
    }

    #[test]
    fn low_tier_allocation_for_hundred_items() {
        let dist = confidence_distribution(0.6, 100);
        assert_eq!(dist.get(ConfidenceBucket::From90To100), 5);
        assert_eq!(dist.get(ConfidenceBucket::From60To69), 30);
        assert_eq!(dist.get(ConfidenceBucket::Below50), 10);
        assert_eq!(dist.total(), 100);
    }

    #[test]
    fn truncation_may_lose_items() {
        let dist = confidence_distribution(0.95, 7);
        // 2.8, 2.1, 1.4, 0.35, 0.21, 0.14 truncate to 2, 2, 1, 0, 0, 0.
        assert_eq!(dist.total(), 5);
    }
}

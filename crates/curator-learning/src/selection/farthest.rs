//! Farthest unlabeled item from a reference point.

use std::collections::BTreeSet;

use curator_core::models::FeatureMatrix;

use crate::geometry::squared_distance_to;

/// Argmax of squared distance from `point` over unlabeled rows. Labeled rows
/// never compete; ties go to the lowest index.
pub fn farthest_unlabeled(
    features: &FeatureMatrix,
    point: &[f64],
    labeled: &BTreeSet<usize>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, row) in features.iter_rows().enumerate() {
        if labeled.contains(&i) {
            continue;
        }
        let d = squared_distance_to(point, row);
        if best.map_or(true, |(_, bd)| d > bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_labeled_rows() {
        let m = FeatureMatrix::from_rows(vec![vec![0.0], vec![100.0], vec![50.0]]).unwrap();
        let labeled: BTreeSet<usize> = [0, 1].into();
        assert_eq!(farthest_unlabeled(&m, &[0.0], &labeled), Some(2));
    }

    #[test]
    fn zero_vectors_still_selectable() {
        let m = FeatureMatrix::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let labeled: BTreeSet<usize> = [0].into();
        assert_eq!(farthest_unlabeled(&m, &[0.0, 0.0], &labeled), Some(1));
    }

    #[test]
    fn all_labeled_is_none() {
        let m = FeatureMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let labeled: BTreeSet<usize> = [0].into();
        assert_eq!(farthest_unlabeled(&m, &[0.0], &labeled), None);
    }
}

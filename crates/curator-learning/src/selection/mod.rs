//! Phase-based choice of the next item to label.
//!
//! The phase is re-derived from the label state on every call; no phase flag
//! is stored.

pub mod boundary;
pub mod cold_start;
pub mod farthest;

use std::collections::{BTreeMap, BTreeSet};

use curator_core::models::FeatureMatrix;

use crate::geometry::mean_of_rows;

/// Which rule produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    /// No labels yet: first item of the globally farthest pair.
    ColdStart,
    /// One label: farthest unlabeled item from it.
    SecondPick,
    /// Two or more classes: unlabeled item with the smallest projection onto
    /// the centroid difference.
    BoundaryRefinement,
    /// One class, or degenerate centroids: farthest from the labeled center.
    SingleClassFallback,
}

/// A chosen internal index and the phase that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub phase: SelectionPhase,
}

/// Pick the next index. Returns `None` only when no unlabeled item remains
/// (or the matrix is empty).
pub fn select_next(
    features: &FeatureMatrix,
    labeled: &BTreeSet<usize>,
    centroids: &BTreeMap<String, Vec<f64>>,
) -> Option<Selection> {
    if features.is_empty() || labeled.len() >= features.rows() {
        return None;
    }

    match labeled.len() {
        0 => cold_start::farthest_pair(features).map(|pair| Selection {
            index: pair.first,
            phase: SelectionPhase::ColdStart,
        }),
        1 => {
            let anchor = *labeled.iter().next()?;
            let point: Vec<f64> = features.row(anchor).iter().map(|x| *x as f64).collect();
            farthest::farthest_unlabeled(features, &point, labeled).map(|index| Selection {
                index,
                phase: SelectionPhase::SecondPick,
            })
        }
        _ => {
            if centroids.len() >= 2 {
                if let Some(boundary) = boundary::Boundary::from_centroids(centroids) {
                    if let Some(index) = boundary.closest_unlabeled(features, labeled) {
                        return Some(Selection {
                            index,
                            phase: SelectionPhase::BoundaryRefinement,
                        });
                    }
                }
            }
            let center = mean_of_rows(features, labeled.iter().copied())?;
            farthest::farthest_unlabeled(features, &center, labeled).map(|index| Selection {
                index,
                phase: SelectionPhase::SingleClassFallback,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> FeatureMatrix {
        FeatureMatrix::from_rows((0..n).map(|i| vec![i as f32]).collect()).unwrap()
    }

    #[test]
    fn empty_matrix_selects_nothing() {
        let m = FeatureMatrix::from_rows(vec![]).unwrap();
        assert!(select_next(&m, &BTreeSet::new(), &BTreeMap::new()).is_none());
    }

    #[test]
    fn fully_labeled_selects_nothing() {
        let labeled: BTreeSet<usize> = (0..3).collect();
        assert!(select_next(&line(3), &labeled, &BTreeMap::new()).is_none());
    }

    #[test]
    fn single_class_falls_back_to_farthest_from_center() {
        let features = line(6);
        let labeled: BTreeSet<usize> = [0, 1].into();
        let centroids: BTreeMap<String, Vec<f64>> = [("A".to_string(), vec![0.5])].into();
        let selection = select_next(&features, &labeled, &centroids).unwrap();
        assert_eq!(selection.phase, SelectionPhase::SingleClassFallback);
        assert_eq!(selection.index, 5);
    }

    #[test]
    fn identical_centroids_fall_back() {
        let features = line(6);
        let labeled: BTreeSet<usize> = [2, 3].into();
        let centroids: BTreeMap<String, Vec<f64>> =
            [("A".to_string(), vec![2.5]), ("B".to_string(), vec![2.5])].into();
        let selection = select_next(&features, &labeled, &centroids).unwrap();
        assert_eq!(selection.phase, SelectionPhase::SingleClassFallback);
        // Center 2.5: items 0 and 5 are equally far; the lower index wins.
        assert_eq!(selection.index, 0);
    }
}

//! Per-class centroids, always recomputed from scratch.

use std::collections::BTreeMap;

use curator_core::models::FeatureMatrix;

use crate::geometry::mean_of_rows;

/// Mean feature vector of every class present in `assignments`.
///
/// Members are summed in ascending index order, so identical assignments
/// always produce bit-identical centroids.
pub fn compute_centroids(
    features: &FeatureMatrix,
    assignments: &BTreeMap<usize, String>,
) -> BTreeMap<String, Vec<f64>> {
    let mut members: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, class) in assignments {
        members.entry(class.as_str()).or_default().push(*index);
    }

    members
        .into_iter()
        .filter_map(|(class, indices)| {
            mean_of_rows(features, indices).map(|c| (class.to_string(), c))
        })
        .collect()
}

/// Number of labeled items carrying each class tag.
pub fn class_counts(assignments: &BTreeMap<usize, String>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for class in assignments.values() {
        *counts.entry(class.clone()).or_insert(0) += 1;
    }
    counts
}

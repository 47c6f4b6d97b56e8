//! Cold start: the globally farthest pair of items.

use curator_core::models::FeatureMatrix;
use rayon::prelude::*;

use crate::geometry::squared_distance;

/// The maximal entry of the pairwise squared-distance matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarthestPair {
    /// Row of the maximal entry; this item is offered first.
    pub first: usize,
    /// Column of the maximal entry.
    pub second: usize,
    pub squared_distance: f64,
}

/// Scan the full N×N squared-distance matrix and return the first maximal
/// entry in row-major order.
///
/// Rows are scanned in parallel; the reduction is sequential so ties always
/// resolve to the lowest row, then the lowest column.
pub fn farthest_pair(features: &FeatureMatrix) -> Option<FarthestPair> {
    let n = features.rows();
    if n == 0 {
        return None;
    }

    let row_maxima: Vec<(usize, f64)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let a = features.row(i);
            let mut best = (0usize, f64::NEG_INFINITY);
            for j in 0..n {
                let d = squared_distance(a, features.row(j));
                if d > best.1 {
                    best = (j, d);
                }
            }
            best
        })
        .collect();

    let mut best: Option<FarthestPair> = None;
    for (i, (j, d)) in row_maxima.into_iter().enumerate() {
        if best.map_or(true, |b| d > b.squared_distance) {
            best = Some(FarthestPair {
                first: i,
                second: j,
                squared_distance: d,
            });
        }
    }
    best
}

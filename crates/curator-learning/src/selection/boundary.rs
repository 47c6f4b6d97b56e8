//! Boundary refinement between two class centroids.
//!
//! The separating direction is `w = centroid_A - centroid_B`. Items are
//! ranked by the magnitude of their projection onto it, `|x · w|`.

use std::collections::{BTreeMap, BTreeSet};

use curator_core::models::FeatureMatrix;

use crate::geometry::dot;

/// A linear decision boundary between two classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub positive_class: String,
    pub negative_class: String,
    direction: Vec<f64>,
}

impl Boundary {
    /// Boundary between the first two classes in lexicographic tag order.
    ///
    /// Returns `None` with fewer than two centroids or when the centroids
    /// coincide (zero-length direction).
    pub fn from_centroids(centroids: &BTreeMap<String, Vec<f64>>) -> Option<Self> {
        let mut iter = centroids.iter();
        let (class_a, a) = iter.next()?;
        let (class_b, b) = iter.next()?;

        let direction: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
        let norm_sq: f64 = direction.iter().map(|w| w * w).sum();
        if norm_sq == 0.0 || !norm_sq.is_finite() {
            return None;
        }
        Some(Self {
            positive_class: class_a.clone(),
            negative_class: class_b.clone(),
            direction,
        })
    }

    pub fn direction(&self) -> &[f64] {
        &self.direction
    }

    /// Absolute projection of a row onto the separating direction.
    pub fn score(&self, row: &[f32]) -> f64 {
        dot(row, &self.direction).abs()
    }

    /// Argmin of [`Boundary::score`] over unlabeled rows; ties go to the lowest index.
    pub fn closest_unlabeled(
        &self,
        features: &FeatureMatrix,
        labeled: &BTreeSet<usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, row) in features.iter_rows().enumerate() {
            if labeled.contains(&i) {
                continue;
            }
            let s = self.score(row);
            if best.map_or(true, |(_, bs)| s < bs) {
                best = Some((i, s));
            }
        }
        best.map(|(i, _)| i)
    }
}

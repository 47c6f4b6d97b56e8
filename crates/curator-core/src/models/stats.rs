use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Synthetic confidence ranges reported for unlabeled items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfidenceBucket {
    From90To100,
    From80To89,
    From70To79,
    From60To69,
    From50To59,
    Below50,
}

impl ConfidenceBucket {
    pub const ALL: [ConfidenceBucket; 6] = [
        Self::From90To100,
        Self::From80To89,
        Self::From70To79,
        Self::From60To69,
        Self::From50To59,
        Self::Below50,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::From90To100 => "90-100%",
            Self::From80To89 => "80-89%",
            Self::From70To79 => "70-79%",
            Self::From60To69 => "60-69%",
            Self::From50To59 => "50-59%",
            Self::Below50 => "<50%",
        }
    }
}

/// Per-bucket item counts, in [`ConfidenceBucket::ALL`] order.
///
/// Counts are truncated products of fixed fractions and need not sum to the
/// number of unlabeled items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfidenceDistribution {
    counts: [usize; 6],
}

impl ConfidenceDistribution {
    pub fn new(counts: [usize; 6]) -> Self {
        Self { counts }
    }

    pub fn get(&self, bucket: ConfidenceBucket) -> usize {
        self.counts[bucket as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConfidenceBucket, usize)> + '_ {
        ConfidenceBucket::ALL
            .iter()
            .map(move |b| (*b, self.counts[*b as usize]))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for ConfidenceDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (bucket, count) in self.iter() {
            map.serialize_entry(bucket.label(), &count)?;
        }
        map.end()
    }
}

/// Read-only snapshot of labeling progress.
///
/// `accuracy` and `confidence_distribution` are synthetic progress
/// indicators driven by the labeled fraction, not classifier measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStats {
    pub accuracy: f64,
    pub classified_count: usize,
    pub total_count: usize,
    pub confidence_distribution: ConfidenceDistribution,
    pub learning_curve: Vec<f64>,
    pub class_distribution: BTreeMap<String, usize>,
}

//! SelectionEngine: owns the feature matrix and the label state, picks the
//! next item, and folds labels into centroids and the progress curve.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use curator_core::errors::{CuratorError, CuratorResult};
use curator_core::models::{EngineSnapshot, FeatureMatrix, ItemRecord, Label, ModelStats};
use tracing::{debug, info, warn};

use crate::centroids::{class_counts, compute_centroids};
use crate::progress::{confidence_distribution, synthetic_accuracy};
use crate::selection::{self, Selection};
use crate::snapshot;

/// Active-labeling state over a fixed item collection.
///
/// The collection never grows in place: adding an item means building a new
/// engine with [`SelectionEngine::rebuild`]. Mutation happens only through
/// [`SelectionEngine::record_label`] and [`SelectionEngine::restore`]; callers
/// serialize access to one instance.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    features: FeatureMatrix,
    items: Vec<ItemRecord>,
    index_by_id: HashMap<i64, usize>,
    labeled: BTreeSet<usize>,
    raw_labels: BTreeMap<usize, Label>,
    class_assignments: BTreeMap<usize, String>,
    /// Derived from `class_assignments`; never persisted.
    centroids: BTreeMap<String, Vec<f64>>,
    learning_curve: Vec<f64>,
    /// Latest synthetic progress value. Not a measured accuracy.
    accuracy: f64,
}

impl SelectionEngine {
    /// Build an engine with empty label state.
    ///
    /// A row-count disagreement between `features` and `items` is logged and
    /// both are truncated to the smaller count. An empty collection is an error.
    pub fn new(features: FeatureMatrix, items: Vec<ItemRecord>) -> CuratorResult<Self> {
        let (features, mut items) = if features.rows() != items.len() {
            let mismatch = CuratorError::ShapeMismatch {
                features: features.rows(),
                items: items.len(),
            };
            let n = features.rows().min(items.len());
            warn!(error = %mismatch, truncated_to = n, "truncating to the smaller count");
            (features.truncated(n), items)
        } else {
            (features, items)
        };
        items.truncate(features.rows());

        if features.is_empty() {
            return Err(CuratorError::EmptyCollection);
        }

        let mut index_by_id = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            index_by_id.entry(item.id).or_insert(i);
        }

        info!(
            items = features.rows(),
            dims = features.dims(),
            "selection engine initialized"
        );

        Ok(Self {
            features,
            items,
            index_by_id,
            labeled: BTreeSet::new(),
            raw_labels: BTreeMap::new(),
            class_assignments: BTreeMap::new(),
            centroids: BTreeMap::new(),
            learning_curve: Vec::new(),
            accuracy: 0.0,
        })
    }

    /// A new engine over a changed collection that carries this engine's
    /// label state over. Fails with a snapshot error if the new collection no
    /// longer covers every labeled index.
    pub fn rebuild(&self, features: FeatureMatrix, items: Vec<ItemRecord>) -> CuratorResult<Self> {
        let mut engine = Self::new(features, items)?;
        engine.restore(self.snapshot())?;
        Ok(engine)
    }

    /// Number of items N.
    pub fn len(&self) -> usize {
        self.features.rows()
    }

    /// Always false: construction rejects empty collections.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn index_of(&self, item_id: i64) -> Option<usize> {
        self.index_by_id.get(&item_id).copied()
    }

    pub fn labeled_indices(&self) -> &BTreeSet<usize> {
        &self.labeled
    }

    pub fn raw_labels(&self) -> &BTreeMap<usize, Label> {
        &self.raw_labels
    }

    pub fn class_assignments(&self) -> &BTreeMap<usize, String> {
        &self.class_assignments
    }

    pub fn centroids(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.centroids
    }

    pub fn learning_curve(&self) -> &[f64] {
        &self.learning_curve
    }

    /// Latest synthetic progress value (0.0 before the first label).
    pub fn synthetic_accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Choose the next index and report which phase chose it.
    pub fn select_next(&self) -> CuratorResult<Selection> {
        if self.features.is_empty() {
            return Err(CuratorError::EmptyCollection);
        }
        let selection = selection::select_next(&self.features, &self.labeled, &self.centroids)
            .ok_or(CuratorError::ExhaustedCollection { total: self.len() })?;
        debug!(
            index = selection.index,
            phase = ?selection.phase,
            labeled = self.labeled.len(),
            "selected next item"
        );
        Ok(selection)
    }

    /// The next item to show: its internal index and a copy of its metadata.
    pub fn next_item(&self) -> CuratorResult<(usize, ItemRecord)> {
        let selection = self.select_next()?;
        Ok((selection.index, self.items[selection.index].clone()))
    }

    /// Absorb a label for the item with external id `item_id`.
    ///
    /// Re-labeling overwrites. The label's first answer becomes the class tag;
    /// an empty label clears any previous class assignment. Every call
    /// appends one value to the learning curve.
    pub fn record_label(&mut self, item_id: i64, label: Label) -> CuratorResult<()> {
        let index = self
            .index_of(item_id)
            .ok_or(CuratorError::UnknownItem { id: item_id })?;

        self.labeled.insert(index);
        let class_tag = label.class_tag().map(str::to_string);
        self.raw_labels.insert(index, label);

        match class_tag {
            Some(tag) => {
                self.class_assignments.insert(index, tag);
            }
            None => {
                self.class_assignments.remove(&index);
            }
        }
        self.centroids = compute_centroids(&self.features, &self.class_assignments);

        self.accuracy = synthetic_accuracy(self.labeled.len(), self.len());
        self.learning_curve.push(self.accuracy);

        info!(
            item_id,
            index,
            labeled = self.labeled.len(),
            classes = self.centroids.len(),
            synthetic_accuracy = self.accuracy,
            "label recorded"
        );
        Ok(())
    }

    /// Progress summary. The accuracy and confidence histogram are synthetic.
    pub fn get_stats(&self) -> ModelStats {
        let unlabeled = self.len() - self.labeled.len();
        ModelStats {
            accuracy: self.accuracy,
            classified_count: self.labeled.len(),
            total_count: self.len(),
            confidence_distribution: confidence_distribution(self.accuracy, unlabeled),
            learning_curve: self.learning_curve.clone(),
            class_distribution: class_counts(&self.class_assignments),
        }
    }

    /// The persistable part of the state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            labeled_indices: self.labeled.iter().copied().collect(),
            classifications: self.raw_labels.clone(),
            class_assignments: self.class_assignments.clone(),
            learning_curve: self.learning_curve.clone(),
            accuracy: self.accuracy,
        }
    }

    /// Replace the label state with a snapshot and recompute centroids.
    /// An invalid snapshot leaves the engine untouched.
    pub fn restore(&mut self, snapshot: EngineSnapshot) -> CuratorResult<()> {
        snapshot::validate(&snapshot, self.len())?;

        let centroids = compute_centroids(&self.features, &snapshot.class_assignments);
        self.labeled = snapshot.labeled_indices.into_iter().collect();
        self.raw_labels = snapshot.classifications;
        self.class_assignments = snapshot.class_assignments;
        self.centroids = centroids;
        self.learning_curve = snapshot.learning_curve;
        self.accuracy = snapshot.accuracy;

        debug!(
            labeled = self.labeled.len(),
            classes = self.centroids.len(),
            "engine state restored"
        );
        Ok(())
    }

    /// Overwrite `path` with the current snapshot.
    pub fn save_state(&self, path: &Path) -> CuratorResult<()> {
        snapshot::write(path, &self.snapshot())?;
        debug!(path = %path.display(), "engine state saved");
        Ok(())
    }

    /// Restore from `path`. Returns `false` when the file does not exist.
    pub fn load_state(&mut self, path: &Path) -> CuratorResult<bool> {
        match snapshot::read(path)? {
            Some(snapshot) => {
                self.restore(snapshot)?;
                info!(path = %path.display(), labeled = self.labeled.len(), "engine state loaded");
                Ok(true)
            }
            None => {
                debug!(path = %path.display(), "no saved engine state");
                Ok(false)
            }
        }
    }
}

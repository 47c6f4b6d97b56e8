//! LabelingSession: the single owner of the live selection engine.
//!
//! Every engine access goes through one mutex, so a label, a selection, a
//! snapshot save, and an engine rebuild never interleave.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use curator_core::config::CuratorConfig;
use curator_core::errors::{CuratorError, CuratorResult};
use curator_core::models::{
    FeatureMatrix, ItemRecord, Label, ModelStats, NewItem, NewQuestion, Question, SessionStatus,
};
use curator_core::traits::{ICatalog, IQuestionStore};
use curator_extraction::ExtractionEngine;
use curator_learning::SelectionEngine;
use curator_observability::tracing_setup::events;
use curator_observability::{DegradationTracker, TrackedDegradation};
use curator_storage::StorageEngine;

use crate::image_store;

/// Component name carried by extraction degradation events.
const EXTRACTION_COMPONENT: &str = "extraction";

/// Item catalog plus question store, as one shared object.
pub trait Catalog: ICatalog + IQuestionStore {}

impl<T: ICatalog + IQuestionStore> Catalog for T {}

fn lock<'a, T>(mutex: &'a Mutex<T>, resource: &'static str) -> CuratorResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| CuratorError::LockPoisoned { resource })
}

pub struct LabelingSession {
    catalog: Arc<dyn Catalog>,
    engine: Mutex<Option<SelectionEngine>>,
    extraction: Mutex<ExtractionEngine>,
    degradations: Mutex<DegradationTracker>,
    config: CuratorConfig,
}

impl LabelingSession {
    /// Open the catalog and extraction engine named by `config` and build the
    /// selection engine if the catalog already holds features.
    pub fn open(config: CuratorConfig) -> CuratorResult<Self> {
        let catalog = StorageEngine::from_config(&config.storage)?;
        let extraction = ExtractionEngine::new(config.extraction.clone());
        Self::with_parts(config, Arc::new(catalog), extraction)
    }

    /// Assemble a session from explicit collaborators.
    pub fn with_parts(
        config: CuratorConfig,
        catalog: Arc<dyn Catalog>,
        extraction: ExtractionEngine,
    ) -> CuratorResult<Self> {
        let session = Self {
            catalog,
            engine: Mutex::new(None),
            extraction: Mutex::new(extraction),
            degradations: Mutex::new(DegradationTracker::new()),
            config,
        };

        let mut engine = session.build_engine()?;
        if let Some(engine) = engine.as_mut() {
            if session.config.session.load_snapshot_on_start {
                // A bad snapshot must not keep the session from starting.
                if let Err(e) = engine.load_state(&session.snapshot_path()) {
                    warn!(error = %e, "ignoring unusable snapshot at startup");
                }
            }
        }
        *lock(&session.engine, "engine")? = engine;
        Ok(session)
    }

    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(&self.config.storage.snapshot_path)
    }

    /// A fresh engine over the current catalog, or `None` when the catalog
    /// has no items or no feature rows.
    fn build_engine(&self) -> CuratorResult<Option<SelectionEngine>> {
        let Some((features, items)) = self.load_collection()? else {
            return Ok(None);
        };
        match SelectionEngine::new(features, items) {
            Ok(engine) => Ok(Some(engine)),
            Err(CuratorError::EmptyCollection) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn load_collection(&self) -> CuratorResult<Option<(FeatureMatrix, Vec<ItemRecord>)>> {
        let Some(features) = self.catalog.load_features()? else {
            debug!("catalog has no feature rows");
            return Ok(None);
        };
        let items = self.catalog.list_items()?;
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some((features, items)))
    }

    /// Rebuild against the current catalog, carrying the label state over.
    fn refresh_engine(&self, slot: &mut Option<SelectionEngine>) -> CuratorResult<()> {
        let Some((features, items)) = self.load_collection()? else {
            return Ok(());
        };
        let rebuilt = match slot.as_ref() {
            Some(current) => current.rebuild(features, items)?,
            None => {
                let mut fresh = SelectionEngine::new(features, items)?;
                if self.config.session.load_snapshot_on_start {
                    if let Err(e) = fresh.load_state(&self.snapshot_path()) {
                        warn!(error = %e, "ignoring unusable snapshot for new engine");
                    }
                }
                fresh
            }
        };
        events::engine_rebuilt(rebuilt.len(), rebuilt.labeled_indices().len());
        *slot = Some(rebuilt);
        Ok(())
    }

    /// Move pending extraction events into the tracker. When `extracted` is
    /// set and nothing was pending, the last extraction ran without a
    /// fallback, so earlier extraction degradations count as recovered.
    fn absorb_degradations(&self, extracted: bool) -> CuratorResult<()> {
        let drained = lock(&self.extraction, "extraction")?.drain_degradation_events();
        let mut tracker = lock(&self.degradations, "degradations")?;
        if !drained.is_empty() {
            tracker.record_all(drained);
        } else if extracted {
            tracker.mark_recovered(EXTRACTION_COMPONENT);
        }
        Ok(())
    }

    /// Retained degradation events, oldest first.
    pub fn recent_degradations(&self) -> CuratorResult<Vec<TrackedDegradation>> {
        self.absorb_degradations(false)?;
        Ok(lock(&self.degradations, "degradations")?.recent().cloned().collect())
    }

    // ── Wrapped engine operations ─────────────────────────────────────────

    /// The item the engine wants labeled next.
    pub fn next_item(&self) -> CuratorResult<ItemRecord> {
        let guard = lock(&self.engine, "engine")?;
        let engine = guard.as_ref().ok_or(CuratorError::EmptyCollection)?;
        let span =
            curator_observability::selection_span!(engine.labeled_indices().len(), engine.len());
        let _entered = span.enter();
        let (_, item) = engine.next_item()?;
        Ok(item)
    }

    /// Record a label and, with autosave on, persist the snapshot.
    ///
    /// If the save fails the label stays recorded in memory and the I/O
    /// error is returned.
    pub fn submit_label(&self, item_id: i64, label: Label) -> CuratorResult<()> {
        let mut guard = lock(&self.engine, "engine")?;
        let engine = guard.as_mut().ok_or(CuratorError::EmptyCollection)?;
        let span = curator_observability::labeling_span!(item_id);
        let _entered = span.enter();

        engine.record_label(item_id, label)?;
        if self.config.session.autosave {
            let path = self.snapshot_path();
            let snapshot_span =
                curator_observability::snapshot_span!("save", path.display());
            let _saving = snapshot_span.enter();
            engine.save_state(&path)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> CuratorResult<ModelStats> {
        let guard = lock(&self.engine, "engine")?;
        let engine = guard.as_ref().ok_or(CuratorError::EmptyCollection)?;
        Ok(engine.get_stats())
    }

    /// Persist the current engine state to the snapshot file.
    pub fn save(&self) -> CuratorResult<()> {
        let guard = lock(&self.engine, "engine")?;
        let engine = guard.as_ref().ok_or(CuratorError::EmptyCollection)?;
        let path = self.snapshot_path();
        let span = curator_observability::snapshot_span!("save", path.display());
        let _entered = span.enter();
        engine.save_state(&path)
    }

    /// Rebuild the engine from the catalog and restore the snapshot file.
    ///
    /// Returns whether a snapshot was found. On any failure the previous
    /// engine stays in place.
    pub fn reload(&self) -> CuratorResult<bool> {
        let mut guard = lock(&self.engine, "engine")?;
        let path = self.snapshot_path();
        let span = curator_observability::snapshot_span!("load", path.display());
        let _entered = span.enter();

        let Some(mut fresh) = self.build_engine()? else {
            return Err(CuratorError::EmptyCollection);
        };
        let restored = fresh.load_state(&path)?;
        info!(restored, items = fresh.len(), "engine reloaded");
        *guard = Some(fresh);
        Ok(restored)
    }

    /// Extract the image's features, copy it into the images directory,
    /// append the item, and rebuild the engine with the label state carried
    /// over. Nothing is written when the extracted width does not match the
    /// stored matrix.
    pub fn add_item(
        &self,
        title: &str,
        artist: &str,
        year: i32,
        image: &Path,
    ) -> CuratorResult<ItemRecord> {
        let mut guard = lock(&self.engine, "engine")?;

        // An unreadable upload is the caller's error, not an extraction fallback.
        std::fs::File::open(image)?;

        let features = {
            let mut extraction = lock(&self.extraction, "extraction")?;
            let span = curator_observability::extraction_span!(
                extraction.active_provider(),
                extraction.dimensions()
            );
            let _entered = span.enter();
            extraction.extract_file_or_zero(image)
        };
        self.absorb_degradations(true)?;

        let expected = match guard.as_ref() {
            Some(engine) => Some(engine.features().dims()),
            None => self.catalog.load_features()?.map(|m| m.dims()),
        };
        if let Some(expected) = expected.filter(|d| *d != features.len()) {
            return Err(CuratorError::InvalidFeatureRow {
                row: self.catalog.feature_row_count()?,
                expected,
                actual: features.len(),
            });
        }

        let images_dir = Path::new(&self.config.storage.images_dir);
        image_store::store_image(images_dir, image, title, artist)?;
        let file_name = image_store::image_file_name(title, artist);

        let record = self.catalog.add_item_with_features(
            NewItem {
                title: title.to_string(),
                artist: artist.to_string(),
                year,
                image_path: image_store::image_url(&file_name),
            },
            &features,
        )?;

        self.refresh_engine(&mut guard)?;
        events::item_added(record.id, self.catalog.item_count()?);
        Ok(record)
    }

    /// Append metadata rows and replace the stored feature matrix, then
    /// rebuild the engine. Returns the stored records.
    pub fn import(
        &self,
        items: Vec<NewItem>,
        features: Option<FeatureMatrix>,
    ) -> CuratorResult<Vec<ItemRecord>> {
        let mut guard = lock(&self.engine, "engine")?;
        let stored = self.catalog.import_items(&items)?;
        if let Some(features) = &features {
            self.catalog.replace_features(features)?;
        }

        let total = self.catalog.item_count()?;
        let rows = self.catalog.feature_row_count()?;
        if rows != total {
            warn!(
                error = %CuratorError::ShapeMismatch { features: rows, items: total },
                "imported catalog is not aligned"
            );
        }
        events::items_imported(stored.len(), rows);

        self.refresh_engine(&mut guard)?;
        Ok(stored)
    }

    // ── Catalog browsing ──────────────────────────────────────────────────

    pub fn list_items(&self) -> CuratorResult<Vec<ItemRecord>> {
        self.catalog.list_items()
    }

    pub fn get_item(&self, id: i64) -> CuratorResult<ItemRecord> {
        self.catalog
            .get_item(id)?
            .ok_or(CuratorError::UnknownItem { id })
    }

    pub fn status(&self) -> CuratorResult<SessionStatus> {
        self.absorb_degradations(false)?;
        let feature_rows = self.catalog.feature_row_count()?;
        let engine_initialized = lock(&self.engine, "engine")?.is_some();
        let extraction_provider = lock(&self.extraction, "extraction")?
            .active_provider()
            .to_string();
        let degradations = lock(&self.degradations, "degradations")?;
        Ok(SessionStatus {
            items_count: self.catalog.item_count()?,
            feature_rows,
            features_available: feature_rows > 0,
            engine_initialized,
            extraction_provider,
            degradation_events: degradations.total(),
            active_degradations: degradations.active_count(),
        })
    }

    // ── Questions ─────────────────────────────────────────────────────────

    pub fn list_questions(&self) -> CuratorResult<Vec<Question>> {
        self.catalog.list_questions()
    }

    pub fn create_question(&self, question: NewQuestion) -> CuratorResult<Question> {
        self.catalog.create_question(question)
    }

    pub fn update_question(&self, id: i64, question: NewQuestion) -> CuratorResult<Question> {
        self.catalog.update_question(id, question)
    }

    pub fn delete_question(&self, id: i64) -> CuratorResult<()> {
        self.catalog.delete_question(id)
    }
}

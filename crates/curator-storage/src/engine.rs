//! StorageEngine: owns the connection, runs migrations at open, implements
//! ICatalog + IQuestionStore.

use std::path::Path;

use tracing::debug;

use curator_core::config::StorageConfig;
use curator_core::errors::CuratorResult;
use curator_core::models::{FeatureMatrix, ItemRecord, NewItem, NewQuestion, Question};
use curator_core::traits::{ICatalog, IQuestionStore};

use crate::connection::WriteConnection;
use crate::migrations;
use crate::queries::{feature_ops, item_ops, question_ops};
use crate::to_storage_err;

/// SQLite-backed catalog.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open (or create) the catalog file with the given busy timeout.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> CuratorResult<Self> {
        let engine = Self {
            writer: WriteConnection::open(path, busy_timeout_ms)?,
        };
        engine.initialize()?;
        debug!(path = %path.display(), "catalog opened");
        Ok(engine)
    }

    pub fn from_config(config: &StorageConfig) -> CuratorResult<Self> {
        Self::open(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    /// Open an in-memory catalog (for testing).
    pub fn open_in_memory() -> CuratorResult<Self> {
        let engine = Self {
            writer: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> CuratorResult<()> {
        self.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    pub fn schema_version(&self) -> CuratorResult<u32> {
        self.writer.with_conn_sync(migrations::current_version)
    }

    pub fn is_wal_mode(&self) -> CuratorResult<bool> {
        self.writer
            .with_conn_sync(crate::connection::pragmas::verify_wal_mode)
    }
}

impl ICatalog for StorageEngine {
    fn list_items(&self) -> CuratorResult<Vec<ItemRecord>> {
        self.writer.with_conn_sync(item_ops::list_items)
    }

    fn get_item(&self, id: i64) -> CuratorResult<Option<ItemRecord>> {
        self.writer.with_conn_sync(|conn| item_ops::get_item(conn, id))
    }

    fn item_count(&self) -> CuratorResult<usize> {
        self.writer.with_conn_sync(item_ops::count_items)
    }

    fn import_items(&self, items: &[NewItem]) -> CuratorResult<Vec<ItemRecord>> {
        self.writer
            .with_conn_sync(|conn| item_ops::bulk_append(conn, items))
    }

    fn add_item_with_features(
        &self,
        item: NewItem,
        features: &[f32],
    ) -> CuratorResult<ItemRecord> {
        self.writer.with_conn_sync(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("add_item begin: {e}")))?;

            let inserted = item_ops::append_item(&tx, item).and_then(|(record, position)| {
                feature_ops::insert_row(&tx, position, features)?;
                Ok(record)
            });

            match inserted {
                Ok(record) => {
                    tx.commit()
                        .map_err(|e| to_storage_err(format!("add_item commit: {e}")))?;
                    Ok(record)
                }
                Err(e) => {
                    let _ = tx.rollback();
                    Err(e)
                }
            }
        })
    }

    fn load_features(&self) -> CuratorResult<Option<FeatureMatrix>> {
        self.writer.with_conn_sync(feature_ops::load_matrix)
    }

    fn replace_features(&self, features: &FeatureMatrix) -> CuratorResult<()> {
        self.writer
            .with_conn_sync(|conn| feature_ops::replace_all(conn, features))
    }

    fn feature_row_count(&self) -> CuratorResult<usize> {
        self.writer.with_conn_sync(feature_ops::count_rows)
    }
}

impl IQuestionStore for StorageEngine {
    fn list_questions(&self) -> CuratorResult<Vec<Question>> {
        self.writer.with_conn_sync(question_ops::list_questions)
    }

    fn create_question(&self, question: NewQuestion) -> CuratorResult<Question> {
        self.writer
            .with_conn_sync(|conn| question_ops::create_question(conn, question))
    }

    fn update_question(&self, id: i64, question: NewQuestion) -> CuratorResult<Question> {
        self.writer
            .with_conn_sync(|conn| question_ops::update_question(conn, id, question))
    }

    fn delete_question(&self, id: i64) -> CuratorResult<()> {
        self.writer
            .with_conn_sync(|conn| question_ops::delete_question(conn, id))
    }
}

impl std::fmt::Debug for StorageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageEngine").finish_non_exhaustive()
    }
}

//! Versioned schema migrations.
//!
//! Each `vNNN_*` module exposes `migrate(conn)`. Applied versions are recorded
//! in `schema_version`; every migration runs inside its own transaction.

mod v001_catalog_tables;
mod v002_questions;

use rusqlite::{params, Connection};
use tracing::info;

use curator_core::errors::{CuratorResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> CuratorResult<()>;

const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "catalog_tables", v001_catalog_tables::migrate),
    (2, "questions", v002_questions::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> CuratorResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the recorded version.
pub fn run_migrations(conn: &Connection) -> CuratorResult<u32> {
    let current = current_version(conn)?;
    for (version, name, migrate) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration begin: {e}")))?;

        let applied = migrate(&tx).and_then(|()| {
            tx.execute(
                "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
                params![version, name],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        });

        match applied {
            Ok(()) => {
                tx.commit()
                    .map_err(|e| to_storage_err(format!("migration commit: {e}")))?;
                info!(version, name, "applied migration");
            }
            Err(e) => {
                let _ = tx.rollback();
                return Err(StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                }
                .into());
            }
        }
    }
    Ok(LATEST_VERSION.max(current))
}

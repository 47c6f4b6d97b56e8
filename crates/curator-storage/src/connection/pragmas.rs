//! PRAGMA configuration applied when a connection opens.
//!
//! WAL mode, NORMAL sync, configurable busy_timeout, foreign_keys ON.

use rusqlite::Connection;

use curator_core::errors::CuratorResult;

use crate::to_storage_err;

/// Pragmas for a file-backed catalog.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u64) -> CuratorResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -16000;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA foreign_keys = ON;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// In-memory databases have no journal to configure.
pub fn apply_memory_pragmas(conn: &Connection) -> CuratorResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> CuratorResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}

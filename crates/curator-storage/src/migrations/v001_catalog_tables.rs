//! v001: items and their feature rows.

use rusqlite::Connection;

use curator_core::errors::CuratorResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CuratorResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS items (
            id          INTEGER PRIMARY KEY,
            position    INTEGER NOT NULL UNIQUE,
            title       TEXT NOT NULL,
            artist      TEXT NOT NULL,
            year        INTEGER NOT NULL,
            image_path  TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS feature_rows (
            position    INTEGER PRIMARY KEY,
            dimensions  INTEGER NOT NULL,
            embedding   BLOB NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

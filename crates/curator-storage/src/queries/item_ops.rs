//! Insert and read item metadata rows.

use rusqlite::{params, Connection, OptionalExtension, Row};

use curator_core::errors::CuratorResult;
use curator_core::models::{ItemRecord, NewItem};

use crate::to_storage_err;

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<ItemRecord> {
    Ok(ItemRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        artist: row.get(2)?,
        year: row.get(3)?,
        image_path: row.get(4)?,
    })
}

/// All items ordered by position (the internal index).
pub fn list_items(conn: &Connection) -> CuratorResult<Vec<ItemRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, artist, year, image_path FROM items ORDER BY position",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_item)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn get_item(conn: &Connection, id: i64) -> CuratorResult<Option<ItemRecord>> {
    conn.query_row(
        "SELECT id, title, artist, year, image_path FROM items WHERE id = ?1",
        params![id],
        row_to_item,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_items(conn: &Connection) -> CuratorResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Next id: one past the current maximum, or 0 for an empty catalog.
pub fn next_item_id(conn: &Connection) -> CuratorResult<i64> {
    let max: Option<i64> = conn
        .query_row("SELECT MAX(id) FROM items", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(max.map_or(0, |m| m + 1))
}

/// Append one item at the end of the catalog. Returns the stored record and
/// its position.
pub fn append_item(conn: &Connection, item: NewItem) -> CuratorResult<(ItemRecord, usize)> {
    let id = next_item_id(conn)?;
    let position = count_items(conn)?;
    conn.execute(
        "INSERT INTO items (id, position, title, artist, year, image_path)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id,
            position as i64,
            item.title,
            item.artist,
            item.year,
            item.image_path
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok((item.with_id(id), position))
}

/// Append many items in one transaction.
pub fn bulk_append(conn: &Connection, items: &[NewItem]) -> CuratorResult<Vec<ItemRecord>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("bulk_append begin: {e}")))?;

    let mut stored = Vec::with_capacity(items.len());
    for item in items {
        match append_item(&tx, item.clone()) {
            Ok((record, _)) => stored.push(record),
            Err(e) => {
                let _ = tx.rollback();
                return Err(e);
            }
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("bulk_append commit: {e}")))?;
    Ok(stored)
}

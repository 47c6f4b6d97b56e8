//! Feature rows stored as little-endian `f32` blobs keyed by position.

use rusqlite::{params, Connection};
use tracing::warn;

use curator_core::errors::{CuratorResult, StorageError};
use curator_core::models::FeatureMatrix;

use crate::to_storage_err;

pub fn insert_row(conn: &Connection, position: usize, row: &[f32]) -> CuratorResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO feature_rows (position, dimensions, embedding)
         VALUES (?1, ?2, ?3)",
        params![position as i64, row.len() as i64, f32_vec_to_bytes(row)],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn count_rows(conn: &Connection) -> CuratorResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM feature_rows", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Load rows in position order. Reading stops at the first gap in the
/// positions so row `i` always belongs to item position `i`.
pub fn load_matrix(conn: &Connection) -> CuratorResult<Option<FeatureMatrix>> {
    let mut stmt = conn
        .prepare("SELECT position, dimensions, embedding FROM feature_rows ORDER BY position")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let position: i64 = row.get(0)?;
            let dimensions: i64 = row.get(1)?;
            let blob: Vec<u8> = row.get(2)?;
            Ok((position as usize, dimensions as usize, blob))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut matrix = Vec::new();
    for row in rows {
        let (position, dimensions, blob) = row.map_err(|e| to_storage_err(e.to_string()))?;
        if position != matrix.len() {
            warn!(
                expected = matrix.len(),
                found = position,
                "gap in stored feature rows; ignoring the remainder"
            );
            break;
        }
        matrix.push(bytes_to_f32_vec(&blob, dimensions, position)?);
    }

    if matrix.is_empty() {
        return Ok(None);
    }
    FeatureMatrix::from_rows(matrix).map(Some)
}

/// Delete every row and write `features` at positions `0..rows`.
pub fn replace_all(conn: &Connection, features: &FeatureMatrix) -> CuratorResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("replace_features begin: {e}")))?;

    let result: CuratorResult<()> = (|| {
        tx.execute("DELETE FROM feature_rows", [])
            .map_err(|e| to_storage_err(e.to_string()))?;
        for (position, row) in features.iter_rows().enumerate() {
            insert_row(&tx, position, row)?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("replace_features commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Convert f32 slice to bytes (little-endian).
pub fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to an f32 vec, checking the length against `dims`.
pub fn bytes_to_f32_vec(bytes: &[u8], dims: usize, position: usize) -> CuratorResult<Vec<f32>> {
    if bytes.len() != dims * 4 {
        return Err(StorageError::CorruptFeatureBlob {
            position,
            details: format!("{} bytes for {dims} dimensions", bytes.len()),
        }
        .into());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

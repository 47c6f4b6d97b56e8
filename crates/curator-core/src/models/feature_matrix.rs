use crate::errors::{CuratorError, CuratorResult};

/// Immutable N×D matrix of item feature vectors; row `i` belongs to internal index `i`.
///
/// Values are stored as `f32` (the width upstream embedding models produce);
/// distance and projection arithmetic is done in `f64` by the consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    dims: usize,
    data: Vec<f32>,
}

impl FeatureMatrix {
    /// Build from per-row vectors. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> CuratorResult<Self> {
        let dims = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * dims);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dims {
                return Err(CuratorError::InvalidFeatureRow {
                    row: i,
                    expected: dims,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            dims,
            data,
        })
    }

    /// Build from a row-major buffer.
    pub fn from_flat(rows: usize, dims: usize, data: Vec<f32>) -> CuratorResult<Self> {
        if rows.checked_mul(dims) != Some(data.len()) {
            return Err(CuratorError::InvalidFeatureRow {
                row: data.len() / dims.max(1),
                expected: dims,
                actual: data.len() % dims.max(1),
            });
        }
        Ok(Self { rows, dims, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Feature vector of one item.
    ///
    /// # Panics
    /// Panics if `index >= rows()`.
    pub fn row(&self, index: usize) -> &[f32] {
        let start = index * self.dims;
        &self.data[start..start + self.dims]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major backing buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Keep only the first `rows` rows.
    pub fn truncated(&self, rows: usize) -> Self {
        let rows = rows.min(self.rows);
        Self {
            rows,
            dims: self.dims,
            data: self.data[..rows * self.dims].to_vec(),
        }
    }

    /// A new matrix with `row` appended. An empty matrix adopts the row's width.
    pub fn with_row(&self, row: &[f32]) -> CuratorResult<Self> {
        let dims = if self.rows == 0 { row.len() } else { self.dims };
        if row.len() != dims {
            return Err(CuratorError::InvalidFeatureRow {
                row: self.rows,
                expected: dims,
                actual: row.len(),
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + dims);
        data.extend_from_slice(&self.data);
        data.extend_from_slice(row);
        Ok(Self {
            rows: self.rows + 1,
            dims,
            data,
        })
    }

    /// Encode as `count: u32 LE`, `dims: u32 LE`, then `count * dims` f32 LE values.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.data.len() * 4);
        out.extend_from_slice(&(self.rows as u32).to_le_bytes());
        out.extend_from_slice(&(self.dims as u32).to_le_bytes());
        for v in &self.data {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Decode the format written by [`FeatureMatrix::to_le_bytes`].
    pub fn from_le_bytes(bytes: &[u8]) -> CuratorResult<Self> {
        if bytes.len() < 8 {
            return Err(CuratorError::ConfigError(
                "feature file too small for header".to_string(),
            ));
        }
        let count = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let dims = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let expected = count
            .checked_mul(dims)
            .and_then(|n| n.checked_mul(4))
            .and_then(|n| n.checked_add(8))
            .ok_or_else(|| {
                CuratorError::ConfigError(format!(
                    "feature file header {count}x{dims} is too large"
                ))
            })?;
        if bytes.len() != expected {
            return Err(CuratorError::ConfigError(format!(
                "feature file size mismatch: expected {expected} bytes, got {}",
                bytes.len()
            )));
        }
        let data = bytes[8..]
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::from_flat(count, dims, data)
    }
}

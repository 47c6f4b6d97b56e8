//! Vector arithmetic over `f32` feature rows, accumulated in `f64`.

use curator_core::models::FeatureMatrix;

/// Squared Euclidean distance between two feature rows.
pub fn squared_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = *x as f64 - *y as f64;
            d * d
        })
        .sum()
}

/// Squared Euclidean distance from a point to a feature row.
pub fn squared_distance_to(point: &[f64], row: &[f32]) -> f64 {
    point
        .iter()
        .zip(row)
        .map(|(p, x)| {
            let d = p - *x as f64;
            d * d
        })
        .sum()
}

/// Dot product of a feature row with a direction.
pub fn dot(row: &[f32], direction: &[f64]) -> f64 {
    row.iter().zip(direction).map(|(x, w)| *x as f64 * w).sum()
}

/// Arithmetic mean of the given rows, summed in iteration order.
///
/// Returns `None` for an empty index set.
pub fn mean_of_rows<I>(features: &FeatureMatrix, indices: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = usize>,
{
    let mut sum = vec![0.0f64; features.dims()];
    let mut count = 0usize;
    for i in indices {
        for (s, x) in sum.iter_mut().zip(features.row(i)) {
            *s += *x as f64;
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let n = count as f64;
    for s in &mut sum {
        *s /= n;
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance_of_corners() {
        assert_eq!(squared_distance(&[0.0, 0.0], &[10.0, 10.0]), 200.0);
        assert_eq!(squared_distance(&[3.0], &[3.0]), 0.0);
    }

    #[test]
    fn mean_of_empty_set_is_none() {
        let m = FeatureMatrix::from_rows(vec![vec![1.0]]).unwrap();
        assert!(mean_of_rows(&m, std::iter::empty()).is_none());
    }

    #[test]
    fn mean_of_rows_averages_columns() {
        let m = FeatureMatrix::from_rows(vec![vec![0.0, 2.0], vec![4.0, 6.0], vec![9.0, 9.0]])
            .unwrap();
        assert_eq!(mean_of_rows(&m, [0, 1]).unwrap(), vec![2.0, 4.0]);
    }

    #[test]
    fn dot_with_direction() {
        assert_eq!(dot(&[1.0, 2.0], &[3.0, -1.0]), 1.0);
    }
}

//! Pairwise Euclidean distance matrix over a point set.
//!
//! Computed via the sum-of-squares expansion `|a|² + |b|² − 2a·b`, with
//! the squared distance clamped to ≥ 0 before the square root -- the
//! expansion can come out fractionally negative for coincident or
//! near-coincident points. O(n) per-point norm precompute, O(n²) fill.

use crate::types::{Point, RouteError};

/// Square, symmetric matrix of Euclidean distances, zero on the diagonal.
///
/// Entries are indexed by the points' positions in the input sequence
/// and stored row-major in a flat arena.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the n×n matrix for `points`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyPointSet`] when `points` is empty; a
    /// zero-size matrix has no meaningful route above it.
    pub fn build(points: &[Point]) -> Result<Self, RouteError> {
        if points.is_empty() {
            return Err(RouteError::EmptyPointSet);
        }

        let n = points.len();
        let norms: Vec<f64> = points
            .iter()
            .map(|p| p.x.mul_add(p.x, p.z * p.z))
            .collect();

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let dot = points[i].x.mul_add(points[j].x, points[i].z * points[j].z);
                let squared = (norms[i] + norms[j] - 2.0 * dot).max(0.0);
                let dist = squared.sqrt();
                data[i * n + j] = dist;
                data[j * n + i] = dist;
            }
        }

        Ok(Self { n, data })
    }

    /// Number of points the matrix covers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    /// `true` when the matrix covers no points. Never observed through
    /// [`build`](Self::build), which rejects empty input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let result = DistanceMatrix::build(&[]);
        assert!(matches!(result, Err(RouteError::EmptyPointSet)));
    }

    #[test]
    fn diagonal_is_zero() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(-350.0, 41.0),
            Point::new(12.5, 12.5),
        ];
        let matrix = DistanceMatrix::build(&points).unwrap();
        for i in 0..points.len() {
            assert!(matrix.get(i, i).abs() < f64::EPSILON, "D[{i}][{i}] != 0");
        }
    }

    #[test]
    fn symmetric_and_euclidean() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(-6.0, 8.0),
        ];
        let matrix = DistanceMatrix::build(&points).unwrap();
        assert!((matrix.get(0, 1) - 5.0).abs() < 1e-9);
        assert!((matrix.get(0, 2) - 10.0).abs() < 1e-9);
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (matrix.get(i, j) - matrix.get(j, i)).abs() < f64::EPSILON,
                    "D[{i}][{j}] != D[{j}][{i}]"
                );
            }
        }
    }

    #[test]
    fn expansion_matches_direct_distance() {
        // Large magnitudes stress the |a|² + |b|² − 2a·b form; the result
        // must track the direct hypot within floating-point tolerance.
        let points = vec![
            Point::new(1_000_000.0, -2_000_000.0),
            Point::new(999_993.0, -1_999_976.0),
        ];
        let matrix = DistanceMatrix::build(&points).unwrap();
        let direct = points[0].distance(points[1]);
        assert!(
            (matrix.get(0, 1) - direct).abs() < 1e-6 * direct.max(1.0),
            "expansion {} vs direct {direct}",
            matrix.get(0, 1),
        );
    }

    #[test]
    fn coincident_points_have_zero_distance() {
        // The clamp keeps the expansion's negative artifacts from turning
        // into NaN under sqrt.
        let p = Point::new(12_345.678, -98_765.432);
        let matrix = DistanceMatrix::build(&[p, p]).unwrap();
        assert!(matrix.get(0, 1).abs() < f64::EPSILON);
        assert!(!matrix.get(0, 1).is_nan());
    }

    #[test]
    fn single_point_matrix() {
        let matrix = DistanceMatrix::build(&[Point::new(5.0, 5.0)]).unwrap();
        assert_eq!(matrix.len(), 1);
        assert!(matrix.get(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn triangle_inequality_holds() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(40.0, 30.0),
            Point::new(-25.0, 60.0),
        ];
        let matrix = DistanceMatrix::build(&points).unwrap();
        let n = matrix.len();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    assert!(
                        matrix.get(i, j) <= matrix.get(i, k) + matrix.get(k, j) + 1e-9,
                        "triangle inequality violated for ({i}, {j}, {k})"
                    );
                }
            }
        }
    }
}

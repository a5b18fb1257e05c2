//! Shared types for the waystone route engine.

use serde::{Deserialize, Serialize};

use crate::matching::MatchingStrategy;

/// A 2-D position in world coordinates.
///
/// Structures are located by their horizontal `x` and `z` coordinates;
/// height plays no part in routing. Points are identified downstream by
/// their index in the input sequence, with index 0 reserved for the
/// injected origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// East-west world coordinate.
    pub x: f64,
    /// North-south world coordinate.
    pub z: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx.mul_add(dx, dz * dz)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// `true` when both coordinates are finite (neither NaN nor infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

/// Configuration for a route computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Mandatory starting position, prepended to the route as index 0.
    pub origin: Point,

    /// Maximum number of route entries. Applied after the shuffle and
    /// the origin prepend, so the origin is always included and counts
    /// against the limit.
    pub limit: Option<usize>,

    /// Seed for the tie-breaking shuffle of the non-origin points.
    ///
    /// Equally good tours exist under input reorderings; the shuffle
    /// avoids biasing toward file order. A fixed seed makes the whole
    /// computation a pure function of its inputs; `None` seeds from
    /// entropy.
    pub seed: Option<u64>,

    /// How the spanning tree's odd-degree vertices are paired up.
    pub matching: MatchingStrategy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            limit: None,
            seed: None,
            matching: MatchingStrategy::default(),
        }
    }
}

/// A planned route: the only artifact that outlives the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Visit order. The first entry is the origin; every input point
    /// appears exactly once. The route is open -- it does not return to
    /// the origin.
    pub route: Vec<Point>,

    /// Cumulative Euclidean length over consecutive route entries, in
    /// blocks. Zero for a single-point route.
    pub total_distance: f64,
}

/// Errors from route planning.
///
/// Internal invariant violations (odd-sized odd-degree set, disconnected
/// multigraph, a shortcut pass of the wrong length) are deliberately
/// **not** represented here: they indicate a bug in tree or matching
/// construction, break the tour's approximation guarantee, and abort via
/// assertion instead of being silently corrected.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// An input coordinate was NaN or infinite.
    #[error("non-finite coordinate at input index {index}")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input sequence.
        index: usize,
    },

    /// The configured origin was NaN or infinite.
    #[error("non-finite origin coordinate")]
    NonFiniteOrigin,

    /// The engine was handed an empty point set.
    ///
    /// Unreachable through [`plan_route`](crate::plan_route), which
    /// always injects the origin before building the matrix.
    #[error("cannot build a distance matrix over an empty point set")]
    EmptyPointSet,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
        assert!((a.distance_squared(b) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_distance_to_self_is_zero() {
        let p = Point::new(-120.0, 7.5);
        assert!(p.distance(p).abs() < f64::EPSILON);
    }

    #[test]
    fn point_finiteness() {
        assert!(Point::new(-1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn config_defaults() {
        let config = RouteConfig::default();
        assert_eq!(config.origin, Point::new(0.0, 0.0));
        assert_eq!(config.limit, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.matching, MatchingStrategy::Optimal);
    }

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(-1024.0, 356.5);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = RouteConfig {
            origin: Point::new(100.0, -200.0),
            limit: Some(12),
            seed: Some(7),
            matching: MatchingStrategy::Greedy,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RouteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn error_display() {
        let err = RouteError::NonFiniteCoordinate { index: 3 };
        assert_eq!(err.to_string(), "non-finite coordinate at input index 3");
    }
}

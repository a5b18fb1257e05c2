//! waystone-route: Christofides-style tour construction (sans-IO).
//!
//! Builds a near-optimal open route through a set of 2-D structure
//! coordinates:
//! distance matrix -> minimum spanning tree -> odd-vertex matching ->
//! Eulerian circuit -> shortcutting.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! point lists and returns structured data. Structure-file loading and
//! waypoint placement live in `waystone-cli`.

pub mod euler;
pub mod matching;
pub mod matrix;
pub mod mst;
pub mod shortcut;
pub mod types;

pub use matching::MatchingStrategy;
pub use matrix::DistanceMatrix;
pub use types::{Point, RouteConfig, RouteError, RoutePlan};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Plan a route through `points`, starting at the configured origin.
///
/// # Pipeline steps
///
/// 1. Reject non-finite coordinates
/// 2. Shuffle the points (seeded tie-breaking among equally good input
///    orderings)
/// 3. Prepend the origin as index 0
/// 4. Truncate to the configured limit, which counts the origin
/// 5. Distance matrix over the working set
/// 6. Minimum spanning tree (Kruskal)
/// 7. Minimum-weight perfect matching of the tree's odd-degree vertices
/// 8. Eulerian circuit over tree ∪ matching
/// 9. Shortcut to a Hamiltonian-order open route
///
/// The whole computation is synchronous, single-threaded, and pure; all
/// intermediate structures are dropped before returning. With a fixed
/// `seed` the result is a deterministic function of its inputs.
///
/// An empty `points` slice is not an error: the route degenerates to
/// the origin alone with a total distance of zero.
///
/// # Errors
///
/// Returns [`RouteError::NonFiniteOrigin`] or
/// [`RouteError::NonFiniteCoordinate`] when any input coordinate is NaN
/// or infinite, before any construction happens.
pub fn plan_route(points: &[Point], config: &RouteConfig) -> Result<RoutePlan, RouteError> {
    // 1. Validate up front; no partial output downstream.
    if !config.origin.is_finite() {
        return Err(RouteError::NonFiniteOrigin);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(RouteError::NonFiniteCoordinate { index });
    }

    // 2. Seeded tie-breaking shuffle of the non-origin points.
    let mut working: Vec<Point> = points.to_vec();
    let mut rng = config
        .seed
        .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    working.shuffle(&mut rng);

    // 3. + 4. Origin first, then the limit (which counts the origin and
    // can never drop it).
    working.insert(0, config.origin);
    if let Some(limit) = config.limit {
        working.truncate(limit.max(1));
    }

    log::debug!(
        "routing {} of {} supplied points",
        working.len(),
        points.len() + 1
    );

    // Degenerate single-point route: nothing to order.
    if working.len() == 1 {
        return Ok(RoutePlan {
            route: working,
            total_distance: 0.0,
        });
    }

    // 5.-9. The tour pipeline proper. Each stage owns its artifact and
    // is discarded once the next has consumed it.
    let matrix = DistanceMatrix::build(&working)?;
    let tree = mst::minimum_spanning_tree(&matrix);
    let degrees = mst::degree_sequence(working.len(), &tree);
    let odd = matching::odd_vertices(&degrees);
    let pairs = matching::minimum_weight_matching(&odd, &matrix, config.matching);
    let graph = euler::MultiGraph::from_edges(working.len(), &tree, &pairs);
    let circuit = graph.eulerian_circuit();
    let order = shortcut::shortcut_circuit(&circuit, working.len());

    let route: Vec<Point> = order.iter().map(|&index| working[index]).collect();
    let total_distance = route
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum();

    Ok(RoutePlan {
        route,
        total_distance,
    })
}

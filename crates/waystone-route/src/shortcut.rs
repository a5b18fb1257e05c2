//! Shortcut an Eulerian circuit into a Hamiltonian-order route.
//!
//! Walks the circuit and keeps each vertex the first time it appears.
//! The repeats being skipped are the re-entries the matching edges
//! introduced; the triangle inequality bounds the cost of skipping
//! them. The route is left open -- the closed walk's return to the
//! start is dropped along with the other repeats, matching the
//! one-way-route export use-case.

/// Reduce `circuit` to the first-visit order of its `n` vertices.
///
/// # Panics
///
/// Panics when the deduplicated walk does not contain all `n` vertices
/// exactly once. The circuit stage guarantees full edge (and therefore
/// vertex) coverage, so a shortfall is an upstream bug and aborts.
#[must_use]
pub fn shortcut_circuit(circuit: &[usize], n: usize) -> Vec<usize> {
    let mut seen = vec![false; n];
    let mut route = Vec::with_capacity(n);
    for &vertex in circuit {
        if !seen[vertex] {
            seen[vertex] = true;
            route.push(vertex);
        }
    }
    assert_eq!(
        route.len(),
        n,
        "shortcut produced {} vertices, expected {n}",
        route.len()
    );
    route
}

//! Minimum spanning tree over the complete distance graph.
//!
//! Kruskal's algorithm: every candidate edge sorted by weight, merged
//! through a union-find until n−1 edges are accepted. Equal weights are
//! tie-broken on vertex indices so the same input always produces the
//! same tree.

use petgraph::unionfind::UnionFind;

use crate::matrix::DistanceMatrix;

/// Compute the minimum spanning tree of the complete graph described by
/// `matrix`.
///
/// Returns the accepted edges as `(i, j)` index pairs with `i < j` --
/// exactly `n − 1` of them for `n` points, connecting all vertices with
/// minimum total weight and no cycles. A single-point matrix yields no
/// edges.
#[must_use]
pub fn minimum_spanning_tree(matrix: &DistanceMatrix) -> Vec<(usize, usize)> {
    let n = matrix.len();
    if n <= 1 {
        return Vec::new();
    }

    let mut candidates: Vec<(f64, usize, usize)> = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            candidates.push((matrix.get(i, j), i, j));
        }
    }
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| (a.1, a.2).cmp(&(b.1, b.2))));

    let mut uf = UnionFind::<usize>::new(n);
    let mut edges = Vec::with_capacity(n - 1);

    for (_, i, j) in candidates {
        let ri = uf.find_mut(i);
        let rj = uf.find_mut(j);
        if ri != rj {
            uf.union(ri, rj);
            edges.push((i, j));
            if edges.len() == n - 1 {
                break; // Tree complete.
            }
        }
    }

    edges
}

/// Vertex degrees induced by an edge list over `n` vertices.
#[must_use]
pub fn degree_sequence(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut degrees = vec![0; n];
    for &(i, j) in edges {
        degrees[i] += 1;
        degrees[j] += 1;
    }
    degrees
}

/// Total weight of an edge list under `matrix`.
#[must_use]
pub fn total_weight(matrix: &DistanceMatrix, edges: &[(usize, usize)]) -> f64 {
    edges.iter().map(|&(i, j)| matrix.get(i, j)).sum()
}

//! Odd-degree vertex extraction and minimum-weight perfect matching.
//!
//! A spanning tree leaves an even number of odd-degree vertices behind
//! (handshake lemma). Pairing them up against the *original* complete
//! distance matrix -- not tree-path distance -- and adding those pairs to
//! the tree gives every vertex even degree, which is exactly what the
//! Eulerian stage needs.
//!
//! Two strategies are offered. The exact subset DP retains the
//! Christofides 1.5× approximation bound for metric inputs; the greedy
//! closest-pair heuristic does not, and exists as the documented
//! fallback for odd sets too large for the DP table.

use serde::{Deserialize, Serialize};

use crate::matrix::DistanceMatrix;

/// Largest odd set the exact DP will take on before falling back to
/// greedy. A 2^20-entry cost table is ~8 MiB and fills in well under a
/// second; structure lists stay far below this in practice.
const EXACT_MATCHING_LIMIT: usize = 20;

/// How odd-degree vertices are paired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchingStrategy {
    /// Exact minimum-weight perfect matching by dynamic programming over
    /// vertex subsets, O(2^k·k) for k odd vertices, with a greedy
    /// fallback above 20 odd vertices. Whenever the DP runs, the tour
    /// keeps the Christofides 1.5× bound.
    #[default]
    Optimal,

    /// Repeatedly match the globally closest unmatched pair, O(k³).
    ///
    /// Does NOT retain the 1.5× bound -- tours stay metric-feasible but
    /// carry no approximation guarantee.
    Greedy,
}

/// Vertices with odd degree in `degrees`.
#[must_use]
pub fn odd_vertices(degrees: &[usize]) -> Vec<usize> {
    degrees
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree % 2 != 0)
        .map(|(vertex, _)| vertex)
        .collect()
}

/// Minimum-weight perfect matching over the odd-degree vertex set.
///
/// Weights come from the complete distance matrix restricted to `odd`.
/// Returns vertex-disjoint pairs covering every odd vertex exactly once;
/// an empty odd set yields an empty matching.
///
/// # Panics
///
/// Panics when `odd` has odd cardinality. That is impossible for the
/// odd-degree set of any graph, so a violation means the spanning tree
/// upstream is corrupt and the tour guarantee is already gone -- abort
/// rather than emit a silently wrong matching.
#[must_use]
pub fn minimum_weight_matching(
    odd: &[usize],
    matrix: &DistanceMatrix,
    strategy: MatchingStrategy,
) -> Vec<(usize, usize)> {
    assert!(
        odd.len() % 2 == 0,
        "odd-degree vertex set has odd cardinality {}",
        odd.len()
    );
    if odd.is_empty() {
        return Vec::new();
    }

    match strategy {
        MatchingStrategy::Optimal if odd.len() <= EXACT_MATCHING_LIMIT => {
            exact_matching(odd, matrix)
        }
        MatchingStrategy::Optimal | MatchingStrategy::Greedy => greedy_matching(odd, matrix),
    }
}

/// Exact minimum-weight perfect matching by subset DP.
///
/// `cost[mask]` is the cheapest perfect matching of the vertices named
/// by `mask`'s set bits. Each step pairs the lowest set bit with every
/// other member, so only even-popcount masks ever become finite.
fn exact_matching(odd: &[usize], matrix: &DistanceMatrix) -> Vec<(usize, usize)> {
    let k = odd.len();
    let full = 1_usize << k;

    let mut cost = vec![f64::INFINITY; full];
    // Partner chosen for the lowest set bit in each mask's optimum.
    let mut partner = vec![0_usize; full];
    cost[0] = 0.0;

    for mask in 1..full {
        let i = mask.trailing_zeros() as usize;
        let without_i = mask & !(1 << i);

        let mut best = f64::INFINITY;
        let mut best_j = 0;
        let mut rest = without_i;
        while rest != 0 {
            let j = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            let prev = cost[without_i & !(1 << j)];
            if prev.is_finite() {
                let candidate = prev + matrix.get(odd[i], odd[j]);
                if candidate < best {
                    best = candidate;
                    best_j = j;
                }
            }
        }
        cost[mask] = best;
        partner[mask] = best_j;
    }

    // Walk the recorded choices back out of the table.
    let mut pairs = Vec::with_capacity(k / 2);
    let mut mask = full - 1;
    while mask != 0 {
        let i = mask.trailing_zeros() as usize;
        let j = partner[mask];
        pairs.push((odd[i], odd[j]));
        mask &= !(1 << i);
        mask &= !(1 << j);
    }
    pairs
}

/// Greedy closest-pair matching: pick the globally nearest unmatched
/// pair until nothing is left.
fn greedy_matching(odd: &[usize], matrix: &DistanceMatrix) -> Vec<(usize, usize)> {
    let mut remaining: Vec<usize> = odd.to_vec();
    let mut pairs = Vec::with_capacity(odd.len() / 2);

    while remaining.len() > 1 {
        let mut best_a = 0;
        let mut best_b = 1;
        let mut best_dist = f64::INFINITY;

        for (a, &va) in remaining.iter().enumerate() {
            for (b, &vb) in remaining.iter().enumerate().skip(a + 1) {
                let d = matrix.get(va, vb);
                if d < best_dist {
                    best_dist = d;
                    best_a = a;
                    best_b = b;
                }
            }
        }

        pairs.push((remaining[best_a], remaining[best_b]));
        // Remove the matched pair, higher index first.
        remaining.swap_remove(best_b);
        remaining.swap_remove(best_a);
    }

    pairs
}

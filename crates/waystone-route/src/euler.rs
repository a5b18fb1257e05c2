//! Multigraph union of tree and matching edges, and Eulerian circuit
//! extraction.
//!
//! The multigraph is arena-indexed: a flat edge table plus per-vertex
//! lists of incident edge ids with consumed flags, instead of a
//! pointer-linked graph. Circuit extraction is Hierholzer's algorithm as
//! an iterative stack walk -- sub-circuits discovered from vertices with
//! unused edges splice into the walk as the stack unwinds.

/// Union of spanning-tree and matching edges over `n` vertices.
///
/// Parallel edges are expected (a matching edge may duplicate a tree
/// edge) and each one is traversed separately.
#[derive(Debug)]
pub struct MultiGraph {
    /// Edge arena: endpoints by edge id.
    endpoints: Vec<(usize, usize)>,
    /// Incident edge ids per vertex.
    incidence: Vec<Vec<usize>>,
}

impl MultiGraph {
    /// Build the multigraph from the tree and matching edge lists.
    #[must_use]
    pub fn from_edges(n: usize, tree: &[(usize, usize)], matching: &[(usize, usize)]) -> Self {
        let mut endpoints = Vec::with_capacity(tree.len() + matching.len());
        let mut incidence = vec![Vec::new(); n];
        for &(i, j) in tree.iter().chain(matching) {
            let id = endpoints.len();
            endpoints.push((i, j));
            incidence[i].push(id);
            incidence[j].push(id);
        }
        Self { endpoints, incidence }
    }

    /// Number of edges, parallel edges counted separately.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Degree of `vertex`, parallel edges counted separately.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.incidence[vertex].len()
    }

    /// Verify the Eulerian preconditions: all-even degrees and every
    /// vertex reachable from vertex 0.
    fn assert_eulerian(&self) {
        for (vertex, incident) in self.incidence.iter().enumerate() {
            assert!(
                incident.len() % 2 == 0,
                "vertex {vertex} has odd degree {} in the multigraph",
                incident.len()
            );
        }

        let mut seen = vec![false; self.incidence.len()];
        let mut stack = vec![0_usize];
        seen[0] = true;
        while let Some(vertex) = stack.pop() {
            for &edge in &self.incidence[vertex] {
                let (a, b) = self.endpoints[edge];
                let other = if a == vertex { b } else { a };
                if !seen[other] {
                    seen[other] = true;
                    stack.push(other);
                }
            }
        }
        assert!(
            seen.iter().all(|&reached| reached),
            "multigraph is disconnected; no Eulerian circuit exists"
        );
    }

    /// Extract an Eulerian circuit starting (and ending) at vertex 0.
    ///
    /// Returns the closed walk as a vertex sequence of length
    /// `edge_count() + 1`, visiting every edge exactly once. A graph
    /// with no edges yields `[0]`.
    ///
    /// # Panics
    ///
    /// Panics when a vertex has odd degree or the graph is disconnected.
    /// Both are impossible by construction (tree ∪ odd-vertex matching);
    /// a violation is a bug in the stages upstream and must abort rather
    /// than emit a corrupt tour.
    #[must_use]
    pub fn eulerian_circuit(&self) -> Vec<usize> {
        self.assert_eulerian();

        let mut used = vec![false; self.endpoints.len()];
        // Per-vertex cursor into the incidence lists; each incidence
        // entry is inspected at most once over the whole walk.
        let mut cursor = vec![0_usize; self.incidence.len()];
        let mut stack = vec![0_usize];
        let mut circuit = Vec::with_capacity(self.endpoints.len() + 1);

        while let Some(&vertex) = stack.last() {
            let mut advanced = false;
            while cursor[vertex] < self.incidence[vertex].len() {
                let edge = self.incidence[vertex][cursor[vertex]];
                cursor[vertex] += 1;
                if used[edge] {
                    continue;
                }
                used[edge] = true;
                let (a, b) = self.endpoints[edge];
                stack.push(if a == vertex { b } else { a });
                advanced = true;
                break;
            }
            if !advanced {
                // Edges at this vertex are spent: splice it into the
                // circuit and back up.
                circuit.push(vertex);
                stack.pop();
            }
        }

        circuit.reverse();
        circuit
    }
}

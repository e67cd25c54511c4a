//! The graph-side interface the solver consumes, and the canonical edge sequence.

use crate::weight::Weight;
use narwhal_graphlib::WeightedGraph;

/// One entry of the canonical edge sequence.
///
/// The first `n - 1` entries of a sequence are the designated spanning tree; the rest are the
/// non-tree edges. By convention `u < v`, but the solver does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Unordered endpoint pair, smaller vertex first.
    pub fn key(&self) -> (usize, usize) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }

    /// The endpoint across the edge from `from`.
    pub fn other(&self, from: usize) -> usize {
        if from == self.u { self.v } else { self.u }
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self::new(u, v, weight)
    }
}

/// Vertex storage, adjacency, and weight lookup.
pub trait EdgeLedger<W> {
    fn vertex_count(&self) -> usize;

    /// Calls `f(neighbor)` for every edge incident to `v`.
    fn for_each_neighbor<F>(&self, v: usize, f: F)
    where
        F: FnMut(usize);

    fn edge_weight(&self, u: usize, v: usize) -> Option<W>;
}

impl<W: Weight> EdgeLedger<W> for WeightedGraph<W> {
    fn vertex_count(&self) -> usize {
        WeightedGraph::vertex_count(self)
    }

    fn for_each_neighbor<F>(&self, v: usize, mut f: F)
    where
        F: FnMut(usize),
    {
        WeightedGraph::for_each_neighbor(self, v, |w, _ix, _weight| f(w));
    }

    fn edge_weight(&self, u: usize, v: usize) -> Option<W> {
        WeightedGraph::edge_weight(self, u, v).copied()
    }
}

/// Builds a ledger holding exactly the edges of `edges`, in sequence order.
pub fn ledger_from_edges<W: Weight>(vertex_count: usize, edges: &[Edge<W>]) -> WeightedGraph<W> {
    let mut g: WeightedGraph<W> = WeightedGraph::with_vertices(vertex_count);
    for e in edges {
        g.set_edge(e.u, e.v, e.weight);
    }
    g
}

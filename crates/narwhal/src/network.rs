//! The constraint network: one flow node per edge of the graph, plus a source and a sink.
//!
//! Node `k < m` stands for sequence edge `k`. Tree-edge nodes receive a unit arc from the
//! source, non-tree-edge nodes send a unit arc to the sink, and every tree edge on the
//! fundamental cycle of a non-tree edge `i` gets an arc towards `i` priced at the weight gap.
//! Capacity, flow, and cost are dense `len x len` matrices stored row-major in flat vectors.

use crate::ledger::{Edge, EdgeLedger};
use crate::tree_path::TreePathMapper;
use crate::weight::Weight;
use num_traits::{FromPrimitive, One, Zero};

#[derive(Debug, Clone)]
pub struct FlowNetwork<W> {
    len: usize,
    source: usize,
    sink: usize,
    capacity: Vec<i64>,
    flow: Vec<i64>,
    cost: Vec<W>,
    /// Nodes sharing an arc with each node, in either direction, ascending.
    partners: Vec<Vec<usize>>,
}

impl<W: Weight> FlowNetwork<W> {
    /// Empty network over `edge_count` edge nodes.
    pub fn new(edge_count: usize) -> Self {
        let len = edge_count + 2;
        Self {
            len,
            source: edge_count,
            sink: edge_count + 1,
            capacity: vec![0; len * len],
            flow: vec![0; len * len],
            cost: vec![W::zero(); len * len],
            partners: vec![Vec::new(); len],
        }
    }

    #[inline]
    fn ix(&self, from: usize, to: usize) -> usize {
        from * self.len + to
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 2
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn capacity(&self, from: usize, to: usize) -> i64 {
        self.capacity[self.ix(from, to)]
    }

    pub fn flow(&self, from: usize, to: usize) -> i64 {
        self.flow[self.ix(from, to)]
    }

    pub fn cost(&self, from: usize, to: usize) -> W {
        self.cost[self.ix(from, to)]
    }

    /// Whether `from -> to` still has spare capacity in the residual network.
    #[inline]
    pub fn has_residual(&self, from: usize, to: usize) -> bool {
        let ix = self.ix(from, to);
        self.flow[ix] < self.capacity[ix]
    }

    pub fn partners(&self, node: usize) -> &[usize] {
        &self.partners[node]
    }

    /// Sets the forward arc and mirrors its cost, negated, onto the reverse direction.
    pub fn set_arc(&mut self, from: usize, to: usize, capacity: i64, cost: W) {
        let fwd = self.ix(from, to);
        let rev = self.ix(to, from);
        self.capacity[fwd] = capacity;
        self.cost[fwd] = cost;
        self.cost[rev] = -cost;
        self.partners[from].push(to);
        self.partners[to].push(from);
    }

    /// Moves one unit along `from -> to`, keeping the flow antisymmetric.
    pub fn push_unit(&mut self, from: usize, to: usize) {
        let fwd = self.ix(from, to);
        let rev = self.ix(to, from);
        self.flow[fwd] += 1;
        self.flow[rev] -= 1;
    }

    fn finish(&mut self) {
        for ps in &mut self.partners {
            ps.sort_unstable();
            ps.dedup();
        }
    }

    /// Total cost of the flow routed from tree-edge nodes to non-tree-edge nodes, accumulated
    /// in the wide [`Weight::Total`] type.
    pub fn routed_cost(&self, tree_len: usize) -> W::Total {
        let mut total = W::Total::zero();
        for r in 0..tree_len.min(self.source) {
            for &j in &self.partners[r] {
                if j < tree_len || j >= self.source {
                    continue;
                }
                let f = self.flow(r, j);
                if f > 0 {
                    let units = W::Total::from_i64(f).unwrap_or_else(W::Total::one);
                    total += self.cost(r, j).widen() * units;
                }
            }
        }
        total
    }
}

/// Builds the constraint network for `edges` over a ledger with `vertex_count` vertices.
pub fn build<W, L>(ledger: &L, edges: &[Edge<W>]) -> FlowNetwork<W>
where
    W: Weight,
    L: EdgeLedger<W>,
{
    let n = ledger.vertex_count();
    let m = edges.len();
    let mut net: FlowNetwork<W> = FlowNetwork::new(m);
    let mut mapper = TreePathMapper::new(n, edges);
    let tree_len = mapper.tree_len().min(m);
    let loose_capacity = n as i64;

    let mut path: Vec<usize> = Vec::new();
    for i in tree_len..m {
        mapper.tree_path(ledger, edges, i, &mut path);
        for &r in &path {
            net.set_arc(r, i, loose_capacity, edges[i].weight - edges[r].weight);
        }
        tracing::trace!(edge = i, path_len = path.len(), "mapped fundamental cycle");
    }

    let (source, sink) = (net.source, net.sink);
    net.set_arc(source, sink, loose_capacity + 1, W::zero());
    for r in 0..tree_len {
        net.set_arc(source, r, 1, W::zero());
    }
    for i in tree_len..m {
        net.set_arc(i, sink, 1, W::zero());
    }

    net.finish();
    net
}

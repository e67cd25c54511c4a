//! Turns converged potentials back into edge weights.

use crate::ledger::Edge;
use crate::network::FlowNetwork;
use crate::weight::Weight;
use num_traits::Zero;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment<W: Weight> {
    /// Edges whose weight changed.
    pub adjusted_edges: usize,
    /// Sum of absolute weight changes.
    pub total: W::Total,
}

/// Shifts potentials so the source sits at zero, then adds each edge node's potential to its
/// weight when the node's boundary arc (source-side for tree edges, sink-side for non-tree
/// edges) carries flow.
pub fn apply<W: Weight>(
    net: &FlowNetwork<W>,
    pi: &mut [W],
    edges: &mut [Edge<W>],
    tree_len: usize,
) -> Adjustment<W> {
    let source = net.source();
    let sink = net.sink();
    let base = pi[source];
    for p in pi.iter_mut().take(edges.len()) {
        *p -= base;
    }

    let mut out = Adjustment {
        adjusted_edges: 0,
        total: W::Total::zero(),
    };
    for (ix, edge) in edges.iter_mut().enumerate() {
        let boundary_flow = if ix < tree_len {
            net.flow(source, ix)
        } else {
            net.flow(ix, sink)
        };
        if boundary_flow == 0 {
            continue;
        }
        let delta = pi[ix];
        edge.weight += delta;
        if delta != W::zero() {
            out.adjusted_edges += 1;
            out.total += delta.abs().widen();
        }
    }
    out
}

//! Feasible starting potentials for the constraint network.

use crate::network::FlowNetwork;
use crate::weight::{Weight, min_assign};

/// Initial node potentials.
///
/// Each tree-edge node starts at the cheapest arc it has towards a non-tree-edge node, the
/// source at the minimum over all tree-edge nodes, and every other node at zero. Tree edges that
/// lie on no fundamental cycle keep the sentinel; they can never carry flow.
pub fn initial_potentials<W: Weight>(net: &FlowNetwork<W>, tree_len: usize) -> Vec<W> {
    let edge_count = net.source();
    let mut pi: Vec<W> = vec![W::zero(); net.len()];
    let mut source_pi = W::SENTINEL;

    for r in 0..tree_len.min(edge_count) {
        let mut best = W::SENTINEL;
        for &j in net.partners(r) {
            if j < tree_len || j >= edge_count || net.capacity(r, j) == 0 {
                continue;
            }
            min_assign(&mut best, net.cost(r, j));
        }
        pi[r] = best;
        min_assign(&mut source_pi, best);
    }

    pi[net.source()] = source_pi;
    pi
}

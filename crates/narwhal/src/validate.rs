//! Structural precondition checks for the solver input.

use crate::error::{Error, Result};
use crate::ledger::{Edge, EdgeLedger};
use crate::weight::Weight;
use narwhal_graphlib::alg::UnionFind;
use rustc_hash::FxHashMap as HashMap;

/// Checks that `edges` is a well-formed canonical sequence for `ledger`.
///
/// - the graph has at least one vertex and the sequence at least `n - 1` edges;
/// - every edge has in-range, distinct endpoints, appears once, exists in the ledger with the
///   same weight, and carries a finite weight within [`Weight::MAX_MAGNITUDE`];
/// - the first `n - 1` edges are acyclic, hence a spanning tree.
pub fn validate<W, L>(ledger: &L, edges: &[Edge<W>]) -> Result<()>
where
    W: Weight,
    L: EdgeLedger<W>,
{
    let n = ledger.vertex_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    if edges.len() < n - 1 {
        return Err(Error::TooFewEdges {
            vertices: n,
            edges: edges.len(),
        });
    }

    let mut first_seen: HashMap<(usize, usize), usize> = HashMap::default();
    for (ix, e) in edges.iter().enumerate() {
        for vertex in [e.u, e.v] {
            if vertex >= n {
                return Err(Error::VertexOutOfRange {
                    edge: ix,
                    vertex,
                    vertices: n,
                });
            }
        }
        if e.u == e.v {
            return Err(Error::SelfLoop { edge: ix });
        }
        if let Some(&first) = first_seen.get(&e.key()) {
            return Err(Error::DuplicateEdge { first, second: ix });
        }
        first_seen.insert(e.key(), ix);

        if !e.weight.in_range() {
            return Err(Error::WeightOutOfRange {
                edge: ix,
                weight: format!("{:?}", e.weight),
            });
        }
        let Some(graph_weight) = ledger.edge_weight(e.u, e.v) else {
            return Err(Error::EdgeNotInGraph {
                edge: ix,
                u: e.u,
                v: e.v,
            });
        };
        if graph_weight != e.weight {
            return Err(Error::WeightMismatch {
                edge: ix,
                sequence: format!("{:?}", e.weight),
                graph: format!("{graph_weight:?}"),
            });
        }
    }

    let mut sets = UnionFind::new(n);
    for (ix, e) in edges.iter().take(n - 1).enumerate() {
        if !sets.union(e.u, e.v) {
            return Err(Error::TreeHasCycle { edge: ix });
        }
    }

    Ok(())
}

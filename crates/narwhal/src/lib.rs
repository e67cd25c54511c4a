#![forbid(unsafe_code)]

//! Inverse minimum spanning tree.
//!
//! Given a connected weighted graph and a designated spanning tree, `narwhal` computes the
//! smallest total change of edge weights (sum of absolute changes) that makes the designated
//! tree a minimum spanning tree. Tree edges only ever get lighter and non-tree edges heavier.
//!
//! The input is a canonical edge sequence whose first `n - 1` entries are the tree. Each edge
//! becomes a node of a flow network; tree edges on the fundamental cycle of a non-tree edge are
//! linked to it with arcs priced at the weight gap, and a min-cost flow over that network yields
//! potentials that translate directly into weight adjustments.
//!
//! ```
//! use narwhal::{Edge, inverse_mst, ledger_from_edges};
//!
//! let mut edges: Vec<Edge<i32>> = vec![
//!     Edge::new(0, 1, -1),
//!     Edge::new(1, 2, 1),
//!     Edge::new(2, 3, 3),
//!     Edge::new(0, 3, 1),
//! ];
//! let graph = ledger_from_edges(4, &edges);
//! let summary = inverse_mst(&graph, &mut edges);
//!
//! assert_eq!(edges[2].weight, 1);
//! assert_eq!(summary.total_adjustment, 2);
//! ```

pub use narwhal_graphlib as graphlib;

use num_traits::Zero;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod flow;
pub mod ledger;
pub mod network;
pub mod potential;
pub mod reconstruct;
pub mod tree_path;
pub mod validate;
pub mod weight;

pub use error::{Error, Result};
pub use ledger::{Edge, EdgeLedger, ledger_from_edges};
pub use validate::validate;
pub use weight::Weight;

#[derive(Debug, Clone, Copy)]
pub struct InverseMstOptions {
    /// Run [`validate`] before solving.
    pub validate: bool,
    /// Give up after this many augmentation rounds. The weights are left untouched then.
    pub max_rounds: Option<usize>,
}

impl Default for InverseMstOptions {
    fn default() -> Self {
        Self {
            validate: true,
            max_rounds: None,
        }
    }
}

/// What a solve did. Sums are kept in the wide [`Weight::Total`] type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<W: Weight> {
    /// Augmentation rounds, including the final one over the bypass arc.
    pub rounds: usize,
    pub adjusted_edges: usize,
    /// Sum of absolute weight changes.
    pub total_adjustment: W::Total,
    /// Cost of the flow routed between tree and non-tree edges; `-total_adjustment` at optimum.
    pub flow_cost: W::Total,
}

impl<W: Weight> Summary<W> {
    pub fn unchanged() -> Self {
        Self {
            rounds: 0,
            adjusted_edges: 0,
            total_adjustment: W::Total::zero(),
            flow_cost: W::Total::zero(),
        }
    }
}

/// Adjusts `edges` in place so that its first `n - 1` entries form a minimum spanning tree.
///
/// Assumes well-formed input (see [`validate`]); malformed input gives meaningless weights
/// rather than an error. A sequence without non-tree edges is returned unchanged, and so is one
/// whose floating-point weights lost too much precision for the search to settle.
pub fn inverse_mst<W, L>(ledger: &L, edges: &mut [Edge<W>]) -> Summary<W>
where
    W: Weight,
    L: EdgeLedger<W>,
{
    match solve_in_place(ledger, edges, None) {
        Ok(summary) => summary,
        Err(err) => {
            tracing::warn!(%err, "weights left unchanged");
            Summary::unchanged()
        }
    }
}

/// Checked variant of [`inverse_mst`].
pub fn try_inverse_mst<W, L>(
    ledger: &L,
    edges: &mut [Edge<W>],
    options: &InverseMstOptions,
) -> Result<Summary<W>>
where
    W: Weight,
    L: EdgeLedger<W>,
{
    if options.validate {
        validate(ledger, edges)?;
    }
    solve_in_place(ledger, edges, options.max_rounds)
}

fn solve_in_place<W, L>(
    ledger: &L,
    edges: &mut [Edge<W>],
    max_rounds: Option<usize>,
) -> Result<Summary<W>>
where
    W: Weight,
    L: EdgeLedger<W>,
{
    let n = ledger.vertex_count();
    let m = edges.len();
    let tree_len = n.saturating_sub(1);
    let _span = tracing::debug_span!("inverse_mst", n, m).entered();

    if m <= tree_len {
        tracing::debug!("no non-tree edges; weights unchanged");
        return Ok(Summary::unchanged());
    }

    let mut net = network::build(ledger, edges);
    let mut pi = potential::initial_potentials(&net, tree_len);

    let rounds = match flow::solve(&mut net, &mut pi, max_rounds) {
        flow::Outcome::Converged { rounds } => rounds,
        flow::Outcome::Interrupted { rounds } => {
            tracing::warn!(rounds, "min-cost flow interrupted by the round cap");
            return Err(Error::RoundLimitExceeded { limit: rounds });
        }
        flow::Outcome::Diverged { rounds } => {
            tracing::warn!(rounds, "shortest-path search found a negative cycle");
            return Err(Error::SearchDiverged { round: rounds });
        }
    };

    let flow_cost = net.routed_cost(tree_len);
    let adjustment = reconstruct::apply(&net, &mut pi, edges, tree_len);
    tracing::debug!(
        rounds,
        adjusted = adjustment.adjusted_edges,
        "inverse MST solved"
    );

    Ok(Summary {
        rounds,
        adjusted_edges: adjustment.adjusted_edges,
        total_adjustment: adjustment.total,
        flow_cost,
    })
}

//! Successive shortest augmenting paths with node potentials.
//!
//! Every round runs a label-correcting search from the source over residual arcs, measuring
//! each arc by its reduced cost `cost(v, i) - pi[v] + pi[i]`. The search keeps a double-ended
//! queue: a node labelled for the first time goes to the back, a node whose label improves after
//! it was already scanned goes to the front. Afterwards every potential drops by its node's
//! distance, which keeps reduced costs non-negative for the next round, and one unit of flow is
//! pushed along the shortest path. The loop ends once that path is the direct source-to-sink
//! bypass.
//!
//! Without a negative cycle every label is the cost of a simple path, so it never spans `len`
//! arcs or more. The search tracks that arc count and stops when it is exceeded, which happens
//! only when rounding in a floating-point weight type has produced a negative cycle.

use crate::network::FlowNetwork;
use crate::weight::Weight;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Unseen,
    Queued,
    Scanned,
}

/// Scratch buffers for the shortest-path search, reused across rounds.
#[derive(Debug)]
pub struct ShortestPaths<W> {
    dist: Vec<W>,
    pred: Vec<Option<usize>>,
    /// Arcs on the path behind each label.
    hops: Vec<usize>,
    label: Vec<Label>,
    queue: VecDeque<usize>,
    root: usize,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn new(len: usize) -> Self {
        Self {
            dist: vec![W::SENTINEL; len],
            pred: vec![None; len],
            hops: vec![0; len],
            label: vec![Label::Unseen; len],
            queue: VecDeque::with_capacity(len),
            root: 0,
        }
    }

    pub fn dist(&self) -> &[W] {
        &self.dist
    }

    pub fn pred(&self, node: usize) -> Option<usize> {
        self.pred[node]
    }

    /// Collects the predecessor chain from `target` back to the search root into `out`, target
    /// first. Returns `false` if the chain breaks off or revisits a node, which rounding can cause
    /// without tripping the search's own bound.
    pub fn path_to(&self, target: usize, out: &mut Vec<usize>) -> bool {
        out.clear();
        out.push(target);
        let mut v = target;
        while v != self.root {
            let Some(pv) = self.pred[v] else {
                return false;
            };
            if out.len() >= self.dist.len() {
                return false;
            }
            out.push(pv);
            v = pv;
        }
        out.len() > 1
    }

    /// Reduced-cost distances from `net.source()` over the current residual network.
    ///
    /// Returns `false` if a label grew a path of `len` arcs, i.e. the residual network holds a
    /// negative cycle; the distances are meaningless then.
    pub fn search(&mut self, net: &FlowNetwork<W>, pi: &[W]) -> bool {
        let source = net.source();
        let len = self.dist.len();
        self.root = source;
        self.dist.fill(W::SENTINEL);
        self.pred.fill(None);
        self.hops.fill(0);
        self.label.fill(Label::Unseen);
        self.queue.clear();

        self.dist[source] = W::zero();
        self.queue.push_back(source);

        while let Some(v) = self.queue.pop_front() {
            self.label[v] = Label::Scanned;
            let dv = self.dist[v];
            for &i in net.partners(v) {
                if !net.has_residual(v, i) {
                    continue;
                }
                let candidate = dv + net.cost(v, i) - pi[v] + pi[i];
                if candidate < self.dist[i] {
                    self.dist[i] = candidate;
                    self.hops[i] = self.hops[v] + 1;
                    if self.hops[i] >= len {
                        self.queue.clear();
                        return false;
                    }
                    match self.label[i] {
                        Label::Unseen => self.queue.push_back(i),
                        Label::Scanned => self.queue.push_front(i),
                        Label::Queued => {}
                    }
                    self.label[i] = Label::Queued;
                    self.pred[i] = Some(v);
                }
            }
        }
        true
    }
}

/// How the augmentation loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cheapest path degenerated to the bypass arc.
    Converged { rounds: usize },
    /// The round cap was hit first.
    Interrupted { rounds: usize },
    /// Round `rounds` met a negative cycle in the residual network.
    Diverged { rounds: usize },
}

/// Runs augmentation rounds until convergence, updating `net` flows and `pi` in place.
pub fn solve<W: Weight>(
    net: &mut FlowNetwork<W>,
    pi: &mut [W],
    max_rounds: Option<usize>,
) -> Outcome {
    let sink = net.sink();
    let mut paths: ShortestPaths<W> = ShortestPaths::new(net.len());
    let mut path: Vec<usize> = Vec::new();
    let mut rounds: usize = 0;

    loop {
        if max_rounds.is_some_and(|limit| rounds >= limit) {
            return Outcome::Interrupted { rounds };
        }
        rounds += 1;

        if !paths.search(net, pi) || !paths.path_to(sink, &mut path) {
            return Outcome::Diverged { rounds };
        }
        // Unreached nodes stay unreached for good (no residual arc leads into them), so their
        // potentials are left alone instead of sinking by the sentinel every round.
        for (p, &d) in pi.iter_mut().zip(paths.dist()) {
            if d < W::SENTINEL {
                *p -= d;
            }
        }

        let last = path[1];
        for hop in path.windows(2) {
            net.push_unit(hop[1], hop[0]);
        }
        tracing::trace!(round = rounds, via = last, "augmented one unit");

        if last == net.source() {
            return Outcome::Converged { rounds };
        }
    }
}

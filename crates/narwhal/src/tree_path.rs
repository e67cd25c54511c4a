//! Fundamental cycles: the tree path between the endpoints of each non-tree edge.

use crate::ledger::{Edge, EdgeLedger};
use rustc_hash::FxHashMap as HashMap;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrival {
    Unreached,
    Root,
    /// Reached through the tree edge at this sequence position.
    Via(usize),
}

/// Reusable BFS state for mapping non-tree edges onto tree paths.
///
/// The traversal walks the ledger's adjacency but only continues through edges whose position in
/// the canonical sequence is below `tree_len`. Any other incident edge is skipped and the scan of
/// the current vertex goes on.
#[derive(Debug)]
pub struct TreePathMapper {
    tree_len: usize,
    position: HashMap<(usize, usize), usize>,
    arrival: Vec<Arrival>,
    queue: VecDeque<usize>,
}

impl TreePathMapper {
    pub fn new<W>(vertex_count: usize, edges: &[Edge<W>]) -> Self {
        let mut position: HashMap<(usize, usize), usize> = HashMap::default();
        position.reserve(edges.len());
        for (ix, e) in edges.iter().enumerate() {
            position.entry(e.key()).or_insert(ix);
        }
        Self {
            tree_len: vertex_count.saturating_sub(1),
            position,
            arrival: vec![Arrival::Unreached; vertex_count],
            queue: VecDeque::new(),
        }
    }

    pub fn tree_len(&self) -> usize {
        self.tree_len
    }

    /// Sequence position of the edge joining `v` and `w`, if it is part of the sequence.
    pub fn position(&self, v: usize, w: usize) -> Option<usize> {
        lookup(&self.position, v, w)
    }

    /// Writes into `out` the tree edges on the path from `edges[i].v` back to `edges[i].u`.
    ///
    /// `out` is left empty when the endpoints are not joined by tree edges.
    pub fn tree_path<W, L>(&mut self, ledger: &L, edges: &[Edge<W>], i: usize, out: &mut Vec<usize>)
    where
        L: EdgeLedger<W>,
    {
        out.clear();
        let Some(&Edge { u: a, v: b, .. }) = edges.get(i) else {
            return;
        };
        if a >= self.arrival.len() || b >= self.arrival.len() {
            return;
        }

        self.explore_from(ledger, a);

        let mut v = b;
        while v != a {
            let Arrival::Via(r) = self.arrival[v] else {
                out.clear();
                return;
            };
            out.push(r);
            v = edges[r].other(v);
        }
    }

    fn explore_from<W, L>(&mut self, ledger: &L, root: usize)
    where
        L: EdgeLedger<W>,
    {
        self.arrival.fill(Arrival::Unreached);
        self.arrival[root] = Arrival::Root;
        self.queue.clear();
        self.queue.push_back(root);

        let tree_len = self.tree_len;
        while let Some(v) = self.queue.pop_front() {
            let position = &self.position;
            let arrival = &mut self.arrival;
            let queue = &mut self.queue;
            ledger.for_each_neighbor(v, |w| {
                let Some(r) = lookup(position, v, w) else {
                    return;
                };
                if r >= tree_len {
                    return;
                }
                if let Some(slot) = arrival.get_mut(w) {
                    if *slot == Arrival::Unreached {
                        *slot = Arrival::Via(r);
                        queue.push_back(w);
                    }
                }
            });
        }
    }
}

fn lookup(position: &HashMap<(usize, usize), usize>, v: usize, w: usize) -> Option<usize> {
    let key = if v <= w { (v, w) } else { (w, v) };
    position.get(&key).copied()
}

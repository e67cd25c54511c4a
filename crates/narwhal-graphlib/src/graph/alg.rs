//! Helper algorithms over [`WeightedGraph`].

use super::WeightedGraph;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Connected components in BFS order, each starting from its smallest vertex.
pub fn components<W>(g: &WeightedGraph<W>) -> Vec<Vec<usize>> {
    let mut seen: Vec<bool> = vec![false; g.vertex_count()];
    let mut out: Vec<Vec<usize>> = Vec::new();

    for start in g.vertices() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp: Vec<usize> = Vec::new();
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            comp.push(v);
            g.for_each_neighbor(v, |w, _ix, _weight| {
                if !seen[w] {
                    seen[w] = true;
                    q.push_back(w);
                }
            });
        }
        out.push(comp);
    }

    out
}

pub fn is_connected<W>(g: &WeightedGraph<W>) -> bool {
    components(g).len() <= 1
}

/// Disjoint-set forest with path halving and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of `a` and `b`; returns `false` if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Kruskal's minimum spanning forest.
///
/// Returns edge indices in the order they were accepted. Ties keep insertion order.
pub fn kruskal<W: PartialOrd>(g: &WeightedGraph<W>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..g.edge_count()).collect();
    order.sort_by(|&a, &b| {
        let wa = &g.edges[a].weight;
        let wb = &g.edges[b].weight;
        wa.partial_cmp(wb).unwrap_or(Ordering::Equal)
    });

    let mut sets = UnionFind::new(g.vertex_count());
    let mut out: Vec<usize> = Vec::with_capacity(g.vertex_count().saturating_sub(1));
    for ix in order {
        let e = &g.edges[ix];
        if e.v != e.w && sets.union(e.v, e.w) {
            out.push(ix);
        }
    }
    out
}

//! Weighted undirected graph container.
//!
//! This module contains the core `WeightedGraph` container plus a small set of helper
//! algorithms re-exported as `narwhal_graphlib::alg`.

use rustc_hash::FxBuildHasher;
use std::cell::{Ref, RefCell};

mod adj_cache;
pub mod alg;
mod entries;
mod options;

use adj_cache::UndirectedAdjCache;
use entries::EdgeEntry;
pub use entries::EdgeRef;
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug)]
pub struct WeightedGraph<W> {
    options: GraphOptions,

    vertex_count: usize,

    edges: Vec<EdgeEntry<W>>,
    edge_index: HashMap<(usize, usize), usize>,

    // CSR adjacency, rebuilt on the first query after `adj_gen` moves past the cached generation.
    adj_gen: u64,
    adj_cache: RefCell<UndirectedAdjCache>,
}

impl<W> Default for WeightedGraph<W> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<W: Clone> Clone for WeightedGraph<W> {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            vertex_count: self.vertex_count,
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            adj_gen: self.adj_gen,
            adj_cache: RefCell::new(UndirectedAdjCache::default()),
        }
    }
}

fn canonical(v: usize, w: usize) -> (usize, usize) {
    if v <= w { (v, w) } else { (w, v) }
}

impl<W> WeightedGraph<W> {
    fn invalidate_adj(&mut self) {
        self.adj_gen = self.adj_gen.wrapping_add(1);
    }

    fn ensure_adj(&self) -> Ref<'_, UndirectedAdjCache> {
        let generation = self.adj_gen;
        if self.adj_cache.borrow().generation != generation {
            let ends = self.edges.iter().map(|e| (e.v, e.w));
            *self.adj_cache.borrow_mut() =
                UndirectedAdjCache::build(generation, self.vertex_count, ends);
        }
        self.adj_cache.borrow()
    }

    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertex_count: 0,
            edges: Vec::new(),
            edge_index: HashMap::default(),
            // The empty cache sits at generation 0, so the first query always builds.
            adj_gen: 1,
            adj_cache: RefCell::new(UndirectedAdjCache::default()),
        }
    }

    /// Graph with vertices `0..n` and no edges.
    pub fn with_vertices(n: usize) -> Self {
        let mut g = Self::default();
        g.vertex_count = n;
        g
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        v < self.vertex_count
    }

    /// Grows the vertex range so that `v` exists.
    pub fn ensure_vertex(&mut self, v: usize) -> &mut Self {
        if v >= self.vertex_count {
            self.invalidate_adj();
            self.vertex_count = v + 1;
        }
        self
    }

    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts the undirected edge `{u, v}` or overwrites its weight.
    ///
    /// Returns the edge's insertion index, or `None` for a rejected self-loop.
    pub fn set_edge(&mut self, u: usize, v: usize, weight: W) -> Option<usize> {
        if u == v && !self.options.allow_self_loops {
            return None;
        }
        let key = canonical(u, v);
        if let Some(&ix) = self.edge_index.get(&key) {
            self.edges[ix].weight = weight;
            return Some(ix);
        }

        self.ensure_vertex(key.1);
        self.invalidate_adj();
        let ix = self.edges.len();
        self.edges.push(EdgeEntry {
            v: key.0,
            w: key.1,
            weight,
        });
        self.edge_index.insert(key, ix);
        Some(ix)
    }

    pub fn set_path(&mut self, vertices: &[usize], weight: W) -> &mut Self
    where
        W: Clone,
    {
        for pair in vertices.windows(2) {
            self.set_edge(pair[0], pair[1], weight.clone());
        }
        self
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edge_index.contains_key(&canonical(u, v))
    }

    pub fn edge_ix(&self, u: usize, v: usize) -> Option<usize> {
        self.edge_index.get(&canonical(u, v)).copied()
    }

    pub fn edge_weight(&self, u: usize, v: usize) -> Option<&W> {
        let ix = self.edge_ix(u, v)?;
        Some(&self.edges[ix].weight)
    }

    pub fn edge_by_ix(&self, ix: usize) -> Option<EdgeRef<'_, W>> {
        let e = self.edges.get(ix)?;
        Some(EdgeRef {
            ix,
            v: e.v,
            w: e.w,
            weight: &e.weight,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, W>> {
        self.edges.iter().enumerate().map(|(ix, e)| EdgeRef {
            ix,
            v: e.v,
            w: e.w,
            weight: &e.weight,
        })
    }

    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        self.for_each_neighbor(v, |w, _ix, _weight| out.push(w));
        out
    }

    /// Calls `f(neighbor, edge_ix, weight)` for every edge incident to `v`, in insertion order.
    pub fn for_each_neighbor<F>(&self, v: usize, mut f: F)
    where
        F: FnMut(usize, usize, &W),
    {
        if !self.has_vertex(v) {
            return;
        }
        let cache = self.ensure_adj();
        for &edge_ix in cache.edges(v) {
            let e = &self.edges[edge_ix];
            let w = if e.v == v { e.w } else { e.v };
            f(w, edge_ix, &e.weight);
        }
    }
}

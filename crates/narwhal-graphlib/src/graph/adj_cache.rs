//! CSR adjacency for [`WeightedGraph`](super::WeightedGraph): per-vertex slices of incident edge
//! indices, each slice in insertion order.

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct UndirectedAdjCache {
    pub(in crate::graph) generation: u64,
    pub(in crate::graph) offsets: Vec<usize>,
    pub(in crate::graph) edges: Vec<usize>,
}

impl UndirectedAdjCache {
    pub(in crate::graph) fn build(
        generation: u64,
        vertex_count: usize,
        ends: impl Iterator<Item = (usize, usize)> + Clone,
    ) -> Self {
        let mut offsets: Vec<usize> = vec![0; vertex_count + 1];
        for (v, w) in ends.clone() {
            offsets[v + 1] += 1;
            if v != w {
                offsets[w + 1] += 1;
            }
        }
        for i in 0..vertex_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor: Vec<usize> = offsets[..vertex_count].to_vec();
        let mut edges: Vec<usize> = vec![0; offsets[vertex_count]];
        for (edge_ix, (v, w)) in ends.enumerate() {
            edges[cursor[v]] = edge_ix;
            cursor[v] += 1;
            if v != w {
                edges[cursor[w]] = edge_ix;
                cursor[w] += 1;
            }
        }

        Self {
            generation,
            offsets,
            edges,
        }
    }

    pub(in crate::graph) fn edges(&self, v_ix: usize) -> &[usize] {
        let start = self.offsets[v_ix];
        let end = self.offsets[v_ix + 1];
        &self.edges[start..end]
    }
}

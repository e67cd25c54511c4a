//! Internal storage entries for [`WeightedGraph`](super::WeightedGraph).

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<W> {
    /// Smaller endpoint.
    pub(in crate::graph) v: usize,
    /// Larger endpoint.
    pub(in crate::graph) w: usize,
    pub(in crate::graph) weight: W,
}

/// Borrowed view of one stored edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, W> {
    pub ix: usize,
    pub v: usize,
    pub w: usize,
    pub weight: &'a W,
}

impl<W> EdgeRef<'_, W> {
    /// The endpoint across the edge from `from`.
    pub fn other(&self, from: usize) -> usize {
        if from == self.v { self.w } else { self.v }
    }
}

//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Accept `(v, v)` edges. They never take part in a spanning tree, but some inputs carry them.
    pub allow_self_loops: bool,
}

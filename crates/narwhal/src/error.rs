pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("a spanning tree over {vertices} vertices needs n-1 edges, got {edges}")]
    TooFewEdges { vertices: usize, edges: usize },

    #[error("edge #{edge} references vertex {vertex} outside 0..{vertices}")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertices: usize,
    },

    #[error("edge #{edge} is a self-loop")]
    SelfLoop { edge: usize },

    #[error("edge #{second} repeats the endpoints of edge #{first}")]
    DuplicateEdge { first: usize, second: usize },

    #[error("edge #{edge} ({u}, {v}) is missing from the graph")]
    EdgeNotInGraph { edge: usize, u: usize, v: usize },

    #[error("edge #{edge} weight {sequence} disagrees with the graph weight {graph}")]
    WeightMismatch {
        edge: usize,
        sequence: String,
        graph: String,
    },

    #[error("edge #{edge} weight {weight} is not finite or exceeds the supported magnitude")]
    WeightOutOfRange { edge: usize, weight: String },

    #[error("tree edge #{edge} closes a cycle; the first n-1 edges must form a spanning tree")]
    TreeHasCycle { edge: usize },

    #[error("min-cost flow did not converge within {limit} augmentation rounds")]
    RoundLimitExceeded { limit: usize },

    #[error("shortest-path search hit a negative cycle in round {round}; weights lost precision")]
    SearchDiverged { round: usize },
}

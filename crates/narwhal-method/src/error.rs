use crate::request::WeightKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("unsupported graph type: {graph_type}")]
    UnsupportedGraphType { graph_type: String },

    #[error("unsupported weight type: {type_weights}")]
    UnsupportedWeightType { type_weights: String },

    #[error("request has no edges")]
    NoEdges,

    #[error("numEdges is {declared} but {actual} edges were given")]
    EdgeCountMismatch { declared: usize, actual: usize },

    #[error("vertex {vertex} is outside 0..{size}")]
    VertexOutOfRange { vertex: usize, size: usize },

    #[error("edge #{index} is not a [u, v, weight] triple: {reason}")]
    MalformedEdge { index: usize, reason: String },

    #[error("edge #{index} weight {weight} does not fit the {kind} weight type")]
    UnrepresentableWeight {
        index: usize,
        weight: String,
        kind: WeightKind,
    },

    #[error(transparent)]
    Solver(#[from] narwhal::Error),
}

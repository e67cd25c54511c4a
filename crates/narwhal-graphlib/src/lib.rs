//! Weighted graph container used by `narwhal`.
//!
//! Vertices are dense indices `0..n`. Edges are undirected, stored once per unordered pair in
//! insertion order, and addressed either by their endpoints or by their insertion index.

mod graph;

pub use graph::{EdgeRef, GraphOptions, WeightedGraph, alg};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#![forbid(unsafe_code)]

//! JSON front door for the `narwhal` inverse MST solver.
//!
//! A request names the vertex count, the numeric weight type, and the edges as `[u, v, weight]`
//! triples with the designated spanning tree first. The response echoes `id`, `size`, and `type`
//! and carries the adjusted triples under `data`.
//!
//! ```
//! use narwhal_method::{MethodOptions, inverse_mst_method};
//! use serde_json::json;
//!
//! let input = json!({
//!     "id": 1,
//!     "type": "weighted_graph",
//!     "typeWeights": "int",
//!     "size": 4,
//!     "vertices": [0, 1, 2, 3],
//!     "numEdges": 4,
//!     "edges": [[0, 1, -1], [1, 2, 1], [2, 3, 3], [0, 3, 1]],
//! });
//! let output = inverse_mst_method(&input, &MethodOptions::default()).unwrap();
//! assert_eq!(output["data"][2], json!([2, 3, 1]));
//! ```

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
mod method;
pub mod request;

pub use error::{Error, Result};
pub use method::{MethodOptions, inverse_mst_method, solve_request, validate_method};
pub use request::{InverseMstRequest, InverseMstResponse, JsonWeight, SummaryReport, WeightKind};

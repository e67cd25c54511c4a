//! Wire types of the `InverseMst` method.

use crate::error::Error;
use narwhal::Weight;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The only graph kind the method accepts.
pub const WEIGHTED_GRAPH: &str = "weighted_graph";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseMstRequest {
    /// Opaque request id, echoed back.
    pub id: Value,
    #[serde(rename = "type")]
    pub graph_type: String,
    #[serde(rename = "typeWeights")]
    pub type_weights: String,
    /// Vertex count; vertices are `0..size`.
    pub size: usize,
    #[serde(rename = "numEdges")]
    pub num_edges: usize,
    #[serde(default)]
    pub vertices: Vec<usize>,
    /// `[u, v, weight]` triples, designated tree first.
    #[serde(default)]
    pub edges: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseMstResponse {
    pub id: Value,
    pub size: usize,
    #[serde(rename = "type")]
    pub graph_type: String,
    /// Adjusted `[u, v, weight]` triples in request order.
    pub data: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub rounds: usize,
    pub adjusted_edges: usize,
    pub total_adjustment: Value,
    pub flow_cost: Value,
}

/// Numeric type selected by `typeWeights`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKind {
    Int,
    Float,
    Double,
    /// Solved in `f64`; Rust has no portable extended-precision float.
    LongDouble,
}

impl WeightKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightKind::Int => "int",
            WeightKind::Float => "float",
            WeightKind::Double => "double",
            WeightKind::LongDouble => "long double",
        }
    }
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(WeightKind::Int),
            "float" => Ok(WeightKind::Float),
            "double" => Ok(WeightKind::Double),
            "long double" => Ok(WeightKind::LongDouble),
            other => Err(Error::UnsupportedWeightType {
                type_weights: other.to_string(),
            }),
        }
    }
}

/// A solver weight type that can be read from and written to JSON numbers.
pub trait JsonWeight: Weight {
    /// `None` when `value` is not a number representable in `Self`.
    fn from_json(value: &Value) -> Option<Self>;

    fn to_json(self) -> Value;

    /// Writes a sum accumulated in the wide [`Weight::Total`] type.
    fn total_to_json(total: Self::Total) -> Value;
}

impl JsonWeight for i32 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|w| i32::try_from(w).ok())
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn total_to_json(total: Self::Total) -> Value {
        Value::from(total)
    }
}

impl JsonWeight for f32 {
    fn from_json(value: &Value) -> Option<Self> {
        let w = value.as_f64()? as f32;
        w.is_finite().then_some(w)
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn total_to_json(total: Self::Total) -> Value {
        Value::from(total)
    }
}

impl JsonWeight for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn total_to_json(total: Self::Total) -> Value {
        Value::from(total)
    }
}

use crate::error::{Error, Result};
use crate::request::{
    InverseMstRequest, InverseMstResponse, JsonWeight, SummaryReport, WEIGHTED_GRAPH, WeightKind,
};
use narwhal_graphlib::WeightedGraph;
use narwhal::{Edge, InverseMstOptions};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct MethodOptions {
    /// Check structural preconditions before solving.
    pub validate: bool,
    pub max_rounds: Option<usize>,
    /// Attach a `summary` object to the response.
    pub summary: bool,
}

impl Default for MethodOptions {
    fn default() -> Self {
        Self {
            validate: true,
            max_rounds: None,
            summary: false,
        }
    }
}

impl MethodOptions {
    fn solver_options(&self) -> InverseMstOptions {
        InverseMstOptions {
            validate: self.validate,
            max_rounds: self.max_rounds,
        }
    }
}

/// Runs the inverse MST method on a JSON request and returns the JSON response.
pub fn inverse_mst_method(input: &Value, options: &MethodOptions) -> Result<Value> {
    let request = InverseMstRequest::deserialize(input)?;
    let response = solve_request(&request, options)?;
    Ok(serde_json::to_value(response)?)
}

/// Typed variant of [`inverse_mst_method`].
pub fn solve_request(
    request: &InverseMstRequest,
    options: &MethodOptions,
) -> Result<InverseMstResponse> {
    let kind = check_header(request)?;
    tracing::debug!(
        size = request.size,
        edges = request.num_edges,
        kind = kind.as_str(),
        "inverse MST request"
    );
    match kind {
        WeightKind::Int => solve_as::<i32>(request, kind, options),
        WeightKind::Float => solve_as::<f32>(request, kind, options),
        WeightKind::Double | WeightKind::LongDouble => solve_as::<f64>(request, kind, options),
    }
}

/// Parses and checks a request without solving it.
pub fn validate_method(input: &Value) -> Result<Value> {
    let request = InverseMstRequest::deserialize(input)?;
    let kind = check_header(&request)?;
    match kind {
        WeightKind::Int => validate_as::<i32>(&request, kind)?,
        WeightKind::Float => validate_as::<f32>(&request, kind)?,
        WeightKind::Double | WeightKind::LongDouble => validate_as::<f64>(&request, kind)?,
    }
    Ok(serde_json::json!({
        "id": request.id,
        "size": request.size,
        "type": request.graph_type,
        "valid": true,
    }))
}

fn check_header(request: &InverseMstRequest) -> Result<WeightKind> {
    if request.graph_type != WEIGHTED_GRAPH {
        return Err(Error::UnsupportedGraphType {
            graph_type: request.graph_type.clone(),
        });
    }
    let kind: WeightKind = request.type_weights.parse()?;
    if request.num_edges == 0 {
        return Err(Error::NoEdges);
    }
    if request.num_edges != request.edges.len() {
        return Err(Error::EdgeCountMismatch {
            declared: request.num_edges,
            actual: request.edges.len(),
        });
    }
    Ok(kind)
}

fn solve_as<W: JsonWeight>(
    request: &InverseMstRequest,
    kind: WeightKind,
    options: &MethodOptions,
) -> Result<InverseMstResponse> {
    let (ledger, mut edges) = build_input::<W>(request, kind)?;
    let summary = narwhal::try_inverse_mst(&ledger, &mut edges, &options.solver_options())?;

    let data = edges
        .iter()
        .map(|e| {
            Value::Array(vec![
                Value::from(e.u),
                Value::from(e.v),
                e.weight.to_json(),
            ])
        })
        .collect();
    let summary = options.summary.then(|| SummaryReport {
        rounds: summary.rounds,
        adjusted_edges: summary.adjusted_edges,
        total_adjustment: W::total_to_json(summary.total_adjustment),
        flow_cost: W::total_to_json(summary.flow_cost),
    });

    Ok(InverseMstResponse {
        id: request.id.clone(),
        size: request.size,
        graph_type: request.graph_type.clone(),
        data,
        summary,
    })
}

fn validate_as<W: JsonWeight>(request: &InverseMstRequest, kind: WeightKind) -> Result<()> {
    let (ledger, edges) = build_input::<W>(request, kind)?;
    narwhal::validate(&ledger, &edges)?;
    Ok(())
}

/// Builds the edge ledger and the canonical sequence from the request.
fn build_input<W: JsonWeight>(
    request: &InverseMstRequest,
    kind: WeightKind,
) -> Result<(WeightedGraph<W>, Vec<Edge<W>>)> {
    let size = request.size;
    let check_vertex = |vertex: usize| {
        if vertex < size {
            Ok(vertex)
        } else {
            Err(Error::VertexOutOfRange { vertex, size })
        }
    };

    for &v in &request.vertices {
        check_vertex(v)?;
    }

    let mut ledger: WeightedGraph<W> = WeightedGraph::with_vertices(size);
    let mut edges: Vec<Edge<W>> = Vec::with_capacity(request.edges.len());
    for (index, raw) in request.edges.iter().enumerate() {
        let (u, v, weight) = parse_triple::<W>(index, raw, kind)?;
        let u = check_vertex(u)?;
        let v = check_vertex(v)?;
        ledger.set_edge(u, v, weight);
        edges.push(Edge::new(u, v, weight));
    }
    Ok((ledger, edges))
}

fn parse_triple<W: JsonWeight>(
    index: usize,
    raw: &Value,
    kind: WeightKind,
) -> Result<(usize, usize, W)> {
    let malformed = |reason: &str| Error::MalformedEdge {
        index,
        reason: reason.to_string(),
    };
    let Some(items) = raw.as_array() else {
        return Err(malformed("not an array"));
    };
    let [u, v, weight] = items.as_slice() else {
        return Err(malformed("expected exactly three elements"));
    };
    let endpoint = |value: &Value| {
        value
            .as_u64()
            .and_then(|x| usize::try_from(x).ok())
            .ok_or_else(|| malformed("endpoints must be non-negative integers"))
    };
    let u = endpoint(u)?;
    let v = endpoint(v)?;
    let Some(weight_value) = W::from_json(weight) else {
        return Err(Error::UnrepresentableWeight {
            index,
            weight: weight.to_string(),
            kind,
        });
    };
    Ok((u, v, weight_value))
}

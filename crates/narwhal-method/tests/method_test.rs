use narwhal_method::{
    Error, InverseMstRequest, MethodOptions, WeightKind, inverse_mst_method, solve_request,
    validate_method,
};
use serde_json::{Value, json};

fn request(type_weights: &str, size: usize, edges: Value) -> Value {
    let num_edges = edges.as_array().map_or(0, Vec::len);
    let vertices: Vec<usize> = (0..size).collect();
    json!({
        "id": 1,
        "type": "weighted_graph",
        "typeWeights": type_weights,
        "size": size,
        "vertices": vertices,
        "numEdges": num_edges,
        "edges": edges,
    })
}

fn weight_sum(output: &Value) -> i64 {
    output["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t[2].as_i64().unwrap())
        .sum()
}

#[test]
fn single_chord_request() {
    let input = request("int", 4, json!([[0, 1, -1], [1, 2, 1], [2, 3, 3], [0, 3, 1]]));
    let output = inverse_mst_method(&input, &MethodOptions::default()).unwrap();

    assert_eq!(output["id"], json!(1));
    assert_eq!(output["size"], json!(4));
    assert_eq!(output["type"], json!("weighted_graph"));
    assert_eq!(
        output["data"],
        json!([[0, 1, -1], [1, 2, 1], [2, 3, 1], [0, 3, 1]])
    );
    assert_eq!(weight_sum(&output), 2);
    assert!(output.get("summary").is_none());
}

#[test]
fn two_chord_request() {
    let input = request(
        "int",
        4,
        json!([[0, 1, -1], [1, 2, 1], [2, 3, 3], [0, 3, 1], [1, 3, 2]]),
    );
    let output = inverse_mst_method(&input, &MethodOptions::default()).unwrap();

    assert_eq!(output["data"].as_array().unwrap().len(), 5);
    assert_eq!(weight_sum(&output), 4);
}

#[test]
fn tree_only_request_echoes_the_weights() {
    let input = request("int", 4, json!([[0, 1, -1], [1, 2, 1], [2, 3, 3]]));
    let output = inverse_mst_method(&input, &MethodOptions::default()).unwrap();

    assert_eq!(output["data"], json!([[0, 1, -1], [1, 2, 1], [2, 3, 3]]));
    assert_eq!(weight_sum(&output), 3);
}

#[test]
fn floating_weight_types() {
    let edges = json!([[0, 1, 2.5], [1, 2, 0.25], [0, 2, 1.0]]);
    for kind in ["float", "double", "long double"] {
        let output =
            inverse_mst_method(&request(kind, 3, edges.clone()), &MethodOptions::default())
                .unwrap();
        assert_eq!(
            output["data"],
            json!([[0, 1, 1.0], [1, 2, 0.25], [0, 2, 1.0]]),
            "typeWeights = {kind}"
        );
    }
}

#[test]
fn summary_is_attached_on_request() {
    let input = request("int", 4, json!([[0, 1, -1], [1, 2, 1], [2, 3, 3], [0, 3, 1]]));
    let options = MethodOptions {
        summary: true,
        ..Default::default()
    };
    let output = inverse_mst_method(&input, &options).unwrap();

    assert_eq!(
        output["summary"],
        json!({
            "rounds": 2,
            "adjustedEdges": 1,
            "totalAdjustment": 2,
            "flowCost": -2,
        })
    );
}

#[test]
fn typed_request_round_trip_keeps_the_id() {
    let mut input = request("int", 3, json!([[0, 1, 4], [1, 2, 1], [0, 2, 2]]));
    input["id"] = json!("job-7");
    let typed: InverseMstRequest = serde_json::from_value(input).unwrap();
    assert_eq!(typed.type_weights.parse::<WeightKind>().unwrap(), WeightKind::Int);

    let response = solve_request(&typed, &MethodOptions::default()).unwrap();
    assert_eq!(response.id, json!("job-7"));
    assert_eq!(response.data, vec![json!([0, 1, 2]), json!([1, 2, 1]), json!([0, 2, 2])]);
}

#[test]
fn zero_edges_are_rejected() {
    let input = request("int", 1, json!([]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NoEdges));
}

#[test]
fn unsupported_graph_and_weight_types() {
    let mut input = request("int", 2, json!([[0, 1, 1]]));
    input["type"] = json!("digraph");
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedGraphType { .. }));

    let input = request("decimal", 2, json!([[0, 1, 1]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported weight type: decimal");
}

#[test]
fn declared_edge_count_must_match() {
    let mut input = request("int", 3, json!([[0, 1, 1], [1, 2, 1]]));
    input["numEdges"] = json!(3);
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::EdgeCountMismatch {
            declared: 3,
            actual: 2
        }
    ));
}

#[test]
fn vertices_outside_the_declared_size() {
    let input = request("int", 3, json!([[0, 1, 1], [1, 7, 1]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::VertexOutOfRange { vertex: 7, size: 3 }));

    let mut input = request("int", 2, json!([[0, 1, 1]]));
    input["vertices"] = json!([0, 2]);
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::VertexOutOfRange { vertex: 2, size: 2 }));
}

#[test]
fn malformed_triples_and_weights() {
    let input = request("int", 2, json!([[0, 1]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedEdge { index: 0, .. }));

    let input = request("int", 2, json!([[0, -1, 1]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedEdge { index: 0, .. }));

    let input = request("int", 2, json!([[0, 1, 1.5]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::UnrepresentableWeight {
            index: 0,
            kind: WeightKind::Int,
            ..
        }
    ));

    let input = request("int", 2, json!([[0, 1, 3_000_000_000i64]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnrepresentableWeight { .. }));
}

#[test]
fn missing_fields_surface_as_request_errors() {
    let input = json!({ "id": 1, "type": "weighted_graph", "typeWeights": "int" });
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Request(_)));
}

#[test]
fn solver_errors_pass_through() {
    let input = request("int", 4, json!([[0, 1, 1], [1, 2, 1], [0, 2, 1], [2, 3, 1]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Solver(narwhal::Error::TreeHasCycle { edge: 2 })
    ));

    let input = request("int", 4, json!([[0, 1, -1], [1, 2, 1], [2, 3, 3], [0, 3, 1]]));
    let options = MethodOptions {
        max_rounds: Some(1),
        ..Default::default()
    };
    let err = inverse_mst_method(&input, &options).unwrap_err();
    assert!(matches!(
        err,
        Error::Solver(narwhal::Error::RoundLimitExceeded { limit: 1 })
    ));
}

#[test]
fn validate_only_reports_validity() {
    let input = request("double", 3, json!([[0, 1, 1.0], [1, 2, 2.0], [0, 2, 0.5]]));
    let output = validate_method(&input).unwrap();
    assert_eq!(output["valid"], json!(true));
    assert_eq!(output["id"], json!(1));

    let input = request("int", 3, json!([[0, 1, 1], [1, 0, 1]]));
    let err = validate_method(&input).unwrap_err();
    assert!(matches!(
        err,
        Error::Solver(narwhal::Error::DuplicateEdge { first: 0, second: 1 })
    ));
}

#[test]
fn int_summary_totals_can_exceed_the_int_range() {
    let max = 250_000_000;
    let mut edges: Vec<Value> = (0..6).map(|i| json!([i, i + 1, max])).collect();
    edges.extend((0..5).map(|i| json!([i, i + 2, -max])));
    let input = request("int", 7, Value::Array(edges));
    let options = MethodOptions {
        summary: true,
        ..Default::default()
    };
    let output = inverse_mst_method(&input, &options).unwrap();

    assert_eq!(output["summary"]["totalAdjustment"], json!(2_500_000_000i64));
    assert_eq!(output["summary"]["flowCost"], json!(-2_500_000_000i64));
    assert_eq!(weight_sum(&output), 11 * 250_000_000);
}

#[test]
fn float_weights_beyond_single_precision_range_are_rejected() {
    let input = request("float", 3, json!([[0, 1, 1.0], [1, 2, 2.0e6], [0, 2, 0.5]]));
    let err = inverse_mst_method(&input, &MethodOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Solver(narwhal::Error::WeightOutOfRange { edge: 1, .. })
    ));
}

use narwhal::graphlib::WeightedGraph;
use narwhal::{
    Edge, Error, InverseMstOptions, Summary, Weight, inverse_mst, ledger_from_edges,
    try_inverse_mst,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn edges<W: Copy>(triples: &[(usize, usize, W)]) -> Vec<Edge<W>> {
    triples.iter().copied().map(Edge::from).collect()
}

fn weights<W: Copy>(edges: &[Edge<W>]) -> Vec<W> {
    edges.iter().map(|e| e.weight).collect()
}

fn solve(n: usize, triples: &[(usize, usize, i32)]) -> (Vec<Edge<i32>>, Summary<i32>) {
    let mut seq = edges(triples);
    let g = ledger_from_edges(n, &seq);
    let summary = inverse_mst(&g, &mut seq);
    (seq, summary)
}

#[test]
fn path_tree_with_one_chord_lowers_the_heaviest_tree_edge() {
    let (out, summary) = solve(4, &[(0, 1, -1), (1, 2, 1), (2, 3, 3), (0, 3, 1)]);

    assert_eq!(out.len(), 4);
    assert_eq!(weights(&out), vec![-1, 1, 1, 1]);
    assert_eq!(weights(&out).iter().sum::<i32>(), 2);
    assert_eq!(
        summary,
        Summary {
            rounds: 2,
            adjusted_edges: 1,
            total_adjustment: 2,
            flow_cost: -2,
        }
    );
}

#[test]
fn path_tree_with_two_chords() {
    let (out, summary) = solve(
        4,
        &[(0, 1, -1), (1, 2, 1), (2, 3, 3), (0, 3, 1), (1, 3, 2)],
    );

    assert_eq!(out.len(), 5);
    assert_eq!(weights(&out), vec![-1, 1, 1, 1, 2]);
    assert_eq!(weights(&out).iter().sum::<i32>(), 4);
    assert_eq!(summary.total_adjustment, 2);
    assert_eq!(summary.flow_cost, -2);
    assert_eq!(summary.adjusted_edges, 1);
}

#[test]
fn tree_without_chords_is_left_alone() {
    let (out, summary) = solve(4, &[(0, 1, -1), (1, 2, 1), (2, 3, 3)]);

    assert_eq!(weights(&out), vec![-1, 1, 3]);
    assert_eq!(weights(&out).iter().sum::<i32>(), 3);
    assert_eq!(summary, Summary::unchanged());
}

#[test]
fn endpoints_are_preserved() {
    let input = [(0, 1, -1), (1, 2, 1), (2, 3, 3), (0, 3, 1), (1, 3, 2)];
    let (out, _) = solve(4, &input);
    for (e, &(u, v, _)) in out.iter().zip(&input) {
        assert_eq!((e.u, e.v), (u, v));
    }
}

#[test]
fn non_tree_edges_listed_first_in_the_graph_do_not_cut_the_traversal_short() {
    // Star tree centred on 0. The graph sees the chord (1, 3) before any tree edge, so the
    // traversal from vertex 1 has to skip it and keep scanning.
    let seq_triples = [(0, 1, 1), (0, 2, 1), (0, 3, 9), (1, 3, 2)];
    let mut g: WeightedGraph<i32> = WeightedGraph::with_vertices(4);
    g.set_edge(1, 3, 2);
    g.set_edge(0, 1, 1);
    g.set_edge(0, 2, 1);
    g.set_edge(0, 3, 9);
    assert_eq!(g.neighbors(1), vec![3, 0]);

    let mut seq = edges(&seq_triples);
    let summary = inverse_mst(&g, &mut seq);

    assert_eq!(weights(&seq), vec![1, 1, 2, 2]);
    assert_eq!(summary.total_adjustment, 7);
    assert_eq!(summary.flow_cost, -7);
}

#[test]
fn star_tree_with_two_chords_through_the_hub() {
    let (out, summary) = solve(
        4,
        &[(0, 1, 1), (0, 2, 1), (0, 3, 9), (1, 3, 2), (2, 3, 4)],
    );
    assert_eq!(weights(&out), vec![1, 1, 2, 2, 4]);
    assert_eq!(summary.total_adjustment, 7);
}

#[test]
fn floating_point_weights_share_the_same_solver() {
    let mut seq = edges(&[(0, 1, 2.5f64), (1, 2, 0.25), (0, 2, 1.0)]);
    let g = ledger_from_edges(3, &seq);
    let summary = inverse_mst(&g, &mut seq);

    assert_eq!(weights(&seq), vec![1.0, 0.25, 1.0]);
    assert_eq!(summary.total_adjustment, 1.5);
    assert_eq!(summary.flow_cost, -1.5);

    let mut seq32 = edges(&[(0, 1, 2.5f32), (1, 2, 0.25), (0, 2, 1.0)]);
    let g32 = ledger_from_edges(3, &seq32);
    inverse_mst(&g32, &mut seq32);
    assert_eq!(weights(&seq32), vec![1.0f32, 0.25, 1.0]);
}

#[test]
fn wide_integers_handle_large_weights() {
    let big: i64 = 4_000_000_000_000;
    let mut seq = edges(&[(0, 1, big), (1, 2, -big), (0, 2, 0i64)]);
    let g = ledger_from_edges(3, &seq);
    let summary = try_inverse_mst(&g, &mut seq, &InverseMstOptions::default()).unwrap();

    assert_eq!(weights(&seq), vec![0, -big, 0]);
    assert_eq!(summary.total_adjustment, i128::from(big));
}

#[test]
fn already_optimal_tree_with_ties_needs_no_change() {
    let (out, summary) = solve(3, &[(0, 1, 2), (1, 2, 2), (0, 2, 2)]);
    assert_eq!(weights(&out), vec![2, 2, 2]);
    assert_eq!(summary.total_adjustment, 0);
    assert_eq!(summary.adjusted_edges, 0);
    assert_eq!(summary.rounds, 1);
}

#[test]
fn single_vertex_graph_is_a_no_op() {
    let mut seq: Vec<Edge<i32>> = Vec::new();
    let g: WeightedGraph<i32> = WeightedGraph::with_vertices(1);
    assert_eq!(inverse_mst(&g, &mut seq), Summary::unchanged());
}

#[test]
fn round_cap_leaves_weights_untouched() {
    let mut seq = edges(&[(0, 1, -1), (1, 2, 1), (2, 3, 3), (0, 3, 1)]);
    let g = ledger_from_edges(4, &seq);
    let options = InverseMstOptions {
        validate: true,
        max_rounds: Some(1),
    };

    let err = try_inverse_mst(&g, &mut seq, &options).unwrap_err();
    assert!(matches!(err, narwhal::Error::RoundLimitExceeded { limit: 1 }));
    assert_eq!(weights(&seq), vec![-1, 1, 3, 1]);

    let options = InverseMstOptions {
        max_rounds: Some(2),
        ..options
    };
    let summary = try_inverse_mst(&g, &mut seq, &options).unwrap();
    assert_eq!(summary.rounds, 2);
    assert_eq!(weights(&seq), vec![-1, 1, 1, 1]);
}

#[test]
fn totals_at_the_magnitude_bound_do_not_overflow_the_weight_type() {
    // Path tree at +MAX with every second vertex pair joined by a chord at -MAX. Each chord is
    // raised by 2 * MAX, so the total exceeds i32::MAX.
    let max = i32::MAX_MAGNITUDE;
    let mut triples: Vec<(usize, usize, i32)> = (0..6).map(|i| (i, i + 1, max)).collect();
    triples.extend((0..5).map(|i| (i, i + 2, -max)));

    let (out, summary) = solve(7, &triples);

    assert_eq!(weights(&out), vec![max; 11]);
    assert_eq!(summary.adjusted_edges, 5);
    assert_eq!(summary.total_adjustment, 10 * i64::from(max));
    assert!(summary.total_adjustment > i64::from(i32::MAX));
    assert_eq!(summary.flow_cost, -summary.total_adjustment);
}

#[test]
fn lossy_single_precision_weights_fail_instead_of_looping() {
    let input = edges(&[
        (0, 1, -77_508_472.0f32),
        (1, 2, -6_688_531.5),
        (0, 3, 100_000_000.0),
        (1, 3, -100_000_000.0),
        (2, 3, -100_000_000.0),
    ]);
    let g = ledger_from_edges(4, &input);
    let unchecked = InverseMstOptions {
        validate: false,
        max_rounds: None,
    };

    let mut seq = input.clone();
    let err = try_inverse_mst(&g, &mut seq, &unchecked).unwrap_err();
    assert!(matches!(err, Error::SearchDiverged { round: 2 }), "{err}");
    assert_eq!(seq, input);

    let err = try_inverse_mst(&g, &mut seq, &InverseMstOptions::default()).unwrap_err();
    assert!(matches!(err, Error::WeightOutOfRange { edge: 0, .. }));

    assert_eq!(inverse_mst(&g, &mut seq), Summary::unchanged());
    assert_eq!(seq, input);
}

#[test]
fn unchecked_single_precision_solves_always_return() {
    let mut rng = StdRng::seed_from_u64(9);
    let options = InverseMstOptions {
        validate: false,
        max_rounds: Some(10_000),
    };
    for _ in 0..40 {
        let n = rng.gen_range(3..20);
        let mut seq: Vec<Edge<f32>> = Vec::new();
        for v in 1..n {
            let parent = rng.gen_range(0..v);
            seq.push(Edge::new(parent, v, rng.gen_range(-1.0e8f32..=1.0e8)));
        }
        for u in 0..n {
            for v in (u + 2)..n {
                if seq[..n - 1].iter().all(|e| e.key() != (u, v)) && rng.gen_bool(0.3) {
                    seq.push(Edge::new(u, v, rng.gen_range(-1.0e8f32..=1.0e8)));
                }
            }
        }
        let g = ledger_from_edges(n, &seq);
        match try_inverse_mst(&g, &mut seq, &options) {
            Ok(_) | Err(Error::SearchDiverged { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

//! Property tests: BFS reachability against a fixpoint oracle that works on
//! the raw edge list.

use std::collections::BTreeSet;

use proptest::prelude::*;

use rendezvous_core::config::TraversalConfig;
use rendezvous_graph::{reachable_set, Flow, LocationGraph, TraversalEngine};

#[derive(Debug, Clone)]
struct Case {
    n: usize,
    edges: Vec<(usize, usize)>,
    forbidden: Vec<bool>,
    first: Vec<usize>,
    second: Vec<usize>,
}

fn name(i: usize) -> String {
    format!("L{i}")
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (1_usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..n * 3),
            prop::collection::vec(prop::bool::weighted(0.2), n),
            prop::collection::vec(0..n, 1..4),
            prop::collection::vec(0..n, 1..4),
        )
            .prop_map(move |(edges, forbidden, first, second)| Case {
                n,
                edges,
                forbidden,
                first,
                second,
            })
    })
}

fn build(case: &Case) -> LocationGraph {
    let mut graph = LocationGraph::new();
    for i in 0..case.n {
        graph.ensure_location(&name(i));
    }
    for &(a, b) in &case.edges {
        graph.add_edge(&name(a), &name(b));
    }
    for (i, &forbidden) in case.forbidden.iter().enumerate() {
        if forbidden {
            graph.mark_forbidden(&name(i)).unwrap();
        }
    }
    graph
}

/// Grow the reached set edge by edge until nothing changes.
fn oracle(case: &Case, starts: &[usize], flow: Flow) -> BTreeSet<String> {
    let mut reached = vec![false; case.n];
    for &s in starts {
        if !case.forbidden[s] {
            reached[s] = true;
        }
    }
    let mut changed = true;
    while changed {
        changed = false;
        for &(a, b) in &case.edges {
            let (from, to) = match flow {
                Flow::Downstream => (a, b),
                Flow::Upstream => (b, a),
            };
            if reached[from] && !reached[to] && !case.forbidden[to] {
                reached[to] = true;
                changed = true;
            }
        }
    }
    (0..case.n).filter(|&i| reached[i]).map(name).collect()
}

fn names(indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| name(i)).collect()
}

proptest! {
    #[test]
    fn reachable_set_matches_oracle(case in case_strategy()) {
        let graph = build(&case);
        for (starts, flow) in [(&case.first, Flow::Downstream), (&case.second, Flow::Upstream)] {
            let got = reachable_set(&graph, &names(starts), flow, true).unwrap();
            prop_assert_eq!(got, oracle(&case, starts, flow));
        }
    }

    #[test]
    fn forbidden_never_reported(case in case_strategy()) {
        let graph = build(&case);
        for flow in [Flow::Downstream, Flow::Upstream] {
            let got = reachable_set(&graph, &names(&case.first), flow, true).unwrap();
            for i in 0..case.n {
                if case.forbidden[i] {
                    prop_assert!(!got.contains(&name(i)));
                }
            }
        }
    }

    #[test]
    fn meeting_points_is_sorted_oracle_intersection(case in case_strategy()) {
        let graph = build(&case);
        let down = oracle(&case, &case.first, Flow::Downstream);
        let up = oracle(&case, &case.second, Flow::Upstream);
        let expected: Vec<String> = up.intersection(&down).cloned().collect();

        for parallel in [false, true] {
            let engine = TraversalEngine::new(TraversalConfig {
                parallel: Some(parallel),
                ..Default::default()
            });
            let got = engine
                .meeting_points(&graph, &names(&case.first), &names(&case.second))
                .unwrap();
            prop_assert_eq!(&got, &expected);
        }
    }

    #[test]
    fn neighbor_views_are_symmetric(case in case_strategy()) {
        let graph = build(&case);
        for i in 0..case.n {
            let here = name(i);
            let down = graph.neighbors(&here, Flow::Downstream).unwrap();
            for there in &down {
                let back = graph.neighbors(there, Flow::Upstream).unwrap();
                let forward_count = down.iter().filter(|n| *n == there).count();
                let back_count = back.iter().filter(|n| **n == here).count();
                prop_assert_eq!(forward_count, back_count);
            }
        }
    }

    #[test]
    fn ignoring_forbidden_reaches_a_superset(case in case_strategy()) {
        let graph = build(&case);
        let walled = reachable_set(&graph, &names(&case.first), Flow::Downstream, true).unwrap();
        let open = reachable_set(&graph, &names(&case.first), Flow::Downstream, false).unwrap();
        prop_assert!(walled.is_subset(&open));
    }
}

mod common;

use std::collections::{BTreeSet, HashSet};

use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;
use taskdag::{Priority, TaskGraph, TaskId, TaskdagError};

use common::{assert_dependencies_first, position};

/// Edges `(task, dependency)` over `n` nodes, possibly cyclic.
fn graph_strategy(max_tasks: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<i64>)> {
    (1..=max_tasks).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..n * 2),
            proptest::collection::vec(-3i64..3, n),
        )
    })
}

/// Edges where task `i` only depends on tasks `< i`, so the graph is acyclic.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<i64>)> {
    graph_strategy(max_tasks).prop_map(|(n, edges, priorities)| {
        let edges = edges
            .into_iter()
            .filter_map(|(a, b)| match a.cmp(&b) {
                std::cmp::Ordering::Greater => Some((a, b)),
                std::cmp::Ordering::Less => Some((b, a)),
                std::cmp::Ordering::Equal => None,
            })
            .collect();
        (n, edges, priorities)
    })
}

fn build(n: usize, edges: &[(usize, usize)], priorities: &[i64]) -> (TaskGraph<(), ()>, Vec<TaskId>) {
    let mut graph = TaskGraph::new();
    let ids: Vec<TaskId> = (0..n)
        .map(|i| graph.add_task_with_priority(format!("t{i}"), Priority::new(priorities[i]), |_: &()| Ok(())))
        .collect();
    for &(task, dep) in edges {
        graph.depend(ids[task], ids[dep]).unwrap();
    }
    (graph, ids)
}

/// Tasks reachable from `roots` by following dependency edges.
fn reachable(graph: &TaskGraph<(), ()>, roots: &[TaskId]) -> BTreeSet<TaskId> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<TaskId> = roots.to_vec();
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            stack.extend(graph.dependencies_of(id).unwrap());
        }
    }
    seen
}

proptest! {
    #[test]
    fn acyclic_graphs_always_schedule_completely(
        (n, edges, priorities) in dag_strategy(12),
        root_picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let (graph, ids) = build(n, &edges, &priorities);
        let roots: Vec<TaskId> = root_picks.iter().map(|ix| ids[ix.index(n)]).collect();

        let order = graph.schedule(roots.iter().copied()).unwrap();
        let unique: HashSet<TaskId> = order.iter().copied().collect();

        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(unique.into_iter().collect::<BTreeSet<_>>(), reachable(&graph, &roots));
        assert_dependencies_first(&graph, &order);
    }

    #[test]
    fn cycle_error_matches_petgraph(
        (n, edges, priorities) in graph_strategy(8),
    ) {
        let (graph, ids) = build(n, &edges, &priorities);

        let mut oracle: DiGraphMap<usize, ()> = DiGraphMap::new();
        for i in 0..n {
            oracle.add_node(i);
        }
        for &(task, dep) in &edges {
            oracle.add_edge(dep, task, ());
        }

        match graph.schedule(ids.iter().copied()) {
            Ok(order) => {
                prop_assert!(!is_cyclic_directed(&oracle));
                prop_assert_eq!(order.len(), n);
            }
            Err(TaskdagError::DependencyCycle { unresolved, total }) => {
                prop_assert!(is_cyclic_directed(&oracle));
                prop_assert_eq!(total, n);
                prop_assert!(unresolved > 0);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn ready_tasks_come_out_by_priority(
        priorities in proptest::collection::vec(any::<i64>(), 1..20),
    ) {
        let n = priorities.len();
        let (graph, ids) = build(n, &[], &priorities);

        let order = graph.schedule(ids.iter().copied()).unwrap();
        let emitted: Vec<i64> = order
            .iter()
            .map(|id| graph.priority_of(*id).unwrap().value())
            .collect();

        let mut expected = priorities.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(emitted, expected);
        for id in &ids {
            prop_assert!(position(&order, *id) < n);
        }
    }
}

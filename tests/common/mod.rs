#![allow(dead_code)]

use taskdag::{TaskGraph, TaskId};

pub use taskdag_test_utils::init_tracing;
pub use taskdag_test_utils::recorder::Recorder;

/// Position of `id` in `order`, panicking if it is missing.
pub fn position(order: &[TaskId], id: TaskId) -> usize {
    order
        .iter()
        .position(|t| *t == id)
        .unwrap_or_else(|| panic!("task {id} missing from order {order:?}"))
}

/// Assert that every task in `order` comes after all of its direct dependencies.
pub fn assert_dependencies_first<I, O>(graph: &TaskGraph<I, O>, order: &[TaskId]) {
    for &id in order {
        for dep in graph.dependencies_of(id).expect("task in graph") {
            assert!(
                position(order, dep) < position(order, id),
                "{dep} must run before {id} in {order:?}"
            );
        }
    }
}

/// A graph of tasks that return their own name.
pub fn named_graph(names: &[&str]) -> (TaskGraph<(), String>, Vec<TaskId>) {
    let mut graph = TaskGraph::new();
    let ids = names
        .iter()
        .map(|name| {
            let out = name.to_string();
            graph.add_task(*name, move |_: &()| Ok(out.clone()))
        })
        .collect();
    (graph, ids)
}

/// Concatenate outputs in execution order.
pub fn concat(acc: &mut String, out: String) {
    acc.push_str(&out);
}

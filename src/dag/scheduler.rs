// src/dag/scheduler.rs

//! Priority-aware topological sort over the tasks reachable from a root set.
//!
//! Each call expands the roots into a private arena of [`GraphNode`]s, then
//! runs Kahn's algorithm with a [`PriorityQueue`] as the ready set so that,
//! among tasks whose dependencies are all done, the highest [`Priority`]
//! goes first.
//!
//! Equal-priority tasks that are ready at the same time come out in an
//! unspecified order. The result is stable for an unchanged graph and root
//! order, but callers must not depend on how such ties are broken.
//!
//! [`Priority`]: crate::types::Priority

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::heap::PriorityQueue;
use crate::errors::{Result, TaskdagError};
use crate::types::{Priority, TaskId};

/// Per-call scheduling state for one task.
#[derive(Debug)]
struct GraphNode {
    task: TaskId,
    priority: Priority,
    /// Dependencies not yet emitted.
    indegree: usize,
    /// Nodes that depend on this one.
    successors: Vec<usize>,
}

/// Arena of nodes for every task reachable from the roots.
#[derive(Debug)]
struct ExpandedGraph {
    nodes: Vec<GraphNode>,
}

impl ExpandedGraph {
    /// Build one node per distinct task reachable from `roots`.
    ///
    /// Nodes are memoized by [`TaskId`], so a dependency shared by several
    /// tasks is expanded once. `indegree` is the task's direct dependency
    /// count, independent of how many paths reach it.
    fn expand<I, O>(
        graph: &TaskGraph<I, O>,
        roots: impl IntoIterator<Item = TaskId>,
    ) -> Result<Self> {
        let mut nodes: Vec<GraphNode> = Vec::new();
        let mut index: HashMap<TaskId, usize> = HashMap::new();
        let mut stack: Vec<usize> = Vec::new();

        let mut intern = |task: TaskId, nodes: &mut Vec<GraphNode>| -> Result<(usize, bool)> {
            match index.entry(task) {
                Entry::Occupied(e) => Ok((*e.get(), false)),
                Entry::Vacant(e) => {
                    let entry = graph.entry(task)?;
                    let idx = nodes.len();
                    nodes.push(GraphNode {
                        task,
                        priority: entry.priority,
                        indegree: entry.dependencies.len(),
                        successors: Vec::new(),
                    });
                    e.insert(idx);
                    Ok((idx, true))
                }
            }
        };

        for root in roots {
            let (idx, fresh) = intern(root, &mut nodes)?;
            if fresh {
                stack.push(idx);
            }
        }

        while let Some(idx) = stack.pop() {
            let task = nodes[idx].task;
            for dep in graph.entry(task)?.dependencies.iter().copied() {
                let (dep_idx, fresh) = intern(dep, &mut nodes)?;
                if fresh {
                    stack.push(dep_idx);
                }
                nodes[dep_idx].successors.push(idx);
            }
        }

        debug!(nodes = nodes.len(), "expanded task graph");
        Ok(Self { nodes })
    }

    /// Consume the arena and emit tasks in dependency order.
    fn into_order(mut self) -> Result<Vec<TaskId>> {
        let total = self.nodes.len();
        let mut order = Vec::with_capacity(total);

        let mut ready = PriorityQueue::with_capacity(total, higher_priority);
        ready.extend(
            self.nodes
                .iter()
                .enumerate()
                .filter(|(_, node)| node.indegree == 0)
                .map(|(idx, node)| (node.priority, idx)),
        );

        while let Some((_, idx)) = ready.pop() {
            let node = &mut self.nodes[idx];
            order.push(node.task);
            let successors = std::mem::take(&mut node.successors);

            for succ in successors {
                let succ_node = &mut self.nodes[succ];
                succ_node.indegree -= 1;
                if succ_node.indegree == 0 {
                    ready.push((succ_node.priority, succ));
                }
            }
        }

        if order.len() == total {
            Ok(order)
        } else {
            let unresolved = total - order.len();
            warn!(unresolved, total, "dependency cycle detected; no valid order");
            Err(TaskdagError::DependencyCycle { unresolved, total })
        }
    }
}

fn higher_priority(a: &(Priority, usize), b: &(Priority, usize)) -> bool {
    a.0 > b.0
}

/// Compute the execution order for every task reachable from `roots`.
///
/// Duplicate roots are ignored. Fails with
/// [`TaskdagError::DependencyCycle`] if the reachable tasks cannot be
/// ordered, or [`TaskdagError::UnknownTask`] if a root is not in `graph`.
pub fn topological_order<I, O>(
    graph: &TaskGraph<I, O>,
    roots: impl IntoIterator<Item = TaskId>,
) -> Result<Vec<TaskId>> {
    ExpandedGraph::expand(graph, roots)?.into_order()
}

impl<I, O> TaskGraph<I, O> {
    /// Order the tasks reachable from `roots` without running them.
    pub fn schedule(&self, roots: impl IntoIterator<Item = TaskId>) -> Result<Vec<TaskId>> {
        topological_order(self, roots)
    }
}

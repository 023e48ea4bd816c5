// src/dag/graph.rs

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::errors::{Result, TaskdagError};
use crate::exec::Work;
use crate::types::{Priority, TaskId};

/// A registered task: its label, priority, direct dependencies and work.
pub(crate) struct TaskEntry<I, O> {
    pub(crate) name: String,
    pub(crate) priority: Priority,
    /// Direct dependencies: tasks that must complete before this one runs.
    pub(crate) dependencies: BTreeSet<TaskId>,
    pub(crate) work: Box<dyn Work<I, O>>,
}

/// Arena of tasks addressed by [`TaskId`].
///
/// Tasks are registered once and live as long as the graph. Dependency edges
/// and priorities may be changed freely between runs; each run builds its
/// own scheduling state and leaves the graph untouched.
///
/// Every task receives a shared reference to the same input of type `I` and
/// produces an `O` that the caller folds into an accumulator.
pub struct TaskGraph<I, O> {
    tasks: Vec<TaskEntry<I, O>>,
}

impl<I, O> TaskGraph<I, O> {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Register a closure task with [`Priority::DEFAULT`].
    pub fn add_task<F>(&mut self, name: impl Into<String>, work: F) -> TaskId
    where
        F: Fn(&I) -> anyhow::Result<O> + 'static,
    {
        self.insert(name.into(), Priority::DEFAULT, Box::new(work))
    }

    pub fn add_task_with_priority<F>(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
        work: F,
    ) -> TaskId
    where
        F: Fn(&I) -> anyhow::Result<O> + 'static,
    {
        self.insert(name.into(), priority, Box::new(work))
    }

    /// Register any [`Work`] implementation.
    pub fn add_work<W>(&mut self, name: impl Into<String>, priority: Priority, work: W) -> TaskId
    where
        W: Work<I, O> + 'static,
    {
        self.insert(name.into(), priority, Box::new(work))
    }

    fn insert(&mut self, name: String, priority: Priority, work: Box<dyn Work<I, O>>) -> TaskId {
        let id = TaskId(self.tasks.len());
        debug!(task = %name, id = %id, %priority, "registered task");
        self.tasks.push(TaskEntry {
            name,
            priority,
            dependencies: BTreeSet::new(),
            work,
        });
        id
    }

    pub fn set_priority(&mut self, task: TaskId, priority: Priority) -> Result<&mut Self> {
        self.entry_mut(task)?.priority = priority;
        Ok(self)
    }

    /// Make `task` wait for `dependency`.
    ///
    /// Adding an edge twice is a no-op. A task may depend on itself; the
    /// scheduler then reports a dependency cycle.
    pub fn depend(&mut self, task: TaskId, dependency: TaskId) -> Result<&mut Self> {
        self.entry(dependency)?;
        self.entry_mut(task)?.dependencies.insert(dependency);
        Ok(self)
    }

    /// Remove a dependency edge. Returns whether the edge existed.
    pub fn remove_dependency(&mut self, task: TaskId, dependency: TaskId) -> Result<bool> {
        Ok(self.entry_mut(task)?.dependencies.remove(&dependency))
    }

    pub fn contains(&self, task: TaskId) -> bool {
        task.0 < self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All task ids in registration order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        (0..self.tasks.len()).map(TaskId)
    }

    pub fn name_of(&self, task: TaskId) -> Option<&str> {
        self.tasks.get(task.0).map(|e| e.name.as_str())
    }

    pub fn priority_of(&self, task: TaskId) -> Option<Priority> {
        self.tasks.get(task.0).map(|e| e.priority)
    }

    /// Direct dependencies of a task, in id order.
    pub fn dependencies_of(&self, task: TaskId) -> Option<impl Iterator<Item = TaskId> + '_> {
        self.tasks
            .get(task.0)
            .map(|e| e.dependencies.iter().copied())
    }

    pub(crate) fn entry(&self, task: TaskId) -> Result<&TaskEntry<I, O>> {
        self.tasks.get(task.0).ok_or(TaskdagError::UnknownTask(task))
    }

    fn entry_mut(&mut self, task: TaskId) -> Result<&mut TaskEntry<I, O>> {
        self.tasks
            .get_mut(task.0)
            .ok_or(TaskdagError::UnknownTask(task))
    }
}

impl<I, O> Default for TaskGraph<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> fmt::Debug for TaskGraph<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (index, entry) in self.tasks.iter().enumerate() {
            list.entry(&format_args!(
                "{} {:?} priority={} deps={:?}",
                TaskId(index),
                entry.name,
                entry.priority,
                entry.dependencies
            ));
        }
        list.finish()
    }
}

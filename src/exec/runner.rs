// src/exec/runner.rs

//! Sequential execution of a scheduled order.
//!
//! The `try_*` forms take a combine step that may itself fail; a failure
//! there is reported against the task whose output was being folded.

use anyhow::Context;
use tracing::{debug, error, info};

use crate::dag::TaskGraph;
use crate::errors::{Result, TaskdagError};
use crate::types::TaskId;

/// Run `order` one task after another, folding outputs into `initial`.
///
/// Every task receives the same `input`. The first failing task, or the
/// first failing combine step, stops the run; outputs already folded in are
/// not undone, but the partial accumulator is dropped and only the error is
/// returned.
pub fn run_in_order<I, O, T, F>(
    graph: &TaskGraph<I, O>,
    order: &[TaskId],
    input: &I,
    initial: T,
    mut combine: F,
) -> Result<T>
where
    F: FnMut(&mut T, O) -> anyhow::Result<()>,
{
    let mut acc = initial;

    for (position, &id) in order.iter().enumerate() {
        let entry = graph.entry(id)?;
        debug!(
            task = %entry.name,
            id = %id,
            position,
            priority = %entry.priority,
            "running task"
        );

        let output = entry.work.run(input).map_err(|err| {
            error!(task = %entry.name, id = %id, error = %err, "task failed; aborting run");
            TaskdagError::internal(&entry.name, err)
        })?;

        combine(&mut acc, output).map_err(|err| {
            error!(task = %entry.name, id = %id, error = %err, "combining output failed; aborting run");
            TaskdagError::internal(&entry.name, err)
        })?;
    }

    info!(tasks = order.len(), "run finished");
    Ok(acc)
}

impl<I, O> TaskGraph<I, O> {
    /// Schedule every task reachable from `roots` and run them in order.
    ///
    /// Returns [`TaskdagError::DependencyCycle`] without running anything if
    /// the tasks cannot be ordered, or [`TaskdagError::Internal`] if a task
    /// fails.
    pub fn run<T, F>(
        &self,
        roots: impl IntoIterator<Item = TaskId>,
        input: &I,
        initial: T,
        mut combine: F,
    ) -> Result<T>
    where
        F: FnMut(&mut T, O),
    {
        self.try_run(roots, input, initial, |acc, out| {
            combine(acc, out);
            Ok(())
        })
    }

    /// Like [`run`](Self::run), with a combine step that can fail.
    ///
    /// A combine failure is reported as [`TaskdagError::Internal`] naming the
    /// task whose output was being folded; no later task runs.
    pub fn try_run<T, F>(
        &self,
        roots: impl IntoIterator<Item = TaskId>,
        input: &I,
        initial: T,
        combine: F,
    ) -> Result<T>
    where
        F: FnMut(&mut T, O) -> anyhow::Result<()>,
    {
        let order = self.schedule(roots)?;
        info!(tasks = order.len(), "starting run");
        run_in_order(self, &order, input, initial, combine)
    }

    /// Like [`run`](Self::run), but surfaces the error as an [`anyhow::Error`]
    /// so it can be propagated with `?` from application code.
    pub fn execute<T, F>(
        &self,
        roots: impl IntoIterator<Item = TaskId>,
        input: &I,
        initial: T,
        combine: F,
    ) -> anyhow::Result<T>
    where
        F: FnMut(&mut T, O),
    {
        self.run(roots, input, initial, combine)
            .context("task graph run failed")
    }

    pub fn try_execute<T, F>(
        &self,
        roots: impl IntoIterator<Item = TaskId>,
        input: &I,
        initial: T,
        combine: F,
    ) -> anyhow::Result<T>
    where
        F: FnMut(&mut T, O) -> anyhow::Result<()>,
    {
        self.try_run(roots, input, initial, combine)
            .context("task graph run failed")
    }

    /// Run `task` and everything it depends on.
    pub fn run_task<T, F>(&self, task: TaskId, input: &I, initial: T, combine: F) -> Result<T>
    where
        F: FnMut(&mut T, O),
    {
        self.run([task], input, initial, combine)
    }

    pub fn try_run_task<T, F>(&self, task: TaskId, input: &I, initial: T, combine: F) -> Result<T>
    where
        F: FnMut(&mut T, O) -> anyhow::Result<()>,
    {
        self.try_run([task], input, initial, combine)
    }

    pub fn execute_task<T, F>(
        &self,
        task: TaskId,
        input: &I,
        initial: T,
        combine: F,
    ) -> anyhow::Result<T>
    where
        F: FnMut(&mut T, O),
    {
        self.execute([task], input, initial, combine)
    }

    pub fn try_execute_task<T, F>(
        &self,
        task: TaskId,
        input: &I,
        initial: T,
        combine: F,
    ) -> anyhow::Result<T>
    where
        F: FnMut(&mut T, O) -> anyhow::Result<()>,
    {
        self.try_execute([task], input, initial, combine)
    }
}


impl<I> TaskGraph<I, ()> {
    /// Run tasks that produce no output.
    pub fn run_for_effect(&self, roots: impl IntoIterator<Item = TaskId>, input: &I) -> Result<()> {
        self.run(roots, input, (), |_, _| {})
    }

    pub fn run_task_for_effect(&self, task: TaskId, input: &I) -> Result<()> {
        self.run_for_effect([task], input)
    }
}

impl TaskGraph<(), ()> {
    /// Run tasks that take no input and produce no output.
    pub fn run_unit(&self, roots: impl IntoIterator<Item = TaskId>) -> Result<()> {
        self.run_for_effect(roots, &())
    }

    pub fn run_unit_task(&self, task: TaskId) -> Result<()> {
        self.run_unit([task])
    }
}

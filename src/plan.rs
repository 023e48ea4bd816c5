// src/plan.rs

//! Turn a validated plan file into a runnable [`TaskGraph`] of shell commands.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ConfigFile;
use crate::dag::TaskGraph;
use crate::errors::{Result, TaskdagError};
use crate::exec::{ShellCommand, TaskReport};
use crate::types::TaskId;

/// Task graph built from a [`ConfigFile`], plus the name to id mapping.
#[derive(Debug)]
pub struct CommandPlan {
    graph: TaskGraph<(), TaskReport>,
    ids: BTreeMap<String, TaskId>,
}

impl CommandPlan {
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        let mut graph = TaskGraph::new();
        let mut ids = BTreeMap::new();

        for (name, tc) in cfg.task.iter() {
            let id = graph.add_work(
                name.clone(),
                cfg.priority_of(name),
                ShellCommand::new(name.clone(), tc.cmd.clone()),
            );
            ids.insert(name.clone(), id);
        }

        for (name, tc) in cfg.task.iter() {
            let task = ids[name];
            for dep in tc.after.iter() {
                let dep_id = *ids.get(dep).ok_or_else(|| {
                    TaskdagError::ConfigError(format!(
                        "task '{}' has unknown dependency '{}' in `after`",
                        name, dep
                    ))
                })?;
                graph.depend(task, dep_id)?;
            }
        }

        debug!(tasks = graph.len(), "built command plan");
        Ok(Self { graph, ids })
    }

    pub fn graph(&self) -> &TaskGraph<(), TaskReport> {
        &self.graph
    }

    pub fn id_of(&self, name: &str) -> Option<TaskId> {
        self.ids.get(name).copied()
    }

    /// Resolve the `--task` selection to root ids.
    ///
    /// An empty selection means every task in the plan.
    pub fn roots(&self, selected: &[String]) -> Result<Vec<TaskId>> {
        if selected.is_empty() {
            return Ok(self.ids.values().copied().collect());
        }

        selected
            .iter()
            .map(|name| {
                self.id_of(name)
                    .ok_or_else(|| TaskdagError::ConfigError(format!("unknown task '{name}'")))
            })
            .collect()
    }

    /// Names of the tasks reachable from `roots`, in execution order.
    pub fn order(&self, roots: &[TaskId]) -> Result<Vec<String>> {
        let order = self.graph.schedule(roots.iter().copied())?;
        Ok(order
            .into_iter()
            .filter_map(|id| self.graph.name_of(id).map(str::to_string))
            .collect())
    }

    /// Run the selected tasks and return one report per task, in order.
    pub fn run(&self, roots: &[TaskId]) -> Result<Vec<TaskReport>> {
        self.graph
            .run(roots.iter().copied(), &(), Vec::new(), |reports, report| {
                reports.push(report)
            })
    }
}

// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::TaskId;

/// Boxed error carried as the `source` of a failed task.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum TaskdagError {
    /// The dependency graph contains at least one cycle, so no total order
    /// exists. Nothing was executed.
    #[error("dependency cycle: {unresolved} of {total} tasks could not be ordered")]
    DependencyCycle { unresolved: usize, total: usize },

    /// A task's work failed; the run stopped at that task.
    #[error("internal: task '{task}' failed")]
    Internal {
        task: String,
        #[source]
        source: BoxError,
    },

    #[error("Task not found: {0}")]
    UnknownTask(TaskId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TaskdagError {
    pub fn is_cycle(&self) -> bool {
        matches!(self, TaskdagError::DependencyCycle { .. })
    }

    pub(crate) fn internal(task: &str, err: anyhow::Error) -> Self {
        TaskdagError::Internal {
            task: task.to_string(),
            source: err.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskdagError>;

// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::Priority;

/// Top-level plan file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// default_priority = "middle"
///
/// [task.fetch]
/// cmd = "git fetch"
/// priority = "high"
///
/// [task.build]
/// cmd = "cargo build"
/// after = ["fetch"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<name>]`, keyed by task name.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// Priority for tasks that do not set one. Falls back to
    /// [`Priority::DEFAULT`].
    #[serde(default)]
    pub default_priority: Option<PrioritySetting>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// The command to execute.
    pub cmd: String,

    /// Tasks that must finish before this one starts (`after = ["A", "B"]`).
    #[serde(default)]
    pub after: Vec<String>,

    #[serde(default)]
    pub priority: Option<PrioritySetting>,
}

/// A priority as written in TOML: a preset name or a raw integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PrioritySetting {
    Value(i64),
    Named(String),
}

impl PrioritySetting {
    pub fn resolve(&self) -> Result<Priority, String> {
        match self {
            PrioritySetting::Value(v) => Ok(Priority(*v)),
            PrioritySetting::Named(name) => name.parse(),
        }
    }
}

/// A validated plan file.
///
/// Every `after` reference names a known task and every priority setting
/// parses. Dependency cycles are not checked here; the scheduler reports
/// them when the plan is ordered.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub task: BTreeMap<String, TaskConfig>,
    priorities: BTreeMap<String, Priority>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        task: BTreeMap<String, TaskConfig>,
        priorities: BTreeMap<String, Priority>,
    ) -> Self {
        Self {
            config,
            task,
            priorities,
        }
    }

    /// Effective priority of a task: its own setting, then
    /// `[config].default_priority`, then [`Priority::DEFAULT`].
    pub fn priority_of(&self, name: &str) -> Priority {
        self.priorities.get(name).copied().unwrap_or_default()
    }
}

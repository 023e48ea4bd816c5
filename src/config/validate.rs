// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskdagError};
use crate::types::Priority;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TaskdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let priorities = validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.task, priorities))
    }
}

/// Validate a raw plan and resolve the effective priority of every task.
pub fn validate_config(cfg: &RawConfigFile) -> Result<BTreeMap<String, Priority>> {
    ensure_has_tasks(cfg)?;
    validate_task_dependencies(cfg)?;
    resolve_priorities(cfg)
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(TaskdagError::ConfigError(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_dependencies(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            if !cfg.task.contains_key(dep) {
                return Err(TaskdagError::ConfigError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
        }
    }
    Ok(())
}

fn resolve_priorities(cfg: &RawConfigFile) -> Result<BTreeMap<String, Priority>> {
    let default = match &cfg.config.default_priority {
        Some(setting) => setting.resolve().map_err(|e| {
            TaskdagError::ConfigError(format!("[config].default_priority: {e}"))
        })?,
        None => Priority::DEFAULT,
    };

    let mut priorities = BTreeMap::new();
    for (name, task) in cfg.task.iter() {
        let priority = match &task.priority {
            Some(setting) => setting.resolve().map_err(|e| {
                TaskdagError::ConfigError(format!("task '{}' priority: {}", name, e))
            })?,
            None => default,
        };
        priorities.insert(name.clone(), priority);
    }
    Ok(priorities)
}

// src/lib.rs

//! Priority-aware dependency scheduling.
//!
//! Register units of work in a [`TaskGraph`], wire up dependencies, and run
//! every task reachable from a set of roots. Tasks run one at a time; a task
//! only starts once all of its dependencies have finished, and among ready
//! tasks the one with the highest [`Priority`] goes first. Circular
//! dependencies are reported as [`TaskdagError::DependencyCycle`] before
//! anything runs.
//!
//! ```
//! use taskdag::{Priority, TaskGraph};
//!
//! let mut graph: TaskGraph<(), &'static str> = TaskGraph::new();
//! let a = graph.add_task_with_priority("a", Priority::HIGH, |_: &()| Ok("A"));
//! let b = graph.add_task("b", |_: &()| Ok("B"));
//! let c = graph.add_task("c", |_: &()| Ok("C"));
//! graph.depend(c, a).unwrap().depend(c, b).unwrap();
//!
//! let out = graph
//!     .run_task(c, &(), String::new(), |acc, s| acc.push_str(s))
//!     .unwrap();
//! assert_eq!(out, "ABC");
//! ```
//!
//! The `taskdag` binary drives the same machinery from a TOML plan of shell
//! commands; see [`config`] and [`plan`].

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod plan;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::plan::CommandPlan;

pub use crate::dag::{PriorityQueue, TaskGraph};
pub use crate::errors::TaskdagError;
pub use crate::exec::Work;
pub use crate::types::{Priority, TaskId};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading and validation
/// - graph construction
/// - root selection (`--task`)
/// - dry-run output or sequential execution
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;
    let plan = CommandPlan::from_config(&cfg)?;
    let roots = plan.roots(&args.tasks)?;

    if args.dry_run {
        print_dry_run(&plan, &roots)?;
        return Ok(());
    }

    info!(roots = roots.len(), "running plan");
    let reports = plan.run(&roots)?;

    println!("taskdag: {} task(s) completed", reports.len());
    for report in &reports {
        println!(
            "  - {} ({} ms)",
            report.name,
            report.elapsed.as_millis()
        );
    }

    Ok(())
}

/// Print the execution order without running anything.
fn print_dry_run(plan: &CommandPlan, roots: &[TaskId]) -> Result<()> {
    let graph = plan.graph();
    let order = graph.schedule(roots.iter().copied())?;

    println!("taskdag dry-run");
    println!("order ({}):", order.len());
    for (position, id) in order.iter().enumerate() {
        let name = graph.name_of(*id).unwrap_or("?");
        let priority = graph.priority_of(*id).unwrap_or_default();
        println!("  {}. {name} (priority {priority})", position + 1);

        let deps: Vec<&str> = graph
            .dependencies_of(*id)
            .into_iter()
            .flatten()
            .filter_map(|dep| graph.name_of(dep))
            .collect();
        if !deps.is_empty() {
            println!("      after: {:?}", deps);
        }
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}

// src/exec/mod.rs

//! Execution layer.
//!
//! Runs an already-scheduled order strictly one task after another and folds
//! every output into a caller-supplied accumulator.
//!
//! - [`work`] defines the [`Work`] trait every task implements.
//! - [`runner`] holds the sequential run loop and the `TaskGraph::run*`
//!   entry points built on top of it.
//! - [`command`] provides [`ShellCommand`], the work used by the `taskdag`
//!   binary to run configured commands.

pub mod command;
pub mod runner;
pub mod work;

pub use command::{ShellCommand, TaskReport};
pub use runner::run_in_order;
pub use work::Work;

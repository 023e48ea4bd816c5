// src/dag/mod.rs

//! Task graph representation and scheduling.
//!
//! - [`graph`] holds the arena of registered tasks and their dependency edges.
//! - [`heap`] is the comparator-driven binary heap used as the ready set.
//! - [`scheduler`] expands a root set into per-call nodes and computes a
//!   priority-aware topological order, detecting dependency cycles.

pub mod graph;
pub mod heap;
pub mod scheduler;

pub use graph::TaskGraph;
pub use heap::PriorityQueue;
pub use scheduler::topological_order;

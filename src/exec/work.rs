// src/exec/work.rs

//! The unit-of-work abstraction.

/// Something a task does when it runs.
///
/// Work receives a shared reference to the run's input and returns an output
/// or a failure. A failure aborts the run and is reported as
/// [`TaskdagError::Internal`](crate::errors::TaskdagError::Internal).
///
/// Closures of the shape `Fn(&I) -> anyhow::Result<O>` implement this trait
/// directly:
///
/// ```
/// use taskdag::TaskGraph;
///
/// let mut graph: TaskGraph<u32, u32> = TaskGraph::new();
/// let double = graph.add_task("double", |x: &u32| Ok(x * 2));
/// let total = graph.run_task(double, &21, 0u32, |acc, out| *acc += out).unwrap();
/// assert_eq!(total, 42);
/// ```
pub trait Work<I, O> {
    fn run(&self, input: &I) -> anyhow::Result<O>;
}

impl<I, O, F> Work<I, O> for F
where
    F: Fn(&I) -> anyhow::Result<O>,
{
    fn run(&self, input: &I) -> anyhow::Result<O> {
        self(input)
    }
}

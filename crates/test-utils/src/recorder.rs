use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;

/// Closure work for a `TaskGraph<(), String>`.
pub type RecordedWork = Box<dyn Fn(&()) -> anyhow::Result<String>>;

/// Shared log of which tasks ran, in order.
///
/// Clones share the same log, so a recorder can be captured by every task
/// closure in a graph and inspected after the run.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    executed: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Work that records `name` and returns it as output.
    pub fn task(&self, name: &str) -> RecordedWork {
        let executed = Rc::clone(&self.executed);
        let name = name.to_string();
        Box::new(move |_: &()| -> anyhow::Result<String> {
            executed.borrow_mut().push(name.clone());
            Ok(name.clone())
        })
    }

    /// Work that records `name` and then fails.
    pub fn failing_task(&self, name: &str) -> RecordedWork {
        let executed = Rc::clone(&self.executed);
        let name = name.to_string();
        Box::new(move |_: &()| -> anyhow::Result<String> {
            executed.borrow_mut().push(name.clone());
            bail!("{name} failed on purpose")
        })
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.executed.borrow().iter().filter(|n| *n == name).count()
    }

    pub fn clear(&self) {
        self.executed.borrow_mut().clear();
    }
}

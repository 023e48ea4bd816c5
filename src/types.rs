use std::fmt;
use std::str::FromStr;

/// Opaque identity of a task inside a [`TaskGraph`](crate::dag::TaskGraph).
///
/// Ids are arena indices handed out by the graph that registered the task.
/// Two tasks never share an id, even when their names, priorities and work
/// are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    /// Position of the task in its graph's registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scheduling priority of a task.
///
/// Among tasks whose dependencies are all satisfied, the one with the higher
/// value runs first. Ordering is plain integer ordering; ties are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i64);

impl Priority {
    pub const HIGH: Priority = Priority(1000);
    pub const MIDDLE: Priority = Priority(500);
    pub const LOW: Priority = Priority(0);
    pub const DEFAULT: Priority = Priority::MIDDLE;

    pub fn new(value: i64) -> Self {
        Priority(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::DEFAULT
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Priority::HIGH => f.write_str("high"),
            Priority::MIDDLE => f.write_str("middle"),
            Priority::LOW => f.write_str("low"),
            Priority(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::HIGH),
            "middle" | "default" => Ok(Priority::MIDDLE),
            "low" => Ok(Priority::LOW),
            other => other.parse::<i64>().map(Priority).map_err(|_| {
                format!(
                    "invalid priority: {other} (expected \"high\", \"middle\", \"low\" or an integer)"
                )
            }),
        }
    }
}

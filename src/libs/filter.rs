//! Title, status and priority filters applied before ranking and metrics.

use crate::libs::task::{Priority, Status, Task};
use std::fmt;
use std::str::FromStr;

/// Status selector: `All` or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        Status::parse(value)
            .map(StatusFilter::Only)
            .ok_or_else(|| format!("unknown status '{}', expected all, todo, in-progress or done", value))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

/// Priority selector: `All` or a single priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => *wanted == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        Priority::parse(value)
            .map(PriorityFilter::Only)
            .ok_or_else(|| format!("unknown priority '{}', expected all, high, medium or low", value))
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => f.write_str("All"),
            PriorityFilter::Only(priority) => priority.fmt(f),
        }
    }
}

/// Combined dashboard filter.
///
/// The query is a case-insensitive substring match on the title, taken
/// as typed (whitespace included); an empty query matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub query: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl TaskFilter {
    pub fn new(query: &str, status: StatusFilter, priority: PriorityFilter) -> Self {
        TaskFilter {
            query: query.to_string(),
            status,
            priority,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status != StatusFilter::All || self.priority != PriorityFilter::All
    }

    pub fn matches(&self, task: &Task) -> bool {
        let query = self.query.to_lowercase();
        if !query.is_empty() && !task.title.to_lowercase().contains(&query) {
            return false;
        }
        self.status.matches(task.status) && self.priority.matches(task.priority)
    }

    /// Keeps the matching items, preserving their order.
    pub fn apply<T: AsRef<Task> + Clone>(&self, tasks: &[T]) -> Vec<T> {
        tasks.iter().filter(|t| self.matches(t.as_ref())).cloned().collect()
    }
}

//! Deterministic display order for task collections.
//!
//! Tasks are ranked by three keys, each consulted only when the previous one
//! ties:
//!
//! 1. ROI, descending (undefined ROI ranks as `0`)
//! 2. Priority weight, descending (High=3, Medium=2, Low=1)
//! 3. Title, ascending, compared case-insensitively
//!
//! The comparator is a strict weak ordering and the sort is stable, so
//! ranking an already ranked sequence returns the identical order. Tasks
//! equal on all three keys keep their relative input order.

use crate::libs::task::{DerivedTask, Task};
use std::cmp::Ordering;

/// Ranks `tasks` into a new vector of derived tasks. The input is untouched.
pub fn rank_tasks(tasks: &[Task]) -> Vec<DerivedTask> {
    let derived: Vec<DerivedTask> = tasks.iter().map(Task::derive).collect();
    rank_derived(derived)
}

/// Re-ranks an owned sequence of derived tasks.
pub fn rank_derived(mut tasks: Vec<DerivedTask>) -> Vec<DerivedTask> {
    tasks.sort_by(compare_ranked);
    tasks
}

/// Ranking comparator. `Ordering::Less` means `a` is displayed before `b`.
pub fn compare_ranked(a: &DerivedTask, b: &DerivedTask) -> Ordering {
    b.rank_roi()
        .total_cmp(&a.rank_roi())
        .then_with(|| b.priority.weight().cmp(&a.priority.weight()))
        .then_with(|| compare_titles(&a.title, &b.title))
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

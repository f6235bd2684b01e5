//! In-memory task collection with a single-step undo slot.
//!
//! The store owns every [`Task`] for the lifetime of a session. It is created
//! once from normalized input (or synthetic data) and then changed only by the
//! four mutation operations below, each of which re-establishes the entity
//! invariants before returning.
//!
//! ## Operations
//!
//! - **add**: assigns an id when absent, floors `time_taken`, stamps
//!   `created_at`, stamps `completed_at` when the task starts out `Done`
//! - **update**: merges a patch, stamps `completed_at` on the first transition
//!   into `Done`, floors `time_taken` again after the merge
//! - **delete**: removes a task and parks it in the undo slot, replacing any
//!   earlier pending deletion
//! - **undo_delete**: optionally restores the parked task, always clears the slot
//!
//! All operations are total. Unknown ids and empty patches are silent no-ops.
//!
//! ## Versioning
//!
//! [`TaskStore::version`] increases by one on every mutation that changed the
//! collection or the undo slot, so callers can tell when derived views (ranked
//! lists, metrics) are stale.

use crate::libs::metrics::{GradeThresholds, Metrics};
use crate::libs::ranking::rank_tasks;
use crate::libs::task::{
    coerce_revenue, coerce_time_taken, coerce_title, generate_id, DerivedTask, NewTask, Task, TaskPatch,
};
use chrono::Utc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_deleted: Option<Task>,
    version: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from tasks that are already well formed, e.g. the
    /// output of the normalizer or the sample data generator.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore {
            tasks,
            last_deleted: None,
            version: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The task waiting in the undo slot, if any.
    pub fn last_deleted(&self) -> Option<&Task> {
        self.last_deleted.as_ref()
    }

    /// Ranked view over the whole collection.
    pub fn ranked(&self) -> Vec<DerivedTask> {
        rank_tasks(&self.tasks)
    }

    /// Metrics over the whole collection.
    pub fn metrics(&self, thresholds: &GradeThresholds) -> Metrics {
        Metrics::compute_with(&self.tasks, thresholds)
    }

    /// Appends a new task and returns its id.
    ///
    /// A supplied id that is blank or already in use is replaced with a fresh one.
    pub fn add(&mut self, new_task: NewTask) -> String {
        let id = match new_task.id {
            Some(id) if !id.trim().is_empty() && self.get(&id).is_none() => id,
            Some(id) if !id.trim().is_empty() => {
                debug!(%id, "supplied id already in use, generating one");
                generate_id()
            }
            _ => generate_id(),
        };
        let created_at = Utc::now();
        let completed_at = new_task.status.is_done().then_some(created_at);

        let task = Task {
            id: id.clone(),
            title: coerce_title(&new_task.title),
            revenue: coerce_revenue(new_task.revenue),
            time_taken: coerce_time_taken(new_task.time_taken),
            priority: new_task.priority,
            status: new_task.status,
            notes: new_task.notes,
            created_at,
            completed_at,
        };

        debug!(%id, title = %task.title, "task added");
        self.tasks.push(task);
        self.bump();
        id
    }

    /// Merges `patch` onto the task with `id`.
    ///
    /// Returns `false`, leaving the store untouched, when no task has that id.
    /// An empty patch finds the task but changes nothing.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "update ignored, task not found");
            return false;
        };

        if patch.is_empty() {
            return true;
        }

        let was_done = task.status.is_done();

        if let Some(title) = patch.title {
            task.title = coerce_title(&title);
        }
        if let Some(revenue) = patch.revenue {
            task.revenue = coerce_revenue(revenue);
        }
        if let Some(time_taken) = patch.time_taken {
            task.time_taken = time_taken;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(notes) = patch.notes {
            task.notes = notes;
        }

        // Completion is stamped once and never overwritten.
        if !was_done && task.status.is_done() && task.completed_at.is_none() {
            task.completed_at = Some(patch.completed_at.unwrap_or_else(Utc::now));
        }
        task.time_taken = coerce_time_taken(task.time_taken);

        debug!(%id, status = %task.status, "task updated");
        self.bump();
        true
    }

    /// Removes the task with `id` and parks it for undo.
    ///
    /// A previously parked task is discarded for good. Returns `false` when no
    /// task has that id; the undo slot is then left as it was.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(position) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(%id, "delete ignored, task not found");
            return false;
        };

        let removed = self.tasks.remove(position);
        if let Some(discarded) = self.last_deleted.replace(removed) {
            debug!(id = %discarded.id, "pending deletion discarded");
        }
        debug!(%id, "task deleted");
        self.bump();
        true
    }

    /// Resolves the pending deletion.
    ///
    /// With `restore` set, the parked task is re-appended unchanged and its id
    /// returned. The undo slot is cleared in every case.
    pub fn undo_delete(&mut self, restore: bool) -> Option<String> {
        let pending = self.last_deleted.take()?;
        self.bump();

        if !restore {
            debug!(id = %pending.id, "pending deletion dismissed");
            return None;
        }

        if self.get(&pending.id).is_some() {
            warn!(id = %pending.id, "restore skipped, id is already in use");
            return None;
        }

        let id = pending.id.clone();
        self.tasks.push(pending);
        debug!(%id, "task restored");
        Some(id)
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

//! Sales task entity and the value types that travel with it.
//!
//! A [`Task`] is the unit tracked by the dashboard: a piece of sales work with
//! the revenue it produced and the hours it took. Everything else in the crate
//! (ranking, metrics, export) reads tasks; only the store and the normalizer
//! produce them.
//!
//! ## Entity Invariants
//!
//! - `time_taken` is always strictly positive (non-positive input becomes `1`)
//! - `revenue` is never negative or non-finite (such input becomes `0`)
//! - `title` is never blank (blank input becomes [`UNTITLED_TASK`])
//! - `created_at` never changes after creation
//! - `completed_at` is stamped once, on the first transition into [`Status::Done`]
//!
//! The coercion helpers in this module are the single place these rules live,
//! so every mutation site applies exactly the same defaults.
//!
//! ## Serialization
//!
//! Field names are serialized in camelCase (`timeTaken`, `createdAt`,
//! `completedAt`) to stay compatible with the seed files the dashboard has
//! always consumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use uuid::Uuid;

/// Title assigned to tasks that arrive without a usable one.
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Task priority, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Fixed ranking weight: High=3, Medium=2, Low=1.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Lenient, case-insensitive parse. Returns `None` for unknown labels.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl Status {
    /// Lenient, case-insensitive parse accepting the usual spellings of
    /// "In Progress" (`in progress`, `in_progress`, `in-progress`, `inprogress`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        match normalized.as_str() {
            "todo" => Some(Status::Todo),
            "inprogress" => Some(Status::InProgress),
            "done" => Some(Status::Done),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "Todo",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }

    pub fn all() -> &'static [Status] {
        &[Status::Todo, Status::InProgress, Status::Done]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sales task owned by the [`TaskStore`](crate::libs::store::TaskStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Display title, never blank
    pub title: String,
    /// Revenue attributed to the task, never negative
    pub revenue: f64,
    /// Hours spent on the task, always greater than zero
    pub time_taken: f64,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub notes: String,
    /// Creation time, never mutated
    pub created_at: DateTime<Utc>,
    /// First time the task reached `Done`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Revenue per hour for this task.
    ///
    /// Returns `None` when `time_taken` is not positive. Store-managed tasks
    /// always have a positive `time_taken`, but values built by hand may not.
    pub fn roi(&self) -> Option<f64> {
        if self.time_taken > 0.0 {
            Some(self.revenue / self.time_taken)
        } else {
            None
        }
    }

    /// Wraps the task together with its freshly computed ROI.
    pub fn derive(&self) -> DerivedTask {
        DerivedTask::from(self.clone())
    }
}

impl AsRef<Task> for Task {
    fn as_ref(&self) -> &Task {
        self
    }
}

/// A task paired with its derived return on investment.
///
/// The ROI is recomputed every time a `DerivedTask` is built and is never
/// stored on the task itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTask {
    #[serde(flatten)]
    pub task: Task,
    pub roi: Option<f64>,
}

impl DerivedTask {
    /// ROI used for ordering: undefined ROI ranks as zero.
    pub fn rank_roi(&self) -> f64 {
        self.roi.unwrap_or(0.0)
    }
}

impl From<Task> for DerivedTask {
    fn from(task: Task) -> Self {
        let roi = task.roi();
        DerivedTask { task, roi }
    }
}

impl Deref for DerivedTask {
    type Target = Task;

    fn deref(&self) -> &Task {
        &self.task
    }
}

impl AsRef<Task> for DerivedTask {
    fn as_ref(&self) -> &Task {
        &self.task
    }
}

/// Input for [`TaskStore::add`](crate::libs::store::TaskStore::add).
///
/// `id` is optional; a fresh identifier is generated when it is absent.
/// Creation and completion timestamps are always stamped by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTask {
    pub id: Option<String>,
    pub title: String,
    pub revenue: f64,
    pub time_taken: f64,
    pub priority: Priority,
    pub status: Status,
    pub notes: String,
}

impl NewTask {
    pub fn new(title: &str, revenue: f64, time_taken: f64) -> Self {
        NewTask {
            title: title.to_string(),
            revenue,
            time_taken,
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
}

/// Partial update merged onto an existing task.
///
/// `id` and `created_at` cannot be patched.
/// `completed_at` is honoured only when the patch moves a task into `Done`
/// for the first time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub revenue: Option<f64>,
    pub time_taken: Option<f64>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Names of the fields this patch touches, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.title.is_some() {
            names.push("title");
        }
        if self.revenue.is_some() {
            names.push("revenue");
        }
        if self.time_taken.is_some() {
            names.push("timeTaken");
        }
        if self.priority.is_some() {
            names.push("priority");
        }
        if self.status.is_some() {
            names.push("status");
        }
        if self.notes.is_some() {
            names.push("notes");
        }
        if self.completed_at.is_some() {
            names.push("completedAt");
        }
        names
    }
}

/// Generates a process-unique task identifier.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Applies the `time_taken > 0` floor: anything else becomes one hour.
pub fn coerce_time_taken(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Non-finite or negative revenue becomes zero.
pub fn coerce_revenue(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Blank titles become [`UNTITLED_TASK`].
pub fn coerce_title(value: &str) -> String {
    if value.trim().is_empty() {
        UNTITLED_TASK.to_string()
    } else {
        value.to_string()
    }
}

//! Bounded, newest-first log of user actions within a session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Maximum number of entries kept; older entries fall off the end.
pub const ACTIVITY_LOG_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Add,
    Update,
    Delete,
    Undo,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityKind::Add => "add",
            ActivityKind::Update => "update",
            ActivityKind::Delete => "delete",
            ActivityKind::Undo => "undo",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityItem {
    pub id: String,
    pub ts: DateTime<Utc>,
    pub kind: ActivityKind,
    pub summary: String,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    items: VecDeque<ActivityItem>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: ActivityKind, summary: impl Into<String>) {
        self.items.push_front(ActivityItem {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now(),
            kind,
            summary: summary.into(),
        });
        self.items.truncate(ACTIVITY_LOG_LIMIT);
    }

    /// Entries, newest first.
    pub fn items(&self) -> impl Iterator<Item = &ActivityItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

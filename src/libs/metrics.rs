//! Derived metrics over a collection of sales tasks.
//!
//! This module provides the pure calculations behind the dashboard summary
//! bar. Every function accepts any slice of task-like values (`T: AsRef<Task>`),
//! so the same calculator runs over the whole store and over a filtered,
//! ranked subset without assuming it sees the full collection.
//!
//! ## Formulas
//!
//! ```text
//! Total Revenue        = Σ revenue
//! Total Time Taken     = Σ time_taken
//! Time Efficiency (%)  = (Σ time_taken of Done tasks / Total Time Taken) * 100
//! Revenue per Hour     = Total Revenue / Total Time Taken
//! Average ROI          = mean(revenue / time_taken) over tasks with time_taken > 0
//! ```
//!
//! Every ratio returns `0.0` when its denominator is zero, so an empty
//! collection never divides by zero.
//!
//! ## Performance Grade
//!
//! The average ROI is bucketed into a [`PerformanceGrade`]. The mapping is a
//! total, monotonically non-decreasing function of the ROI:
//!
//! ```text
//! ROI ≤ 0 or NaN             → Needs Improvement
//! ROI >  excellent_roi (500) → Excellent
//! ROI >= good_roi      (200) → Good
//! otherwise                  → Needs Improvement
//! ```

use crate::libs::task::{Priority, Status, Task};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered performance grade derived from the average ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum PerformanceGrade {
    #[default]
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Good,
    Excellent,
}

impl PerformanceGrade {
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceGrade::NeedsImprovement => "Needs Improvement",
            PerformanceGrade::Good => "Good",
            PerformanceGrade::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ROI thresholds used to bucket the average ROI into a grade.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GradeThresholds {
    /// Average ROI strictly above this value grades as `Excellent`.
    pub excellent_roi: f64,
    /// Average ROI at or above this value grades as at least `Good`.
    pub good_roi: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        GradeThresholds {
            excellent_roi: 500.0,
            good_roi: 200.0,
        }
    }
}

impl GradeThresholds {
    /// Returns thresholds safe to grade with.
    ///
    /// Non-finite values fall back to the defaults and an inverted pair is
    /// swapped, keeping the grade mapping monotonic.
    pub fn sanitized(&self) -> GradeThresholds {
        let defaults = GradeThresholds::default();
        let excellent = if self.excellent_roi.is_finite() {
            self.excellent_roi
        } else {
            defaults.excellent_roi
        };
        let good = if self.good_roi.is_finite() {
            self.good_roi
        } else {
            defaults.good_roi
        };

        GradeThresholds {
            excellent_roi: excellent.max(good),
            good_roi: excellent.min(good),
        }
    }
}

/// Aggregate metrics for a task collection. Recomputed, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_revenue: f64,
    pub total_time_taken: f64,
    pub time_efficiency_pct: f64,
    pub revenue_per_hour: f64,
    #[serde(rename = "averageROI")]
    pub average_roi: f64,
    pub performance_grade: PerformanceGrade,
}

impl Metrics {
    /// Computes metrics with the default grade thresholds.
    pub fn compute<T: AsRef<Task>>(tasks: &[T]) -> Self {
        Self::compute_with(tasks, &GradeThresholds::default())
    }

    /// Computes metrics grading the average ROI with `thresholds`.
    ///
    /// An empty collection yields the initial metrics: all zeros and the
    /// floor grade.
    pub fn compute_with<T: AsRef<Task>>(tasks: &[T], thresholds: &GradeThresholds) -> Self {
        if tasks.is_empty() {
            return Metrics::default();
        }

        let average_roi = average_roi(tasks);
        Metrics {
            total_revenue: total_revenue(tasks),
            total_time_taken: total_time_taken(tasks),
            time_efficiency_pct: time_efficiency_pct(tasks),
            revenue_per_hour: revenue_per_hour(tasks),
            average_roi,
            performance_grade: performance_grade_with(average_roi, thresholds),
        }
    }
}

/// Sum of revenue.
pub fn total_revenue<T: AsRef<Task>>(tasks: &[T]) -> f64 {
    tasks.iter().map(|t| t.as_ref().revenue).sum()
}

/// Sum of hours spent.
pub fn total_time_taken<T: AsRef<Task>>(tasks: &[T]) -> f64 {
    tasks.iter().map(|t| t.as_ref().time_taken).sum()
}

/// Share of total time that went into tasks marked `Done`, as a percentage.
///
/// Returns `0.0` when the total time taken is zero.
pub fn time_efficiency_pct<T: AsRef<Task>>(tasks: &[T]) -> f64 {
    let total = total_time_taken(tasks);
    if total <= 0.0 {
        return 0.0;
    }

    let done: f64 = tasks
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| t.status.is_done())
        .map(|t| t.time_taken)
        .sum();

    (done / total * 100.0).clamp(0.0, 100.0)
}

/// Total revenue per hour of total time; `0.0` when no time was spent.
pub fn revenue_per_hour<T: AsRef<Task>>(tasks: &[T]) -> f64 {
    let total_time = total_time_taken(tasks);
    if total_time > 0.0 {
        total_revenue(tasks) / total_time
    } else {
        0.0
    }
}

/// Mean ROI over tasks with a positive `time_taken`; `0.0` when there are none.
pub fn average_roi<T: AsRef<Task>>(tasks: &[T]) -> f64 {
    let rois: Vec<f64> = tasks.iter().filter_map(|t| t.as_ref().roi()).collect();
    if rois.is_empty() {
        return 0.0;
    }
    rois.iter().sum::<f64>() / rois.len() as f64
}

/// Grades an average ROI using the default thresholds.
pub fn performance_grade(average_roi: f64) -> PerformanceGrade {
    performance_grade_with(average_roi, &GradeThresholds::default())
}

/// Grades an average ROI using `thresholds`.
pub fn performance_grade_with(average_roi: f64, thresholds: &GradeThresholds) -> PerformanceGrade {
    let thresholds = thresholds.sanitized();

    // NaN fails the positivity check and lands on the floor grade.
    if !(average_roi > 0.0) {
        PerformanceGrade::NeedsImprovement
    } else if average_roi > thresholds.excellent_roi {
        PerformanceGrade::Excellent
    } else if average_roi >= thresholds.good_roi {
        PerformanceGrade::Good
    } else {
        PerformanceGrade::NeedsImprovement
    }
}

/// Count and revenue for one bucket of a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BucketTotals {
    pub count: usize,
    pub revenue: f64,
    pub time_taken: f64,
}

impl BucketTotals {
    fn add(&mut self, task: &Task) {
        self.count += 1;
        self.revenue += task.revenue;
        self.time_taken += task.time_taken;
    }
}

/// Per-status and per-priority totals used by the summary views.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Breakdown {
    pub by_status: BTreeMap<String, BucketTotals>,
    pub by_priority: BTreeMap<String, BucketTotals>,
}

impl Breakdown {
    /// Buckets tasks by status and priority. Every known status and priority
    /// is present in the result, even with a zero count.
    pub fn compute<T: AsRef<Task>>(tasks: &[T]) -> Self {
        let mut by_status: BTreeMap<String, BucketTotals> = Status::all()
            .iter()
            .map(|s| (s.to_string(), BucketTotals::default()))
            .collect();
        let mut by_priority: BTreeMap<String, BucketTotals> = Priority::all()
            .iter()
            .map(|p| (p.to_string(), BucketTotals::default()))
            .collect();

        for task in tasks.iter().map(|t| t.as_ref()) {
            by_status.entry(task.status.to_string()).or_default().add(task);
            by_priority.entry(task.priority.to_string()).or_default().add(task);
        }

        Breakdown { by_status, by_priority }
    }
}

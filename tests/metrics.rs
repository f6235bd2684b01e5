#[cfg(test)]
mod tests {
    use chrono::Utc;
    use taskglitch::libs::metrics::{
        average_roi, performance_grade, performance_grade_with, revenue_per_hour, time_efficiency_pct, Breakdown,
        GradeThresholds, Metrics, PerformanceGrade,
    };
    use taskglitch::libs::task::{Priority, Status, Task};

    fn task(title: &str, revenue: f64, time_taken: f64, priority: Priority, status: Status) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            revenue,
            time_taken,
            priority,
            status,
            notes: String::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_empty_collection_yields_initial_metrics() {
        let tasks: Vec<Task> = Vec::new();
        let metrics = Metrics::compute(&tasks);

        assert_eq!(metrics.total_revenue, 0.0);
        assert_eq!(metrics.total_time_taken, 0.0);
        assert_eq!(metrics.time_efficiency_pct, 0.0);
        assert_eq!(metrics.revenue_per_hour, 0.0);
        assert_eq!(metrics.average_roi, 0.0);
        assert_eq!(metrics.performance_grade, PerformanceGrade::NeedsImprovement);
    }

    #[test]
    fn test_compute_aggregates() {
        let tasks = vec![
            task("a", 1000.0, 2.0, Priority::High, Status::Done),
            task("b", 600.0, 3.0, Priority::Low, Status::Todo),
            task("c", 0.0, 5.0, Priority::Medium, Status::InProgress),
        ];
        let metrics = Metrics::compute(&tasks);

        assert_eq!(metrics.total_revenue, 1600.0);
        assert_eq!(metrics.total_time_taken, 10.0);
        assert!((metrics.time_efficiency_pct - 20.0).abs() < 1e-9);
        assert!((metrics.revenue_per_hour - 160.0).abs() < 1e-9);
        // (500 + 200 + 0) / 3
        assert!((metrics.average_roi - 700.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.performance_grade, PerformanceGrade::Good);
    }

    #[test]
    fn test_time_efficiency_bounds() {
        let all_done = vec![task("a", 10.0, 4.0, Priority::Low, Status::Done)];
        let none_done = vec![task("a", 10.0, 4.0, Priority::Low, Status::Todo)];
        assert_eq!(time_efficiency_pct(&all_done), 100.0);
        assert_eq!(time_efficiency_pct(&none_done), 0.0);
    }

    #[test]
    fn test_zero_time_is_guarded() {
        let tasks = vec![task("a", 100.0, 0.0, Priority::Low, Status::Done)];
        assert_eq!(revenue_per_hour(&tasks), 0.0);
        assert_eq!(average_roi(&tasks), 0.0);
        assert_eq!(time_efficiency_pct(&tasks), 0.0);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(performance_grade(0.0), PerformanceGrade::NeedsImprovement);
        assert_eq!(performance_grade(-10.0), PerformanceGrade::NeedsImprovement);
        assert_eq!(performance_grade(f64::NAN), PerformanceGrade::NeedsImprovement);
        assert_eq!(performance_grade(199.9), PerformanceGrade::NeedsImprovement);
        assert_eq!(performance_grade(200.0), PerformanceGrade::Good);
        assert_eq!(performance_grade(500.0), PerformanceGrade::Good);
        assert_eq!(performance_grade(500.1), PerformanceGrade::Excellent);
    }

    #[test]
    fn test_grade_is_monotonic() {
        let samples = [-5.0, 0.0, 1.0, 150.0, 200.0, 350.0, 500.0, 501.0, 10_000.0];
        for pair in samples.windows(2) {
            assert!(performance_grade(pair[0]) <= performance_grade(pair[1]));
        }
    }

    #[test]
    fn test_inverted_thresholds_are_repaired() {
        let inverted = GradeThresholds {
            excellent_roi: 100.0,
            good_roi: 300.0,
        };
        let sanitized = inverted.sanitized();
        assert_eq!(sanitized.excellent_roi, 300.0);
        assert_eq!(sanitized.good_roi, 100.0);
        assert_eq!(performance_grade_with(150.0, &inverted), PerformanceGrade::Good);
        assert_eq!(performance_grade_with(301.0, &inverted), PerformanceGrade::Excellent);
    }

    #[test]
    fn test_custom_thresholds() {
        let tasks = vec![task("a", 300.0, 1.0, Priority::Low, Status::Done)];
        let strict = GradeThresholds {
            excellent_roi: 1000.0,
            good_roi: 400.0,
        };
        assert_eq!(Metrics::compute(&tasks).performance_grade, PerformanceGrade::Good);
        assert_eq!(Metrics::compute_with(&tasks, &strict).performance_grade, PerformanceGrade::NeedsImprovement);
    }

    #[test]
    fn test_breakdown_covers_every_bucket() {
        let tasks = vec![
            task("a", 100.0, 1.0, Priority::High, Status::Done),
            task("b", 50.0, 2.0, Priority::High, Status::Todo),
        ];
        let breakdown = Breakdown::compute(&tasks);

        assert_eq!(breakdown.by_status.len(), 3);
        assert_eq!(breakdown.by_priority.len(), 3);
        assert_eq!(breakdown.by_status["Done"].count, 1);
        assert_eq!(breakdown.by_status["In Progress"].count, 0);
        assert_eq!(breakdown.by_priority["High"].count, 2);
        assert_eq!(breakdown.by_priority["High"].revenue, 150.0);
        assert_eq!(breakdown.by_priority["High"].time_taken, 3.0);
    }

    #[test]
    fn test_metrics_serialize_with_wire_names() {
        let value = serde_json::to_value(Metrics::default()).unwrap();
        assert!(value.get("averageROI").is_some());
        assert_eq!(value["performanceGrade"], "Needs Improvement");
        assert!(value.get("timeEfficiencyPct").is_some());
    }
}

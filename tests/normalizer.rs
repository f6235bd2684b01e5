#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;
    use taskglitch::libs::normalizer::{normalize_tasks, normalize_tasks_at};
    use taskglitch::libs::task::{Priority, Status, UNTITLED_TASK};

    #[test]
    fn test_non_array_input_yields_nothing() {
        assert!(normalize_tasks(&json!({"id": 1})).is_empty());
        assert!(normalize_tasks(&json!(null)).is_empty());
        assert!(normalize_tasks(&json!("tasks")).is_empty());
    }

    #[test]
    fn test_empty_record_is_fully_defaulted() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let tasks = normalize_tasks_at(&json!([{}]), now);

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert!(!task.id.is_empty());
        assert_eq!(task.title, UNTITLED_TASK);
        assert_eq!(task.revenue, 0.0);
        assert_eq!(task.time_taken, 1.0);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.notes, "");
        assert_eq!(task.created_at, now - Duration::days(1));
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_string_numbers_are_coerced() {
        let tasks = normalize_tasks(&json!([
            {"id": "a", "title": "A", "revenue": "1500", "timeTaken": " 3 "},
            {"id": "b", "title": "B", "revenue": "", "timeTaken": "abc"},
        ]));

        assert_eq!(tasks[0].revenue, 1500.0);
        assert_eq!(tasks[0].time_taken, 3.0);
        assert_eq!(tasks[1].revenue, 0.0);
        assert_eq!(tasks[1].time_taken, 1.0);
    }

    #[test]
    fn test_non_positive_values_are_floored() {
        let tasks = normalize_tasks(&json!([
            {"title": "neg", "revenue": -50, "timeTaken": 0},
            {"title": "neg time", "revenue": 100, "timeTaken": -4},
        ]));

        assert_eq!(tasks[0].revenue, 0.0);
        assert_eq!(tasks[0].time_taken, 1.0);
        assert_eq!(tasks[1].time_taken, 1.0);
        assert!(tasks.iter().all(|t| t.time_taken > 0.0));
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let tasks = normalize_tasks(&json!([{"id": 42, "title": "x"}]));
        assert_eq!(tasks[0].id, "42");
    }

    #[test]
    fn test_missing_ids_are_unique() {
        let tasks = normalize_tasks(&json!([{"title": "a"}, {"title": "b"}, {"id": ""}]));
        assert_ne!(tasks[0].id, tasks[1].id);
        assert_ne!(tasks[1].id, tasks[2].id);
        assert!(!tasks[2].id.is_empty());
    }

    #[test]
    fn test_repeated_ids_are_replaced() {
        let tasks = normalize_tasks(&json!([
            {"id": 7, "title": "first"},
            {"id": "7", "title": "second"},
            {"id": "x", "title": "third"},
            {"id": "x", "title": "fourth"},
        ]));

        assert_eq!(tasks[0].id, "7");
        assert_ne!(tasks[1].id, "7");
        assert_eq!(tasks[2].id, "x");
        assert_ne!(tasks[3].id, "x");

        let unique: std::collections::HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(unique.len(), tasks.len());
    }

    #[test]
    fn test_unknown_enums_fall_back() {
        let tasks = normalize_tasks(&json!([
            {"priority": "Urgent", "status": "Blocked"},
            {"priority": "high", "status": "in progress"},
            {"priority": "Medium", "status": "Done"},
        ]));

        assert_eq!(tasks[0].priority, Priority::Low);
        assert_eq!(tasks[0].status, Status::Todo);
        assert_eq!(tasks[1].priority, Priority::High);
        assert_eq!(tasks[1].status, Status::InProgress);
        assert_eq!(tasks[2].priority, Priority::Medium);
        assert_eq!(tasks[2].status, Status::Done);
    }

    #[test]
    fn test_timestamps_are_parsed_and_backfilled() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let tasks = normalize_tasks_at(
            &json!([
                {"title": "rfc", "createdAt": "2024-05-01T09:30:00Z", "status": "Done", "completedAt": "2024-05-03T10:00:00Z"},
                {"title": "millis", "createdAt": created.timestamp_millis()},
                {"title": "done without completion", "status": "Done", "createdAt": "2024-05-01T09:30:00Z"},
                {"title": "garbage", "createdAt": "yesterday"},
            ]),
            now,
        );

        assert_eq!(tasks[0].created_at, created);
        assert_eq!(tasks[0].completed_at, Some(Utc.with_ymd_and_hms(2024, 5, 3, 10, 0, 0).unwrap()));
        assert_eq!(tasks[1].created_at, created);
        assert_eq!(tasks[2].completed_at, Some(created + Duration::days(1)));
        assert_eq!(tasks[3].created_at, now - Duration::days(4));
    }

    #[test]
    fn test_date_only_and_offset_less_timestamps_are_kept() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
        let tasks = normalize_tasks_at(
            &json!([
                {"title": "date only", "createdAt": "2024-01-01"},
                {"title": "no offset", "createdAt": "2024-01-01T10:00:00", "status": "Done", "completedAt": "2024-01-03"},
                {"title": "space separated", "createdAt": "2024-01-01 10:00:00", "status": "Done", "completedAt": "2024-01-02T08:15:00"},
            ]),
            now,
        );

        let jan_first = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let jan_first_ten = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(tasks[0].created_at, jan_first);
        assert_eq!(tasks[1].created_at, jan_first_ten);
        assert_eq!(tasks[1].completed_at, Some(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap()));
        assert_eq!(tasks[2].created_at, jan_first_ten);
        assert_eq!(tasks[2].completed_at, Some(Utc.with_ymd_and_hms(2024, 1, 2, 8, 15, 0).unwrap()));
    }

    #[test]
    fn test_non_object_records_still_produce_tasks() {
        let tasks = normalize_tasks(&json!([1, "x", null]));
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.title == UNTITLED_TASK));
    }

    #[test]
    fn test_normalization_is_idempotent_on_serialized_output() {
        let first = normalize_tasks(&json!([
            {"id": "a", "title": "Deal", "revenue": "900", "timeTaken": 3, "priority": "High", "status": "Done"}
        ]));
        let round_trip = serde_json::to_value(&first).unwrap();
        let second = normalize_tasks(&round_trip);
        assert_eq!(first, second);
    }
}

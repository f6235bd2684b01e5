#[cfg(test)]
mod tests {
    use chrono::Utc;
    use taskglitch::libs::filter::{PriorityFilter, StatusFilter, TaskFilter};
    use taskglitch::libs::ranking::rank_tasks;
    use taskglitch::libs::task::{Priority, Status, Task};

    fn task(title: &str, priority: Priority, status: Status) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            revenue: 100.0,
            time_taken: 1.0,
            priority,
            status,
            notes: String::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("Demo for Globex", Priority::High, Status::Todo),
            task("Follow up with Initech", Priority::Low, Status::Done),
            task("Globex renewal", Priority::Medium, Status::InProgress),
        ]
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = TaskFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filter = TaskFilter::new("gLoBeX", StatusFilter::All, PriorityFilter::All);
        let titles: Vec<String> = filter.apply(&sample()).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Demo for Globex", "Globex renewal"]);
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let mut tasks = sample();
        tasks.push(task("Alpha", Priority::Low, Status::Todo));

        let filter = TaskFilter::new(" ", StatusFilter::All, PriorityFilter::All);
        assert!(filter.is_active());
        let titles: Vec<String> = filter.apply(&tasks).into_iter().map(|t| t.title).collect();
        assert!(!titles.contains(&"Alpha".to_string()));
        assert_eq!(titles.len(), 3);

        let padded = TaskFilter::new(" globex", StatusFilter::All, PriorityFilter::All);
        let titles: Vec<String> = padded.apply(&tasks).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Demo for Globex"]);
    }

    #[test]
    fn test_status_and_priority_combine() {
        let filter = TaskFilter::new("globex", StatusFilter::Only(Status::InProgress), PriorityFilter::All);
        assert_eq!(filter.apply(&sample()).len(), 1);

        let filter = TaskFilter::new("", StatusFilter::All, PriorityFilter::Only(Priority::Low));
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Follow up with Initech");
    }

    #[test]
    fn test_filter_preserves_ranked_order() {
        let ranked = rank_tasks(&sample());
        let filtered = TaskFilter::default().apply(&ranked);
        assert_eq!(filtered, ranked);
    }

    #[test]
    fn test_selectors_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("in-progress".parse::<StatusFilter>().unwrap(), StatusFilter::Only(Status::InProgress));
        assert_eq!("HIGH".parse::<PriorityFilter>().unwrap(), PriorityFilter::Only(Priority::High));
        assert!("urgent".parse::<PriorityFilter>().is_err());
        assert!("blocked".parse::<StatusFilter>().is_err());
    }
}

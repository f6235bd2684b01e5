#[cfg(test)]
mod tests {
    use chrono::Utc;
    use taskglitch::libs::ranking::{compare_ranked, rank_derived, rank_tasks};
    use taskglitch::libs::task::{Priority, Status, Task};
    use std::cmp::Ordering;

    fn task(id: &str, title: &str, revenue: f64, time_taken: f64, priority: Priority) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            revenue,
            time_taken,
            priority,
            status: Status::Todo,
            notes: String::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    fn ids(tasks: &[taskglitch::libs::task::DerivedTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_roi_descending_first() {
        let tasks = vec![
            task("low", "A", 100.0, 10.0, Priority::High),
            task("high", "B", 1000.0, 2.0, Priority::Low),
            task("mid", "C", 300.0, 3.0, Priority::Medium),
        ];
        assert_eq!(ids(&rank_tasks(&tasks)), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_priority_breaks_roi_ties() {
        let tasks = vec![
            task("l", "Same", 100.0, 1.0, Priority::Low),
            task("h", "Same", 200.0, 2.0, Priority::High),
            task("m", "Same", 300.0, 3.0, Priority::Medium),
        ];
        assert_eq!(ids(&rank_tasks(&tasks)), vec!["h", "m", "l"]);
    }

    #[test]
    fn test_title_breaks_remaining_ties_case_insensitively() {
        let tasks = vec![
            task("c", "charlie", 100.0, 1.0, Priority::High),
            task("a", "Alpha", 100.0, 1.0, Priority::High),
            task("b", "BRAVO", 100.0, 1.0, Priority::High),
        ];
        assert_eq!(ids(&rank_tasks(&tasks)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_time_ranks_as_zero_roi() {
        let tasks = vec![
            task("undefined", "A", 5000.0, 0.0, Priority::High),
            task("small", "B", 10.0, 1.0, Priority::Low),
        ];
        let ranked = rank_tasks(&tasks);
        assert_eq!(ids(&ranked), vec!["small", "undefined"]);
        assert_eq!(ranked[1].roi, None);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let tasks = vec![
            task("first", "Same", 100.0, 1.0, Priority::Low),
            task("second", "same", 100.0, 1.0, Priority::Low),
            task("third", "SAME", 100.0, 1.0, Priority::Low),
        ];
        assert_eq!(ids(&rank_tasks(&tasks)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let tasks = vec![
            task("1", "Zeta", 500.0, 5.0, Priority::Medium),
            task("2", "Alpha", 500.0, 5.0, Priority::Medium),
            task("3", "Beta", 900.0, 3.0, Priority::Low),
            task("4", "Gamma", 0.0, 1.0, Priority::High),
        ];
        let once = rank_tasks(&tasks);
        let twice = rank_derived(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ranking_is_a_permutation() {
        let tasks = vec![
            task("1", "Renewal", 500.0, 5.0, Priority::Medium),
            task("2", "Renewal", 500.0, 5.0, Priority::Medium),
            task("3", "renewal", 0.0, 0.0, Priority::High),
            task("4", "Cold call", 900.0, 3.0, Priority::Low),
            task("5", "Renewal", 20.0, 1.0, Priority::Low),
        ];
        let ranked = rank_tasks(&tasks);

        let mut ranked_ids = ids(&ranked);
        let mut input_ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ranked_ids.sort_unstable();
        input_ids.sort_unstable();
        assert_eq!(ranked_ids, input_ids);

        let renewals = ranked.iter().filter(|t| t.title.eq_ignore_ascii_case("renewal")).count();
        assert_eq!(renewals, 4);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let tasks = vec![
            task("1", "A", 1.0, 1.0, Priority::Low),
            task("2", "B", 100.0, 1.0, Priority::Low),
        ];
        let _ = rank_tasks(&tasks);
        assert_eq!(tasks[0].id, "1");
    }

    #[test]
    fn test_comparator_is_antisymmetric() {
        let a = task("a", "A", 100.0, 1.0, Priority::Low).derive();
        let b = task("b", "B", 100.0, 1.0, Priority::High).derive();
        assert_eq!(compare_ranked(&a, &b), Ordering::Greater);
        assert_eq!(compare_ranked(&b, &a), Ordering::Less);
        assert_eq!(compare_ranked(&a, &a), Ordering::Equal);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use taskglitch::libs::export::{ExportData, ExportFormat, Exporter, TASK_COLUMNS};
    use taskglitch::libs::metrics::Metrics;
    use taskglitch::libs::ranking::rank_tasks;
    use taskglitch::libs::task::{DerivedTask, Priority, Status, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<DerivedTask>,
        metrics: Metrics,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let now = Utc::now();
            let tasks = vec![
                Task {
                    id: "1".to_string(),
                    title: "Demo for Globex".to_string(),
                    revenue: 1200.0,
                    time_taken: 4.0,
                    priority: Priority::High,
                    status: Status::Done,
                    notes: "signed, pending invoice".to_string(),
                    created_at: now,
                    completed_at: Some(now),
                },
                Task {
                    id: "2".to_string(),
                    title: "Qualify lead at Hooli".to_string(),
                    revenue: 0.0,
                    time_taken: 2.0,
                    priority: Priority::Low,
                    status: Status::Todo,
                    notes: String::new(),
                    created_at: now,
                    completed_at: None,
                },
            ];
            let metrics = Metrics::compute(&tasks);
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                tasks: rank_tasks(&tasks),
                metrics,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        let written = exporter.export(ExportData::Tasks, &ctx.tasks, &ctx.metrics).unwrap();
        assert_eq!(written, vec![output_path.clone()]);

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, TASK_COLUMNS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Demo for Globex");
        assert_eq!(&rows[0][3], "300.0");
        assert_eq!(&rows[0][6], "signed, pending invoice");
        assert_eq!(&rows[1][5], "Todo");
        assert_eq!(&rows[1][8], "-");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_metrics_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("metrics.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone()))
            .export(ExportData::Metrics, &ctx.tasks, &ctx.metrics)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(value["totalRevenue"], 1200.0);
        assert_eq!(value["performanceGrade"], "Needs Improvement");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_json_is_one_document(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("all.json");
        let written = Exporter::new(ExportFormat::Json, Some(output_path.clone()))
            .export(ExportData::All, &ctx.tasks, &ctx.metrics)
            .unwrap();
        assert_eq!(written.len(), 1);

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(value["tasks"].as_array().unwrap().len(), 2);
        assert_eq!(value["tasks"][0]["roi"], 300.0);
        assert_eq!(value["tasks"][0]["timeTaken"], 4.0);
        assert!(value["metrics"].is_object());
        assert!(value["exportDate"].is_string());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_csv_writes_two_files(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.csv");
        let written = Exporter::new(ExportFormat::Csv, Some(output_path))
            .export(ExportData::All, &ctx.tasks, &ctx.metrics)
            .unwrap();

        assert_eq!(
            written,
            vec![
                ctx.temp_dir.path().join("report_tasks.csv"),
                ctx.temp_dir.path().join("report_metrics.csv")
            ]
        );
        let metrics = std::fs::read_to_string(&written[1]).unwrap();
        assert!(metrics.contains("Performance Grade,Needs Improvement"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone()))
            .export(ExportData::Tasks, &ctx.tasks, &ctx.metrics)
            .unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_into_missing_directory_fails(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("nope").join("tasks.csv");
        let err = Exporter::new(ExportFormat::Csv, Some(output_path.clone()))
            .export(ExportData::Tasks, &ctx.tasks, &ctx.metrics)
            .unwrap_err();

        assert!(err.to_string().contains("Export directory does not exist"));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().into_owned();
        assert!(name.starts_with("taskglitch_export_"));
        assert!(name.ends_with(".xlsx"));
    }
}

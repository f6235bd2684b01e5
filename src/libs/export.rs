//! Export of the ranked task list and its metrics to CSV, JSON or Excel.
//!
//! The exporter writes whatever collection it is handed, so callers pass the
//! filtered, ranked view the user is looking at. Nothing is re-queried.
//!
//! ## Formats
//!
//! - **CSV**: one file per data set, header row first
//! - **JSON**: pretty-printed; `All` becomes a single document
//! - **Excel**: one `.xlsx` workbook per data set with a bold header row
//!
//! ## File Naming
//!
//! Without an explicit path the output goes to
//! `taskglitch_export_<YYYYmmdd_HHMMSS>.<ext>` in the working directory.
//! Exporting `All` as CSV or Excel writes `<stem>_tasks.<ext>` and
//! `<stem>_metrics.<ext>` next to the requested path.

use crate::libs::formatter::{format_optional_timestamp, format_roi, format_timestamp};
use crate::libs::messages::Message;
use crate::libs::metrics::Metrics;
use crate::libs::task::DerivedTask;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TASK_COLUMNS: [&str; 9] = [
    "Title",
    "Revenue",
    "Time Taken",
    "ROI",
    "Priority",
    "Status",
    "Notes",
    "Created At",
    "Completed At",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Excel => "Excel",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Ranked task list
    Tasks,
    /// Aggregate metrics
    Metrics,
    /// Both
    All,
}

impl fmt::Display for ExportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportData::Tasks => "tasks",
            ExportData::Metrics => "metrics",
            ExportData::All => "all data",
        };
        f.write_str(name)
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let default_name = format!("taskglitch_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
            PathBuf::from(format!("{}.{}", default_name, format.extension()))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `data` and returns the paths of every file created.
    ///
    /// The target directory must already exist.
    pub fn export(&self, data: ExportData, tasks: &[DerivedTask], metrics: &Metrics) -> Result<Vec<PathBuf>> {
        if let Some(dir) = self.output_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                msg_bail_anyhow!(Message::ExportDirectoryMissing(dir.display().to_string()));
            }
        }

        msg_info!(Message::ExportingData {
            data: data.to_string(),
            format: self.format.to_string(),
        });

        let written = match data {
            ExportData::Tasks => {
                self.write_tasks(&self.output_path, tasks)?;
                vec![self.output_path.clone()]
            }
            ExportData::Metrics => {
                self.write_metrics(&self.output_path, metrics)?;
                vec![self.output_path.clone()]
            }
            ExportData::All => self.write_all(tasks, metrics)?,
        };

        for path in &written {
            msg_success!(Message::ExportCompleted(path.display().to_string()));
        }
        Ok(written)
    }

    fn write_all(&self, tasks: &[DerivedTask], metrics: &Metrics) -> Result<Vec<PathBuf>> {
        if self.format == ExportFormat::Json {
            let document = serde_json::json!({
                "exportDate": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "tasks": tasks,
                "metrics": metrics,
            });
            write_json(&self.output_path, &document)?;
            return Ok(vec![self.output_path.clone()]);
        }

        let tasks_path = self.sibling_path("tasks");
        let metrics_path = self.sibling_path("metrics");
        self.write_tasks(&tasks_path, tasks)?;
        self.write_metrics(&metrics_path, metrics)?;
        Ok(vec![tasks_path, metrics_path])
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let stem = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "taskglitch_export".to_string());
        let ext = self
            .output_path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.format.extension().to_string());
        self.output_path.with_file_name(format!("{}_{}.{}", stem, suffix, ext))
    }

    fn write_tasks(&self, path: &Path, tasks: &[DerivedTask]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => write_tasks_csv(path, tasks),
            ExportFormat::Json => write_json(path, &tasks),
            ExportFormat::Excel => write_tasks_excel(path, tasks),
        }
    }

    fn write_metrics(&self, path: &Path, metrics: &Metrics) -> Result<()> {
        match self.format {
            ExportFormat::Csv => write_metrics_csv(path, metrics),
            ExportFormat::Json => write_json(path, metrics),
            ExportFormat::Excel => write_metrics_excel(path, metrics),
        }
    }
}

fn task_record(task: &DerivedTask) -> [String; 9] {
    [
        task.title.clone(),
        task.revenue.to_string(),
        task.time_taken.to_string(),
        format_roi(task.roi),
        task.priority.to_string(),
        task.status.to_string(),
        task.notes.clone(),
        format_timestamp(&task.created_at),
        format_optional_timestamp(task.completed_at.as_ref()),
    ]
}

fn metric_rows(metrics: &Metrics) -> Vec<(&'static str, String)> {
    vec![
        ("Total Revenue", metrics.total_revenue.to_string()),
        ("Total Time Taken", metrics.total_time_taken.to_string()),
        ("Time Efficiency %", format!("{:.1}", metrics.time_efficiency_pct)),
        ("Revenue Per Hour", format!("{:.1}", metrics.revenue_per_hour)),
        ("Average ROI", format!("{:.1}", metrics.average_roi)),
        ("Performance Grade", metrics.performance_grade.to_string()),
    ]
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    File::create(path)?.write_all(json.as_bytes())?;
    Ok(())
}

fn write_tasks_csv(path: &Path, tasks: &[DerivedTask]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(TASK_COLUMNS)?;
    for task in tasks {
        wtr.write_record(task_record(task))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_metrics_csv(path: &Path, metrics: &Metrics) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Metric", "Value"])?;
    for (name, value) in metric_rows(metrics) {
        wtr.write_record([name, value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_header(worksheet: &mut Worksheet, columns: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }
    Ok(())
}

fn write_tasks_excel(path: &Path, tasks: &[DerivedTask]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_header(worksheet, &TASK_COLUMNS)?;

    for (i, task) in tasks.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &task.title)?;
        worksheet.write_number(row, 1, task.revenue)?;
        worksheet.write_number(row, 2, task.time_taken)?;
        match task.roi {
            Some(roi) => worksheet.write_number(row, 3, roi)?,
            None => worksheet.write_string(row, 3, format_roi(None))?,
        };
        worksheet.write_string(row, 4, task.priority.as_str())?;
        worksheet.write_string(row, 5, task.status.as_str())?;
        worksheet.write_string(row, 6, &task.notes)?;
        worksheet.write_string(row, 7, format_timestamp(&task.created_at))?;
        worksheet.write_string(row, 8, format_optional_timestamp(task.completed_at.as_ref()))?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}

fn write_metrics_excel(path: &Path, metrics: &Metrics) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_header(worksheet, &["Metric", "Value"])?;

    for (i, (name, value)) in metric_rows(metrics).into_iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, name)?;
        worksheet.write_string(row, 1, value)?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}

use super::activity::ActivityLog;
use super::formatter::{format_currency, format_hours, format_percent, format_roi, format_timestamp};
use super::metrics::{Breakdown, Metrics};
use super::task::DerivedTask;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Ranked task table. `#` is the rank, starting at 1.
    pub fn tasks(tasks: &[DerivedTask]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "REVENUE", "TIME", "ROI", "PRIORITY", "STATUS"]);
        for (rank, task) in tasks.iter().enumerate() {
            table.add_row(row![
                rank + 1,
                task.id,
                task.title,
                format_currency(task.revenue),
                format_hours(task.time_taken),
                format_roi(task.roi),
                task.priority,
                task.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn metrics(metrics: &Metrics) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL REVENUE", format_currency(metrics.total_revenue)]);
        table.add_row(row!["TIME TAKEN", format_hours(metrics.total_time_taken)]);
        table.add_row(row!["TIME EFFICIENCY", format_percent(metrics.time_efficiency_pct)]);
        table.add_row(row!["REVENUE / HOUR", format_currency(metrics.revenue_per_hour)]);
        table.add_row(row!["AVERAGE ROI", format_roi(Some(metrics.average_roi))]);
        table.add_row(row!["GRADE", metrics.performance_grade]);
        table.printstd();

        Ok(())
    }

    pub fn breakdown(breakdown: &Breakdown) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["GROUP", "VALUE", "COUNT", "REVENUE", "TIME"]);
        for (status, totals) in &breakdown.by_status {
            table.add_row(row![
                "Status",
                status,
                totals.count,
                format_currency(totals.revenue),
                format_hours(totals.time_taken)
            ]);
        }
        for (priority, totals) in &breakdown.by_priority {
            table.add_row(row![
                "Priority",
                priority,
                totals.count,
                format_currency(totals.revenue),
                format_hours(totals.time_taken)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activity(log: &ActivityLog) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "ACTION", "SUMMARY"]);
        for item in log.items() {
            table.add_row(row![format_timestamp(&item.ts), item.kind, item.summary]);
        }
        table.printstd();

        Ok(())
    }
}

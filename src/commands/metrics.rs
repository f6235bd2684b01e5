use super::{load_store, FilterArgs, SourceArgs};
use crate::{
    libs::{
        config::Config,
        filter::TaskFilter,
        messages::Message,
        metrics::{Breakdown, GradeThresholds, Metrics},
        task::Task,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filter: FilterArgs,

    /// Also show totals per status and priority
    #[arg(short, long)]
    breakdown: bool,
}

pub async fn cmd(args: MetricsArgs) -> Result<()> {
    let config = Config::read()?;
    let store = load_store(&config, &args.source).await?;
    show(store.tasks(), &args.filter.to_filter(), &config.grade_thresholds(), args.breakdown)
}

/// Prints metrics for the whole collection and, when a filter is active,
/// for the matching subset as well. The breakdown covers the subset.
pub fn show(tasks: &[Task], filter: &TaskFilter, thresholds: &GradeThresholds, breakdown: bool) -> Result<()> {
    msg_print!(Message::MetricsHeader {
        shown: tasks.len(),
        total: tasks.len(),
    });
    View::metrics(&Metrics::compute_with(tasks, thresholds))?;

    let visible = if filter.is_active() {
        let visible = filter.apply(tasks);
        msg_print!(Message::MetricsHeader {
            shown: visible.len(),
            total: tasks.len(),
        });
        View::metrics(&Metrics::compute_with(&visible, thresholds))?;
        visible
    } else {
        tasks.to_vec()
    };

    if breakdown {
        msg_print!(Message::BreakdownHeader);
        View::breakdown(&Breakdown::compute(&visible))?;
    }
    Ok(())
}

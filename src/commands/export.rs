use super::{load_store, FilterArgs, SourceArgs};
use crate::libs::{
    config::Config,
    export::{ExportData, ExportFormat, Exporter},
    metrics::Metrics,
    ranking::rank_tasks,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "tasks")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filter: FilterArgs,
}

/// Exports the filtered, ranked view and its metrics.
pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let store = load_store(&config, &args.source).await?;

    let visible = args.filter.to_filter().apply(&rank_tasks(store.tasks()));
    let metrics = Metrics::compute_with(&visible, &config.grade_thresholds());

    Exporter::new(args.format, args.output).export(args.data, &visible, &metrics)?;
    Ok(())
}

use super::{load_store, FilterArgs, SourceArgs};
use crate::{
    libs::{config::Config, messages::Message, ranking::rank_tasks, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filter: FilterArgs,

    /// Show at most this many tasks
    #[arg(short, long)]
    limit: Option<usize>,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let store = load_store(&config, &args.source).await?;

    let mut ranked = args.filter.to_filter().apply(&rank_tasks(store.tasks()));
    let total = ranked.len();
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    if ranked.is_empty() {
        msg_print!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader {
        shown: ranked.len(),
        total,
    });
    View::tasks(&ranked)
}

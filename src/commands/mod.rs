//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` entry point. One-shot commands (`list`, `metrics`, `export`) load
//! the task collection, print or write a view of it, and exit. `shell`
//! keeps the collection in memory and accepts editing commands until the
//! user quits.
//!
//! ## Shared Options
//!
//! - `--source`: JSON file or `http(s)` URL, overriding the configured source
//! - `--query`, `--status`, `--priority`: filter applied before ranking and
//!   metrics

pub mod export;
pub mod init;
pub mod list;
pub mod metrics;
pub mod shell;

use crate::libs::config::Config;
use crate::libs::filter::{PriorityFilter, StatusFilter, TaskFilter};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive configuration setup")]
    Init,
    #[command(about = "Show the ranked task list")]
    List(list::ListArgs),
    #[command(about = "Show aggregate metrics")]
    Metrics(metrics::MetricsArgs),
    #[command(about = "Export tasks and metrics to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Interactive session with add, update, delete and undo")]
    Shell(shell::ShellArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::List(args) => list::cmd(args).await,
            Commands::Metrics(args) => metrics::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Shell(args) => shell::cmd(args).await,
        }
    }
}

/// Where to load tasks from for this run.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// JSON file path or http(s) URL; overrides the configured source
    #[arg(long)]
    pub source: Option<String>,
}

/// Title, status and priority filter.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive title search
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// all, todo, in-progress or done
    #[arg(short, long, default_value = "all")]
    pub status: StatusFilter,

    /// all, high, medium or low
    #[arg(short, long, default_value = "all")]
    pub priority: PriorityFilter,
}

impl FilterArgs {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter::new(&self.query, self.status, self.priority)
    }
}

/// Runs the initial load and builds the store.
///
/// A load failure is reported and leaves the store empty; the command
/// carries on.
pub async fn load_store(config: &Config, source: &SourceArgs) -> Result<TaskStore> {
    let mut loader = config.task_loader(source.source.as_deref());
    let loaded = match loader.load().await {
        Ok(Some(loaded)) => loaded,
        Ok(None) => return Ok(TaskStore::new()),
        Err(e) => {
            msg_error!(Message::TasksLoadFailed(e.to_string()));
            return Ok(TaskStore::new());
        }
    };

    if loaded.generated {
        msg_info!(Message::SampleTasksGenerated(loaded.tasks.len()));
    } else {
        msg_debug!(Message::TasksLoaded {
            count: loaded.tasks.len(),
            source: loader.source().to_string(),
        });
    }
    Ok(TaskStore::from_tasks(loaded.tasks))
}

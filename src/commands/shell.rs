//! Interactive editing session.
//!
//! The shell loads the task collection once and then reads one command per
//! line. Every mutation goes through [`TaskStore`] and is recorded in the
//! [`ActivityLog`]; deleting a task leaves it in the undo slot until the next
//! `undo`, `dismiss` or delete.
//!
//! ## Session Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ load once    │───▶│ read line    │───▶│ Session::    │
//! │ (TaskLoader) │    │ (dialoguer)  │    │ execute      │
//! └──────────────┘    └──────▲───────┘    └──────┬───────┘
//!                            └───────────────────┘
//! ```
//!
//! Lines are split on whitespace with single or double quotes grouping
//! words, then parsed with clap, so `add "Demo for Globex" --revenue 1200
//! --time 4` works as expected.

use super::{load_store, metrics, FilterArgs, SourceArgs};
use crate::libs::{
    activity::{ActivityKind, ActivityLog},
    config::Config,
    export::{ExportData, ExportFormat, Exporter},
    messages::Message,
    metrics::{GradeThresholds, Metrics},
    ranking::rank_tasks,
    store::TaskStore,
    task::{NewTask, Priority, Status, TaskPatch},
    view::View,
};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShellArgs {
    #[command(flatten)]
    source: SourceArgs,
}

pub async fn cmd(args: ShellArgs) -> Result<()> {
    let config = Config::read()?;
    let store = load_store(&config, &args.source).await?;
    let mut session = Session::new(store, config.grade_thresholds());

    msg_print!(Message::ShellWelcome);
    loop {
        let line: String = match Input::with_theme(&ColorfulTheme::default())
            .with_prompt("taskglitch")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // End of input or a closed terminal ends the session.
            Err(_) => break,
        };

        if session.execute(&line)? == Flow::Quit {
            break;
        }
    }
    msg_print!(Message::ShellGoodbye);
    Ok(())
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true, disable_help_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    Metrics {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(short, long)]
        breakdown: bool,
    },
    Add {
        title: String,

        #[arg(short, long)]
        revenue: f64,

        #[arg(short, long)]
        time: f64,

        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        #[arg(short, long, value_parser = parse_status)]
        status: Option<Status>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        revenue: Option<f64>,

        #[arg(short, long)]
        time: Option<f64>,

        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        #[arg(short, long, value_parser = parse_status)]
        status: Option<Status>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    Delete {
        id: String,
    },
    Undo,
    Dismiss,
    Activity,
    Export {
        #[arg(value_enum, default_value = "tasks")]
        data: ExportData,

        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },
    Help,
    #[command(alias = "exit")]
    Quit,
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::parse(value).ok_or_else(|| format!("unknown priority '{}', expected high, medium or low", value))
}

fn parse_status(value: &str) -> Result<Status, String> {
    Status::parse(value).ok_or_else(|| format!("unknown status '{}', expected todo, in-progress or done", value))
}

/// An editing session over one in-memory collection.
pub struct Session {
    store: TaskStore,
    activity: ActivityLog,
    thresholds: GradeThresholds,
}

impl Session {
    pub fn new(store: TaskStore, thresholds: GradeThresholds) -> Self {
        Session {
            store,
            activity: ActivityLog::new(),
            thresholds,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Executes one input line.
    ///
    /// Unknown commands and bad arguments are reported and the session
    /// continues; only I/O failures while printing or exporting are errors.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => {
                msg_error!(Message::InvalidCommand(e));
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                msg_error!(Message::InvalidCommand(e.render().to_string().trim().to_string()));
                return Ok(Flow::Continue);
            }
        };

        self.run(command)
    }

    fn run(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::List { filter } => {
                let ranked = filter.to_filter().apply(&self.store.ranked());
                if ranked.is_empty() {
                    msg_print!(Message::NoTasksFound);
                } else {
                    msg_print!(Message::TasksHeader {
                        shown: ranked.len(),
                        total: self.store.len(),
                    });
                    View::tasks(&ranked)?;
                }
            }
            ShellCommand::Metrics { filter, breakdown } => {
                metrics::show(self.store.tasks(), &filter.to_filter(), &self.thresholds, breakdown)?;
            }
            ShellCommand::Add {
                title,
                revenue,
                time,
                priority,
                status,
                notes,
            } => {
                let mut new_task = NewTask::new(&title, revenue, time)
                    .with_priority(priority.unwrap_or_default())
                    .with_status(status.unwrap_or_default());
                if let Some(notes) = notes {
                    new_task = new_task.with_notes(&notes);
                }
                let id = self.store.add(new_task);
                let title = self.title_of(&id);
                self.activity.record(ActivityKind::Add, Message::ActivityAdded(title.clone()).to_string());
                msg_success!(Message::TaskAdded(title));
            }
            ShellCommand::Update {
                id,
                title,
                revenue,
                time,
                priority,
                status,
                notes,
            } => {
                let patch = TaskPatch {
                    title,
                    revenue,
                    time_taken: time,
                    priority,
                    status,
                    notes,
                    completed_at: None,
                };
                self.update(&id, patch);
            }
            ShellCommand::Delete { id } => self.delete(&id),
            ShellCommand::Undo => self.undo(),
            ShellCommand::Dismiss => self.dismiss(),
            ShellCommand::Activity => {
                if self.activity.is_empty() {
                    msg_print!(Message::ActivityEmpty);
                } else {
                    msg_print!(Message::ActivityHeader);
                    View::activity(&self.activity)?;
                }
            }
            ShellCommand::Export {
                data,
                format,
                output,
                filter,
            } => {
                let visible = filter.to_filter().apply(&rank_tasks(self.store.tasks()));
                let metrics = Metrics::compute_with(&visible, &self.thresholds);
                if let Err(e) = Exporter::new(format, output).export(data, &visible, &metrics) {
                    msg_error!(Message::ExportFailed(e.to_string()));
                }
            }
            ShellCommand::Help => msg_print!(Message::ShellHelp),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self, id: &str, patch: TaskPatch) {
        if patch.is_empty() {
            msg_warning!(Message::NoChangesProvided);
            return;
        }

        let fields = patch.field_names().join(", ");
        if self.store.update(id, patch) {
            self.activity.record(ActivityKind::Update, Message::ActivityUpdated(fields).to_string());
            msg_success!(Message::TaskUpdated(id.to_string()));
        } else {
            msg_error!(Message::TaskNotFound(id.to_string()));
        }
    }

    fn delete(&mut self, id: &str) {
        let title = self.title_of(id);
        if self.store.delete(id) {
            self.activity.record(ActivityKind::Delete, Message::ActivityDeleted(id.to_string()).to_string());
            msg_success!(Message::TaskDeleted(title.clone()));
            msg_info!(Message::UndoHint(title));
        } else {
            msg_error!(Message::TaskNotFound(id.to_string()));
        }
    }

    fn undo(&mut self) {
        let Some(pending) = self.store.last_deleted().cloned() else {
            msg_info!(Message::UndoNothingPending);
            return;
        };

        match self.store.undo_delete(true) {
            Some(_) => {
                self.activity.record(ActivityKind::Undo, Message::ActivityUndo.to_string());
                msg_success!(Message::TaskRestored(pending.title));
            }
            None => msg_warning!(Message::UndoRestoreSkipped(pending.id)),
        }
    }

    fn dismiss(&mut self) {
        let Some(pending) = self.store.last_deleted().cloned() else {
            msg_info!(Message::UndoNothingPending);
            return;
        };

        self.store.undo_delete(false);
        msg_info!(Message::DeletionDismissed(pending.title));
    }

    fn title_of(&self, id: &str) -> String {
        self.store.get(id).map(|t| t.title.clone()).unwrap_or_default()
    }
}

/// Splits a command line into words. Quotes group words and are removed;
/// an unterminated quote is an error.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

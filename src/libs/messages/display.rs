//! Text for every [`Message`] variant.
//!
//! Activity summaries are part of the catalogue too, so the log shown by
//! the shell and the text printed after each action stay in sync.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleLoader => "Task source".to_string(),
            Message::ConfigModuleGrades => "Performance grade thresholds".to_string(),
            Message::SelectConfigModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptTaskSource => "Task source (JSON file path or http(s) URL, empty for sample data)".to_string(),
            Message::PromptSeedCount => "Number of sample tasks to generate when the source is empty".to_string(),
            Message::PromptExcellentRoi => "Average ROI above which performance is Excellent".to_string(),
            Message::PromptGoodRoi => "Average ROI from which performance is Good".to_string(),
            Message::GradeThresholdsAdjusted { excellent, good } => {
                format!("Grade thresholds adjusted to excellent > {} and good >= {}", excellent, good)
            }
            Message::ConfigInvalid { path, error } => format!("Invalid configuration in {}: {}", path, error),

            // === LOADING MESSAGES ===
            Message::TasksLoaded { count, source } => format!("Loaded {} task(s) from {}", count, source),
            Message::SampleTasksGenerated(count) => format!("No tasks found, generated {} sample task(s)", count),
            Message::TasksLoadFailed(error) => format!("Failed to load tasks: {}", error),

            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added", title),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskRestored(title) => format!("Task '{}' restored", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::UndoHint(title) => format!("Deleted '{}'. Type 'undo' to restore it or 'dismiss' to forget it.", title),
            Message::UndoNothingPending => "Nothing to undo".to_string(),
            Message::UndoRestoreSkipped(id) => format!("Task {} was not restored, its ID is already in use", id),
            Message::DeletionDismissed(title) => format!("Deletion of '{}' is now final", title),
            Message::NoChangesProvided => "No changes provided".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksHeader { shown, total } => format!("Tasks ({} of {}):", shown, total),

            // === METRICS MESSAGES ===
            Message::MetricsHeader { shown, total } => format!("Metrics ({} of {} tasks):", shown, total),
            Message::BreakdownHeader => "Breakdown:".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::ActivityHeader => "Activity:".to_string(),
            Message::ActivityEmpty => "No activity yet".to_string(),
            Message::ActivityAdded(title) => format!("Added: {}", title),
            Message::ActivityUpdated(fields) => format!("Updated: {}", fields),
            Message::ActivityDeleted(id) => format!("Deleted task {}", id),
            Message::ActivityUndo => "Undo delete".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData { data, format } => format!("Exporting {} in {} format...", data, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),
            Message::ExportDirectoryMissing(dir) => format!("Export directory does not exist: {}", dir),

            // === SHELL MESSAGES ===
            Message::ShellWelcome => "TaskGlitch shell. Type 'help' for commands, 'quit' to exit.".to_string(),
            Message::ShellGoodbye => "Bye".to_string(),
            Message::ShellHelp => [
                "Commands:",
                "  list [--query Q] [--status S] [--priority P]   ranked task table",
                "  metrics [--query Q] [--status S] [--priority P] [--breakdown]",
                "  add <title> --revenue N --time N [--priority P] [--status S] [--notes T]",
                "  update <id> [--title T] [--revenue N] [--time N] [--priority P] [--status S] [--notes T]",
                "  delete <id>                                      delete and offer undo",
                "  undo                                             restore the last deleted task",
                "  dismiss                                          make the last deletion final",
                "  activity                                         recent actions",
                "  export [--format csv|json|excel] [--data tasks|metrics|all] [--output PATH]",
                "  help, quit",
            ]
            .join("\n"),
            Message::InvalidCommand(error) => format!("Invalid command: {}", error),
        };
        write!(f, "{}", text)
    }
}

/// Every piece of user-facing text the CLI prints.
///
/// Text lives in one place (`display.rs`); call sites only pick a variant
/// and supply its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleLoader,
    ConfigModuleGrades,
    SelectConfigModules,
    PromptTaskSource,
    PromptSeedCount,
    PromptExcellentRoi,
    PromptGoodRoi,
    GradeThresholdsAdjusted { excellent: f64, good: f64 },
    ConfigInvalid { path: String, error: String },

    // === LOADING MESSAGES ===
    TasksLoaded { count: usize, source: String },
    SampleTasksGenerated(usize),
    TasksLoadFailed(String),

    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskRestored(String),
    TaskNotFound(String),
    UndoHint(String),
    UndoNothingPending,
    UndoRestoreSkipped(String),
    DeletionDismissed(String),
    NoChangesProvided,
    NoTasksFound,
    TasksHeader { shown: usize, total: usize },

    // === METRICS MESSAGES ===
    MetricsHeader { shown: usize, total: usize },
    BreakdownHeader,

    // === ACTIVITY MESSAGES ===
    ActivityHeader,
    ActivityEmpty,
    ActivityAdded(String),
    ActivityUpdated(String),
    ActivityDeleted(String),
    ActivityUndo,

    // === EXPORT MESSAGES ===
    ExportingData { data: String, format: String },
    ExportCompleted(String),
    ExportFailed(String),
    ExportDirectoryMissing(String),

    // === SHELL MESSAGES ===
    ShellWelcome,
    ShellGoodbye,
    ShellHelp,
    InvalidCommand(String),
}

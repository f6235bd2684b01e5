//! # TaskGlitch - Sales Task Metrics and Ranking
//!
//! A command-line dashboard for sales tasks: loads a task list, ranks it by
//! return on investment, and derives revenue and efficiency metrics.
//!
//! ## Features
//!
//! - **Lenient Loading**: Normalizes loosely-typed JSON task records from a
//!   file or an HTTP endpoint, with generated sample data as a fallback
//! - **Ranking**: Stable ordering by ROI, then priority, then title
//! - **Metrics**: Revenue totals, time efficiency, revenue per hour, average
//!   ROI and a performance grade
//! - **Editing**: Add, update and delete tasks with single-step undo in an
//!   interactive shell
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskglitch::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;

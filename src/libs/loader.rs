//! Initial population of the task store.
//!
//! The loader is the only suspending step in a session: it fetches raw task
//! records from a local JSON file or an HTTP endpoint, normalizes them, and
//! falls back to generated sample data when the source has nothing to offer.
//!
//! ## Load Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ TaskSource   │───▶│  raw JSON    │───▶│  normalize   │───▶│ empty? seed  │
//! │ file | http  │    │              │    │              │    │ N samples    │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! ## Failure Semantics
//!
//! - A missing file or a non-success HTTP status counts as "no data" and
//!   falls back to sample data.
//! - Transport errors, unreadable files and malformed JSON are reported as a
//!   [`LoadError`]. Nothing is retried.
//! - A loader runs at most once. The guard is set whether the attempt
//!   succeeded or failed; later calls return `Ok(None)`.

use crate::libs::normalizer::normalize_tasks;
use crate::libs::seed::{generate_sales_tasks, DEFAULT_SEED_COUNT};
use crate::libs::task::Task;
use serde_json::Value;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure to fetch or parse the initial task data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch tasks from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read tasks from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse tasks from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where raw task records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    /// No source configured: always use sample data.
    Empty,
    File(PathBuf),
    Url(String),
}

impl TaskSource {
    /// Interprets a configured source string. `http://` and `https://`
    /// prefixes select the HTTP source, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            TaskSource::Empty
        } else if value.starts_with("http://") || value.starts_with("https://") {
            TaskSource::Url(value.to_string())
        } else {
            TaskSource::File(PathBuf::from(value))
        }
    }

    /// Fetches the raw JSON document. `Ok(None)` means the source had no data.
    async fn fetch(&self) -> Result<Option<Value>, LoadError> {
        match self {
            TaskSource::Empty => Ok(None),
            TaskSource::File(path) => {
                let content = match tokio::fs::read_to_string(path).await {
                    Ok(content) => content,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        warn!(path = %path.display(), "task file not found");
                        return Ok(None);
                    }
                    Err(source) => {
                        return Err(LoadError::Io {
                            path: path.clone(),
                            source,
                        })
                    }
                };
                let value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
                    origin: path.display().to_string(),
                    source,
                })?;
                Ok(Some(value))
            }
            TaskSource::Url(url) => {
                let response = reqwest::get(url).await.map_err(|source| LoadError::Http {
                    url: url.clone(),
                    source,
                })?;

                if !response.status().is_success() {
                    warn!(%url, status = %response.status(), "task source answered without data");
                    return Ok(None);
                }

                let body = response.text().await.map_err(|source| LoadError::Http {
                    url: url.clone(),
                    source,
                })?;
                let value = serde_json::from_str(&body).map_err(|source| LoadError::Parse {
                    origin: url.clone(),
                    source,
                })?;
                Ok(Some(value))
            }
        }
    }
}

impl fmt::Display for TaskSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskSource::Empty => f.write_str("sample data"),
            TaskSource::File(path) => write!(f, "{}", path.display()),
            TaskSource::Url(url) => f.write_str(url),
        }
    }
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct LoadedTasks {
    pub tasks: Vec<Task>,
    /// Whether the tasks were generated rather than read from the source.
    pub generated: bool,
}

/// One-shot loader for the initial task collection.
#[derive(Debug)]
pub struct TaskLoader {
    source: TaskSource,
    seed_count: usize,
    fetched: bool,
}

impl TaskLoader {
    pub fn new(source: TaskSource) -> Self {
        TaskLoader {
            source,
            seed_count: DEFAULT_SEED_COUNT,
            fetched: false,
        }
    }

    pub fn with_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }

    pub fn source(&self) -> &TaskSource {
        &self.source
    }

    pub fn has_fetched(&self) -> bool {
        self.fetched
    }

    /// Loads the initial tasks.
    ///
    /// Returns `Ok(None)` when this loader has already run.
    pub async fn load(&mut self) -> Result<Option<LoadedTasks>, LoadError> {
        if self.fetched {
            debug!("initial load already performed, skipping");
            return Ok(None);
        }
        self.fetched = true;

        let raw = self.source.fetch().await?;
        let tasks = raw.as_ref().map(normalize_tasks).unwrap_or_default();

        if tasks.is_empty() {
            info!(count = self.seed_count, source = %self.source, "no tasks from source, generating sample data");
            return Ok(Some(LoadedTasks {
                tasks: generate_sales_tasks(self.seed_count),
                generated: true,
            }));
        }

        info!(count = tasks.len(), source = %self.source, "tasks loaded");
        Ok(Some(LoadedTasks { tasks, generated: false }))
    }
}

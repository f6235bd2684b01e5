//! Persistent settings for TaskGlitch.
//!
//! Settings live in a single JSON file in the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing file or a missing
//! section means built-in defaults.
//!
//! ## Sections
//!
//! - **loader**: where the initial tasks come from and how many sample tasks
//!   to generate when that source is empty
//! - **grades**: average-ROI thresholds for the performance grade
//!
//! ## Example File
//!
//! ```json
//! {
//!   "loader": { "source": "https://example.com/tasks.json", "seed_count": 50 },
//!   "grades": { "excellent_roi": 500.0, "good_roi": 200.0 }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskglitch::libs::config::Config;
//!
//! let config = Config::read()?;
//! let thresholds = config.grade_thresholds();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::loader::{TaskLoader, TaskSource};
use crate::libs::messages::Message;
use crate::libs::metrics::GradeThresholds;
use crate::libs::seed::DEFAULT_SEED_COUNT;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Initial task source settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoaderConfig {
    /// JSON file path or `http(s)` URL. Absent or empty means sample data only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Number of sample tasks generated when the source yields nothing.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}

fn default_seed_count() -> usize {
    DEFAULT_SEED_COUNT
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            source: None,
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl LoaderConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "loader".to_string(),
            name: Message::ConfigModuleLoader.to_string(),
        }
    }

    pub fn task_source(&self) -> TaskSource {
        self.source.as_deref().map(TaskSource::parse).unwrap_or(TaskSource::Empty)
    }

    fn init(config: &Option<LoaderConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleLoader);

        let source: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskSource.to_string())
            .default(default.source.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let seed_count = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSeedCount.to_string())
            .default(default.seed_count)
            .interact_text()?;

        let source = source.trim();
        Ok(LoaderConfig {
            source: (!source.is_empty()).then(|| source.to_string()),
            seed_count,
        })
    }
}

fn grades_module() -> ConfigModule {
    ConfigModule {
        key: "grades".to_string(),
        name: Message::ConfigModuleGrades.to_string(),
    }
}

fn init_grades(config: &Option<GradeThresholds>) -> Result<GradeThresholds> {
    let default = config.unwrap_or_default();
    msg_print!(Message::ConfigModuleGrades);

    let entered = GradeThresholds {
        excellent_roi: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExcellentRoi.to_string())
            .default(default.excellent_roi)
            .interact_text()?,
        good_roi: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptGoodRoi.to_string())
            .default(default.good_roi)
            .interact_text()?,
    };

    let sanitized = entered.sanitized();
    if sanitized != entered {
        msg_warning!(Message::GradeThresholdsAdjusted {
            excellent: sanitized.excellent_roi,
            good: sanitized.good_roi,
        });
    }
    Ok(sanitized)
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<LoaderConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<GradeThresholds>,
}

impl Config {
    /// Reads the configuration file, or returns the defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| {
            msg_error_anyhow!(Message::ConfigInvalid {
                path: config_file_path.display().to_string(),
                error: e.to_string(),
            })
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![LoaderConfig::module(), grades_module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "loader" => config.loader = Some(LoaderConfig::init(&config.loader)?),
                "grades" => config.grades = Some(init_grades(&config.grades)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// Thresholds to grade with, sanitized.
    pub fn grade_thresholds(&self) -> GradeThresholds {
        self.grades.unwrap_or_default().sanitized()
    }

    /// Loader settings with defaults filled in.
    pub fn loader_config(&self) -> LoaderConfig {
        self.loader.clone().unwrap_or_default()
    }

    /// Builds the initial-load step. `source_override` replaces the
    /// configured source for this run only.
    pub fn task_loader(&self, source_override: Option<&str>) -> TaskLoader {
        let loader = self.loader_config();
        let source = match source_override {
            Some(value) => TaskSource::parse(value),
            None => loader.task_source(),
        };
        TaskLoader::new(source).with_seed_count(loader.seed_count)
    }
}

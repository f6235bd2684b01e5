//! Core library modules for TaskGlitch.
//!
//! ## Features
//!
//! - **Task Model**: Entities, coercions and the in-memory store with undo
//! - **Engine**: Normalizer, derived metrics, ranking and filtering
//! - **Data Sources**: One-shot loader and the sample data generator
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console tables, activity log, export, formatting
//!
//! ## Usage
//!
//! ```rust
//! use taskglitch::libs::store::TaskStore;
//! use taskglitch::libs::task::NewTask;
//!
//! let mut store = TaskStore::new();
//! let id = store.add(NewTask::new("Demo for Globex", 1200.0, 4.0));
//! assert_eq!(store.ranked()[0].id, id);
//! ```

pub mod activity;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod loader;
pub mod messages;
pub mod metrics;
pub mod normalizer;
pub mod ranking;
pub mod seed;
pub mod store;
pub mod task;
pub mod view;

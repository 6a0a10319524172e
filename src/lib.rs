//! Trip Planner - terminal travel expense tracker
//!
//! Records spending against a small set of categories, tracks it against an
//! overall trip budget and keeps everything in one JSON file between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location and display settings
//! - `error`: Custom error types
//! - `models`: `Money`, the category ledger and the trip state
//! - `storage`: JSON file storage with atomic writes
//! - `input`: Validated console input
//! - `reports`: Trip summary
//! - `display`: Terminal formatting helpers
//! - `cli`: The interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use std::io;
//! use trip_planner::cli::TripPlanner;
//! use trip_planner::config::{PlannerPaths, Settings};
//! use trip_planner::input::Console;
//! use trip_planner::storage::ExpenseStore;
//!
//! let paths = PlannerPaths::new();
//! let store = ExpenseStore::new(paths.data_file());
//! let console = Console::new(io::stdin().lock(), io::stdout().lock());
//! TripPlanner::new(console, store, Settings::from_env()).run()?;
//! # Ok::<(), trip_planner::PlannerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{PlannerError, PlannerResult};

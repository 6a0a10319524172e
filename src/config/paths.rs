//! Path management for the trip planner
//!
//! ## Path Resolution Order
//!
//! 1. `TRIP_PLANNER_DATA_FILE` environment variable (if set and non-empty)
//! 2. `travel_expenses.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the data file location
pub const DATA_FILE_ENV: &str = "TRIP_PLANNER_DATA_FILE";

/// Data file used when no override is given
pub const DEFAULT_DATA_FILE: &str = "travel_expenses.json";

/// Manages the paths used by the trip planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    data_file: PathBuf,
}

impl PlannerPaths {
    /// Resolve paths from the process environment
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve paths through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = lookup(DATA_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Create PlannerPaths with an explicit data file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the expense data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for PlannerPaths {
    fn default() -> Self {
        Self::new()
    }
}

//! Expense store
//!
//! Loads and saves the whole `TripState` as one JSON document. The store keeps
//! nothing between calls besides the file path.
//!
//! Loading is asymmetric: with no file the planner starts from
//! the default categories, but once a file exists its category set is
//! authoritative and missing defaults are not added back.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PlannerResult;
use crate::models::TripState;

use super::file_io::{read_json, write_json_atomic};

/// How `ExpenseStore::load` arrived at its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No data file yet
    Fresh,
    /// The data file was read successfully
    Loaded { categories: usize },
    /// The data file was unreadable or invalid and defaults were used
    Recovered { reason: String },
}

/// The state produced by a load, plus how it was obtained
#[derive(Debug, Clone)]
pub struct LoadedTrip {
    pub state: TripState,
    pub outcome: LoadOutcome,
}

/// Persistence for the trip ledger and budget
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted trip; never fails
    pub fn load(&self) -> LoadedTrip {
        let read = read_json::<TripState, _>(&self.path)
            .and_then(|state| state.map(|s| s.validate().map(|()| s)).transpose());

        match read {
            Ok(None) => {
                info!(path = %self.path.display(), "no data file, starting fresh");
                LoadedTrip {
                    state: TripState::fresh(),
                    outcome: LoadOutcome::Fresh,
                }
            }
            Ok(Some(state)) => {
                let categories = state.expenses.len();
                info!(path = %self.path.display(), categories, "loaded trip data");
                LoadedTrip {
                    state,
                    outcome: LoadOutcome::Loaded { categories },
                }
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file unusable, resetting to defaults");
                LoadedTrip {
                    state: TripState::fresh(),
                    outcome: LoadOutcome::Recovered {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// Overwrite the data file with `state`
    ///
    /// The caller's state is untouched whether or not this succeeds.
    pub fn save(&self, state: &TripState) -> PlannerResult<()> {
        match write_json_atomic(&self.path, state) {
            Ok(()) => {
                info!(path = %self.path.display(), "saved trip data");
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to save trip data");
                Err(e)
            }
        }
    }
}

//! Storage layer for the trip planner
//!
//! A single JSON data file, rewritten wholesale with an atomic rename.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome, LoadedTrip};
pub use file_io::{read_json, write_json_atomic};

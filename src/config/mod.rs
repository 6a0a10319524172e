//! Configuration module for the trip planner
//!
//! - Data file location
//! - Display settings

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;

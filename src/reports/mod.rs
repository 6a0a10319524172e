//! Reports
//!
//! - Trip summary: total spent, share per category, budget standing

pub mod summary;

pub use summary::{BudgetStanding, BudgetStatus, CategoryShare, TripSummary};

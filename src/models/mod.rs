//! Core data models for the trip planner
//!
//! The domain is small: a cents-backed `Money` amount, the per-category
//! ledger, and the `TripState` that bundles the ledger with the budget.

pub mod ledger;
pub mod money;
pub mod trip;

pub use ledger::{CategoryLedger, CategoryTotal, DEFAULT_CATEGORIES};
pub use money::{Money, MoneyParseError};
pub use trip::TripState;

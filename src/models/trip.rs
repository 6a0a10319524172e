//! Session state for one trip
//!
//! Bundles the ledger with the overall budget. The menu controller owns one
//! `TripState` for the whole session and hands it to each operation.

use serde::{Deserialize, Serialize};

use super::ledger::CategoryLedger;
use super::money::Money;
use crate::error::{PlannerError, PlannerResult};

/// Everything the planner persists between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripState {
    /// Category totals; a missing field loads as an empty ledger
    #[serde(default)]
    pub expenses: CategoryLedger,

    /// Overall budget, zero meaning "not set"
    #[serde(default)]
    pub budget: Money,
}

impl TripState {
    /// Default categories, no budget
    pub fn fresh() -> Self {
        Self {
            expenses: CategoryLedger::with_default_categories(),
            budget: Money::zero(),
        }
    }

    /// Replace the budget
    pub fn set_budget(&mut self, budget: Money) -> PlannerResult<()> {
        if budget.is_negative() {
            return Err(PlannerError::NegativeAmount(budget));
        }
        self.budget = budget;
        Ok(())
    }

    pub fn has_budget(&self) -> bool {
        self.budget.is_positive()
    }

    /// Check ledger and budget invariants
    pub fn validate(&self) -> PlannerResult<()> {
        if self.budget.is_negative() {
            return Err(PlannerError::NegativeAmount(self.budget));
        }
        self.expenses.validate()
    }
}

impl Default for TripState {
    fn default() -> Self {
        Self::fresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = TripState::fresh();
        assert_eq!(state.expenses.len(), 5);
        assert!(!state.has_budget());
    }

    #[test]
    fn test_set_budget() {
        let mut state = TripState::fresh();
        state.set_budget(Money::from_cents(50_000_00)).unwrap();
        assert!(state.has_budget());

        assert!(state.set_budget(Money::from_cents(-1)).is_err());
        assert_eq!(state.budget, Money::from_cents(50_000_00));

        state.set_budget(Money::zero()).unwrap();
        assert!(!state.has_budget());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let state: TripState = serde_json::from_str("{}").unwrap();
        assert!(state.expenses.is_empty());
        assert!(state.budget.is_zero());

        let state: TripState = serde_json::from_str(r#"{"budget": 750}"#).unwrap();
        assert!(state.expenses.is_empty());
        assert_eq!(state.budget, Money::from_cents(75000));
    }

    #[test]
    fn test_validate_rejects_negative_budget() {
        let state: TripState =
            serde_json::from_str(r#"{"expenses": {}, "budget": -5.0}"#).unwrap();
        assert!(state.validate().is_err());
    }
}

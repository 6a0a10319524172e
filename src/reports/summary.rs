//! Trip Summary
//!
//! Totals, per-category breakdown and budget standing for the current trip.

use crate::display::{
    banner, double_separator, format_amount, format_percentage, left_align, separator,
    REPORT_WIDTH,
};
use crate::models::{CategoryLedger, Money, TripState};

/// Width of the category name column in the breakdown
const NAME_WIDTH: usize = 25;

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category name
    pub name: String,
    /// Amount spent in this category
    pub amount: Money,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Where spending stands against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStanding {
    Under { remaining: Money },
    Over { overage: Money },
}

/// Budget section of the summary, present only when a budget is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub budget: Money,
    pub standing: BudgetStanding,
}

impl BudgetStatus {
    fn new(budget: Money, total_spent: Money) -> Self {
        let remaining = budget - total_spent;
        let standing = if remaining.is_negative() {
            BudgetStanding::Over {
                overage: remaining.abs(),
            }
        } else {
            BudgetStanding::Under { remaining }
        };
        Self { budget, standing }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.standing, BudgetStanding::Over { .. })
    }
}

/// Trip summary report
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    /// Sum of every category total
    pub total_spent: Money,
    /// Categories with spending, in ledger order
    pub breakdown: Vec<CategoryShare>,
    /// Budget standing, if a budget is set
    pub budget: Option<BudgetStatus>,
}

impl TripSummary {
    /// Summarize the trip state
    pub fn generate(state: &TripState) -> Self {
        Self::summarize(&state.expenses, state.budget)
    }

    /// Summarize a ledger against a budget (zero meaning no budget)
    pub fn summarize(ledger: &CategoryLedger, budget: Money) -> Self {
        let total_spent = ledger.total();

        let breakdown = ledger
            .iter()
            .filter(|entry| entry.amount.is_positive())
            .map(|entry| CategoryShare {
                name: entry.name.clone(),
                amount: entry.amount,
                percentage: entry.amount.percentage_of(total_spent),
            })
            .collect();

        let budget = budget
            .is_positive()
            .then(|| BudgetStatus::new(budget, total_spent));

        Self {
            total_spent,
            breakdown,
            budget,
        }
    }

    /// Whether anything has been spent yet
    pub fn has_expenses(&self) -> bool {
        !self.total_spent.is_zero()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&banner("TRAVEL EXPENSE SUMMARY", REPORT_WIDTH));
        output.push('\n');

        if !self.has_expenses() {
            output.push_str("No expenses recorded yet.\n");
            if let Some(status) = &self.budget {
                output.push_str(&format!(
                    "Trip Budget Set: {}\n",
                    format_amount(status.budget, symbol)
                ));
            }
            output.push_str(&double_separator(REPORT_WIDTH));
            output.push('\n');
            return output;
        }

        output.push_str("\n--- Breakdown by Category ---\n");
        for share in &self.breakdown {
            output.push_str(&format!(
                "{} : {} ({})\n",
                left_align(&share.name, NAME_WIDTH),
                format_amount(share.amount, symbol),
                format_percentage(share.percentage)
            ));
        }

        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "TOTAL SPENT EXPENSES: {}\n",
            format_amount(self.total_spent, symbol)
        ));

        if let Some(status) = &self.budget {
            output.push_str("\n--- Budget Tracking ---\n");
            output.push_str(&format!(
                "Trip Budget Set:    {}\n",
                format_amount(status.budget, symbol)
            ));
            match status.standing {
                BudgetStanding::Under { remaining } => output.push_str(&format!(
                    "Amount Remaining:   {} (Under Budget)\n",
                    format_amount(remaining, symbol)
                )),
                BudgetStanding::Over { overage } => output.push_str(&format!(
                    "Amount OVER Budget: {} (Over Budget)\n",
                    format_amount(overage, symbol)
                )),
            }
        }

        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output
    }
}

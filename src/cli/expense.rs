//! Add Expense operation

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::input::Console;
use crate::models::{Money, TripState};

/// Pick a category by number and add an amount to it
pub fn add_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut TripState,
    settings: &Settings,
) -> PlannerResult<()> {
    console.blank()?;
    console.say("--- Add New Expense ---")?;

    let categories: Vec<String> = state
        .expenses
        .categories()
        .into_iter()
        .map(String::from)
        .collect();

    if categories.is_empty() {
        console.say("No categories available. Add one from Manage Categories first.")?;
        return Ok(());
    }

    console.say("Available Categories:")?;
    for (i, category) in categories.iter().enumerate() {
        console.say(format!("  {}. {}", i + 1, category))?;
    }

    let max_choice = categories.len() as i64;
    let choice: i64 = console.prompt(
        &format!(
            "Enter the number of the category (1-{}, or 0 to cancel): ",
            max_choice
        ),
        Some(0),
        Some(max_choice),
    )?;

    if choice == 0 {
        console.say("Expense addition cancelled.")?;
        return Ok(());
    }

    let category = &categories[(choice - 1) as usize];
    let symbol = &settings.currency_symbol;

    let amount: Money = console.prompt(
        &format!("Enter the amount for {} (e.g., 55.50): {}", category, symbol),
        Some(Money::zero()),
        None,
    )?;

    match state.expenses.add_amount(category, amount) {
        Ok(_) => {
            console.blank()?;
            console.say(format!(
                "Added {} to {}.",
                amount.format_with_symbol(symbol),
                category
            ))
        }
        Err(e) if e.is_rejected_edit() => console.say(e),
        Err(e) => Err(e),
    }
}

//! Set Budget operation

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::input::Console;
use crate::models::{Money, TripState};

/// Prompt for a new overall budget and store it
pub fn set_budget<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut TripState,
    settings: &Settings,
) -> PlannerResult<()> {
    console.blank()?;
    console.say("--- Set Trip Budget ---")?;

    let symbol = &settings.currency_symbol;
    let budget: Money = console.prompt(
        &format!("Enter the total trip budget (e.g., 50000.00): {}", symbol),
        Some(Money::zero()),
        None,
    )?;

    match state.set_budget(budget) {
        Ok(()) => console.say(format!(
            "Trip budget set to {}.",
            budget.format_with_symbol(symbol)
        )),
        Err(e) if e.is_rejected_edit() => console.say(e),
        Err(e) => Err(e),
    }
}

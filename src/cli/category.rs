//! Manage Categories operation
//!
//! Categories can only be added; existing ones are never renamed or removed.

use std::io::{BufRead, Write};

use crate::error::PlannerResult;
use crate::input::Console;
use crate::models::TripState;

/// Show the category sub-menu and add a category if asked to
pub fn manage_categories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut TripState,
) -> PlannerResult<()> {
    console.blank()?;
    console.say("--- Manage Categories ---")?;
    console.say("1. Add New Category")?;

    let choice: i64 = console.prompt(
        "Enter your choice (1 to Add, or 0 to cancel): ",
        Some(0),
        Some(1),
    )?;

    if choice == 0 {
        return console.say("Category management cancelled.");
    }

    let name = console.prompt_text("Enter the name of the new category (e.g., 'Souvenirs'): ")?;

    match state.expenses.add_category(&name) {
        Ok(added) => console.say(format!("Category '{}' added successfully.", added)),
        Err(e) if e.is_rejected_edit() => console.say(e),
        Err(e) => Err(e),
    }
}

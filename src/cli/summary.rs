//! View Summary operation

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::input::Console;
use crate::models::TripState;
use crate::reports::TripSummary;

/// Print the trip summary report
pub fn show_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &TripState,
    settings: &Settings,
) -> PlannerResult<()> {
    let summary = TripSummary::generate(state);
    console.blank()?;
    console.say(summary.format_terminal(&settings.currency_symbol))
}

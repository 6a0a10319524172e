use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use trip_planner::cli::TripPlanner;
use trip_planner::config::{PlannerPaths, Settings};
use trip_planner::input::Console;
use trip_planner::storage::ExpenseStore;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let paths = PlannerPaths::new();
    let settings = Settings::from_env();
    let store = ExpenseStore::new(paths.data_file());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    TripPlanner::new(console, store, settings)
        .run()
        .context("planner session failed")?;

    Ok(())
}

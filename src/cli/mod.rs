//! Interactive menu
//!
//! `TripPlanner` owns the session: it loads the trip on start, runs the main
//! menu until the user exits (or stdin closes), and saves on the way out.

pub mod budget;
pub mod category;
pub mod expense;
pub mod summary;

pub use budget::set_budget;
pub use category::manage_categories;
pub use expense::add_expense;
pub use summary::show_summary;

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::input::Console;
use crate::models::TripState;
use crate::storage::{ExpenseStore, LoadOutcome, LoadedTrip};

/// Menu controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    /// Terminal; state has been persisted
    Exiting,
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewSummary,
    SetBudget,
    ManageCategories,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewSummary,
        MenuChoice::SetBudget,
        MenuChoice::ManageCategories,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this entry
    pub fn number(self) -> i64 {
        match self {
            MenuChoice::AddExpense => 1,
            MenuChoice::ViewSummary => 2,
            MenuChoice::SetBudget => 3,
            MenuChoice::ManageCategories => 4,
            MenuChoice::Exit => 5,
        }
    }

    /// Highest number on the menu
    pub const fn last_number() -> i64 {
        Self::ALL.len() as i64
    }

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::AddExpense => "Add New Expense",
            MenuChoice::ViewSummary => "View Expense Summary",
            MenuChoice::SetBudget => "Set Trip Budget",
            MenuChoice::ManageCategories => "Manage Categories",
            MenuChoice::Exit => "Exit Planner",
        };
        write!(f, "{}", label)
    }
}

/// The interactive planner session
pub struct TripPlanner<R, W> {
    console: Console<R, W>,
    store: ExpenseStore,
    settings: Settings,
    state: TripState,
}

impl<R: BufRead, W: Write> TripPlanner<R, W> {
    /// Create a planner; nothing is loaded until `run` or `load`
    pub fn new(console: Console<R, W>, store: ExpenseStore, settings: Settings) -> Self {
        Self {
            console,
            store,
            settings,
            state: TripState::fresh(),
        }
    }

    /// Current trip state
    pub fn state(&self) -> &TripState {
        &self.state
    }

    /// Run the whole session: welcome, load, menu loop
    pub fn run(&mut self) -> PlannerResult<()> {
        self.console
            .say("Welcome to the Simple Travel Expense Planner!")?;
        self.load()?;

        let mut menu = MenuState::Running;
        while menu == MenuState::Running {
            menu = self.step()?;
        }
        Ok(())
    }

    /// Replace the session state with whatever the store holds
    pub fn load(&mut self) -> PlannerResult<()> {
        let LoadedTrip { state, outcome } = self.store.load();
        self.state = state;

        let path = self.store.path().display().to_string();
        match outcome {
            LoadOutcome::Fresh => self.console.say(format!(
                "No existing data file found at {}. Starting fresh.",
                path
            )),
            LoadOutcome::Loaded { categories } => {
                self.console.say(format!(
                    "Data loaded successfully from {}. Budget: {}",
                    path,
                    self.state
                        .budget
                        .format_with_symbol(&self.settings.currency_symbol)
                ))?;
                self.console
                    .say(format!("Loaded {} expense categories.", categories))
            }
            LoadOutcome::Recovered { reason } => self.console.say(format!(
                "Warning: Could not read or decode existing data file. Starting fresh. ({})",
                reason
            )),
        }
    }

    /// Show the main menu once and carry out the chosen operation
    pub fn step(&mut self) -> PlannerResult<MenuState> {
        self.console.blank()?;
        self.console.say("--- Main Menu ---")?;
        for choice in MenuChoice::ALL {
            self.console.say(format!("{}. {}", choice.number(), choice))?;
        }

        let last = MenuChoice::last_number();
        let prompt = format!("Enter your choice (1-{}): ", last);
        let choice = match self.console.prompt::<i64>(&prompt, Some(1), Some(last)) {
            // The prompt bounds match the menu; Exit keeps the save path if they ever drift
            Ok(number) => MenuChoice::from_number(number).unwrap_or(MenuChoice::Exit),
            Err(e) if e.is_end_of_input() => {
                self.console.say("Input stream unavailable. Shutting down.")?;
                MenuChoice::Exit
            }
            Err(e) => return Err(e),
        };

        match self.dispatch(choice) {
            Err(e) if e.is_end_of_input() => {
                debug!(operation = %choice, "operation aborted, input closed");
                self.console
                    .say("Input stream unavailable. Operation cancelled.")?;
                Ok(MenuState::Running)
            }
            other => other,
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> PlannerResult<MenuState> {
        match choice {
            MenuChoice::AddExpense => {
                add_expense(&mut self.console, &mut self.state, &self.settings)?
            }
            MenuChoice::ViewSummary => show_summary(&mut self.console, &self.state, &self.settings)?,
            MenuChoice::SetBudget => set_budget(&mut self.console, &mut self.state, &self.settings)?,
            MenuChoice::ManageCategories => manage_categories(&mut self.console, &mut self.state)?,
            MenuChoice::Exit => {
                self.save()?;
                self.console.blank()?;
                self.console.say("Thank you for using the planner!")?;
                return Ok(MenuState::Exiting);
            }
        }
        Ok(MenuState::Running)
    }

    /// Persist the session state, reporting the outcome to the user
    ///
    /// A failed write is reported, not returned; the in-memory state stays.
    pub fn save(&mut self) -> PlannerResult<()> {
        let path = self.store.path().display().to_string();
        match self.store.save(&self.state) {
            Ok(()) => self
                .console
                .say(format!("All current data saved successfully to {}.", path)),
            Err(e) => self.console.say(format!(
                "Error: Could not save data to file. Changes will be lost. ({})",
                e
            )),
        }
    }

    /// Tear down the session, handing back the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

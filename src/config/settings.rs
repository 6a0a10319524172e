//! User settings for the trip planner
//!
//! Display preferences, resolved from the environment at startup.

/// Environment variable overriding the currency symbol
pub const CURRENCY_ENV: &str = "TRIP_PLANNER_CURRENCY";

fn default_currency() -> String {
    "₹".to_string()
}

/// User settings for the trip planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Symbol printed in front of every amount
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_symbol = lookup(CURRENCY_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_currency);

        Self { currency_symbol }
    }
}

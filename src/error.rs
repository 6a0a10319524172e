//! Custom error types for the trip planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for trip planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The data file exists but could not be read or decoded
    #[error("Could not read or decode data file: {0}")]
    StorageUnreadable(String),

    /// The data file could not be written
    #[error("Could not save data: {0}")]
    StorageWrite(String),

    /// A category with this name is already in the ledger
    #[error("Category '{0}' already exists.")]
    DuplicateCategory(String),

    /// A category name was blank after trimming
    #[error("Category name cannot be empty.")]
    EmptyName,

    /// The named category is not in the ledger
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Amounts and budgets never go below zero
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Money),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// stdin was closed or could not be read
    #[error("Input stream unavailable")]
    InputStreamUnavailable,
}

impl PlannerError {
    /// Check if this error means the input stream has gone away
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::InputStreamUnavailable)
    }

    /// Check if this is a ledger rule violation the user can correct
    pub fn is_rejected_edit(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCategory(_)
                | Self::EmptyName
                | Self::CategoryNotFound(_)
                | Self::NegativeAmount(_)
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for trip planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::DuplicateCategory("Souvenirs".into());
        assert_eq!(err.to_string(), "Category 'Souvenirs' already exists.");
        assert_eq!(
            PlannerError::EmptyName.to_string(),
            "Category name cannot be empty."
        );
    }

    #[test]
    fn test_negative_amount_display() {
        let err = PlannerError::NegativeAmount(Money::from_cents(-1050));
        assert_eq!(err.to_string(), "Amount cannot be negative: -10.50");
        assert!(err.is_rejected_edit());
    }

    #[test]
    fn test_end_of_input() {
        assert!(PlannerError::InputStreamUnavailable.is_end_of_input());
        assert!(!PlannerError::EmptyName.is_end_of_input());
        assert!(!PlannerError::InputStreamUnavailable.is_rejected_edit());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: PlannerError = io_err.into();
        assert!(matches!(planner_err, PlannerError::Io(_)));
    }
}

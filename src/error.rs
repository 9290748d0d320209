//! Custom error types for spese
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every error kind maps to a distinct
//! process exit code so scripts can tell failures apart.

use thiserror::Error;

/// The main error type for spese operations
#[derive(Error, Debug)]
pub enum SpeseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (bad month, bad amount)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Expense not found by id
    #[error("Could not find expense with id: {0}")]
    NotFound(u64),

    /// Expense names must be unique
    #[error("Expense name should be unique: {0}")]
    DuplicateName(String),

    /// A budget entry would be driven below zero
    #[error("Budget exceeded for {period}: remaining {remaining}, needed {needed}")]
    BudgetExceeded {
        period: String,
        remaining: String,
        needed: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpeseError {
    /// Process exit code for this error kind.
    ///
    /// Storage, I/O, JSON and config failures share the generic code 1;
    /// the logical failures each get their own.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Storage(_) => 1,
            Self::Validation(_) => 2,
            Self::NotFound(_) => 3,
            Self::DuplicateName(_) => 4,
            Self::BudgetExceeded { .. } => 5,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<std::io::Error> for SpeseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpeseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spese operations
pub type SpeseResult<T> = Result<T, SpeseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpeseError::DuplicateName("coffee".into());
        assert_eq!(err.to_string(), "Expense name should be unique: coffee");
    }

    #[test]
    fn test_not_found_error() {
        let err = SpeseError::NotFound(42);
        assert_eq!(err.to_string(), "Could not find expense with id: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_budget_exceeded_display() {
        let err = SpeseError::BudgetExceeded {
            period: "year".into(),
            remaining: "$60.00".into(),
            needed: "$70.00".into(),
        };
        assert_eq!(
            err.to_string(),
            "Budget exceeded for year: remaining $60.00, needed $70.00"
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            SpeseError::Storage("x".into()),
            SpeseError::Validation("x".into()),
            SpeseError::NotFound(1),
            SpeseError::DuplicateName("x".into()),
            SpeseError::BudgetExceeded {
                period: "1".into(),
                remaining: "$0.00".into(),
                needed: "$1.00".into(),
            },
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpeseError = io_err.into();
        assert!(matches!(err, SpeseError::Io(_)));
    }
}

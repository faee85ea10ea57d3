use thiserror::Error;

/// Errors raised while reading and checking the input numbers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one number is required")]
    EmptyInput,
    #[error("Not a number: {0}")]
    InvalidNumber(String),
    #[error("Number must be finite, got {0}")]
    NonFiniteNumber(f64),
    #[error("Number must not be negative, got {0}")]
    NegativeNumber(f64),
    #[error("Expected {expected} numbers, got {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("Failed to read input: {0}")]
    Io(String),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by a value too close to zero")]
    DivisionUndefined,
    #[error("Unknown operator: {0}")]
    UnknownOperator(char),
    #[error("Number must be finite, got {0}")]
    NonFiniteNumber(f64),
}

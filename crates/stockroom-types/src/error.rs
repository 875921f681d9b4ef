use thiserror::Error;

/// Errors produced while building a record from raw text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid cost {0:?}: expected a decimal number")]
    InvalidCost(String),

    #[error("invalid quantity {0:?}: expected a whole number")]
    InvalidQuantity(String),

    #[error("line is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("wrong field count: expected {expected}, got {actual}")]
    FieldCount { expected: usize, actual: usize },
}

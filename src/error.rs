use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while assembling or computing a receipt.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReciboError {
    /// A line was submitted with a quantity of zero.
    #[error("line {index}: quantity must be at least 1")]
    InvalidQuantity { index: usize },

    /// A line was submitted with a negative unit price.
    #[error("line {index}: unit price must not be negative, got {price}")]
    InvalidPrice { index: usize, price: Decimal },

    /// A tax category code outside the known set.
    #[error("unknown tax category code '{0}'")]
    UnknownTaxCategory(String),

    /// Receipt exceeds the line count limit.
    #[error("receipt cannot have more than {limit} lines, got {count}")]
    TooManyLines { count: usize, limit: usize },
}

/// A single arithmetic inconsistency found in a finalized receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the inconsistent field (e.g. "totals.post_tax").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

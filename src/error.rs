//! Error types for the formatting helpers.
//!
//! Most helpers are total and never fail. The ones that parse user input
//! expose a strict variant returning [`FormatError`] next to a lenient
//! variant that degrades to empty text.

/// Errors produced by the parsing-dependent formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Unrecognized date: {0}")]
    Parse(String),

    #[error("Invalid date format pattern: {0}")]
    InvalidFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used across `utils`.
pub type FormatResult<T> = Result<T, FormatError>;

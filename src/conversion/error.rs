//! Conversion error types

use thiserror::Error;

/// Why an input string could not be converted
///
/// The Display strings are what callers show to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid number")]
    InvalidNumber,

    #[error("invalid unit")]
    InvalidUnit,

    #[error("invalid number and unit")]
    InvalidNumberAndUnit,
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

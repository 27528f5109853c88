//! Input parsing
//!
//! Splits strings like "2.5kg" or "1/5gal" into a number and a unit.
//! The number is everything before the first letter, the unit is the rest.

use super::error::{ConversionError, ConversionResult};
use super::units::Unit;

/// Number and unit parsed independently from one input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInput {
    pub number: ConversionResult<f64>,
    pub unit: ConversionResult<Unit>,
}

/// Parse both halves of an input string
pub fn parse_input(input: &str) -> ParsedInput {
    ParsedInput {
        number: get_num(input),
        unit: get_unit(input),
    }
}

/// Split input into (numeric prefix, unit token), both trimmed
fn split_input(input: &str) -> (&str, &str) {
    let trimmed = input.trim();
    let boundary = trimmed
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    (trimmed[..boundary].trim(), trimmed[boundary..].trim())
}

/// Parse the numeric prefix of an input string
///
/// Accepts `digits[.digits]`, optionally followed by one `/` and a second
/// such number. A missing number means 1. Division by zero is not an
/// error: it yields `inf` or `NaN`.
///
/// Examples:
/// - "2kg" -> 2.0
/// - "1/5kg" -> 0.2
/// - "lbs" -> 1.0
/// - "2/2/7kg" -> InvalidNumber
pub fn get_num(input: &str) -> ConversionResult<f64> {
    let (number, _) = split_input(input);

    if number.is_empty() {
        return Ok(1.0);
    }

    let value = parse_fraction(number);
    if value.is_err() {
        tracing::warn!("Invalid number in input '{}'", input);
    }
    value
}

/// Parse `DECIMAL` or `DECIMAL/DECIMAL`
fn parse_fraction(number: &str) -> ConversionResult<f64> {
    let parts: Vec<&str> = number.split('/').collect();
    match parts.as_slice() {
        [whole] => parse_decimal(whole),
        [numerator, denominator] => Ok(parse_decimal(numerator)? / parse_decimal(denominator)?),
        _ => {
            tracing::debug!("Rejecting '{}': more than one fraction separator", number);
            Err(ConversionError::InvalidNumber)
        }
    }
}

/// Parse `digits[.digits]` with no sign or exponent
fn parse_decimal(s: &str) -> ConversionResult<f64> {
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let well_formed = match s.split_once('.') {
        Some((int_part, frac_part)) => is_digits(int_part) && is_digits(frac_part),
        None => is_digits(s),
    };

    if !well_formed {
        tracing::debug!("Rejecting '{}': not a decimal literal", s);
        return Err(ConversionError::InvalidNumber);
    }

    s.parse::<f64>().map_err(|_| ConversionError::InvalidNumber)
}

/// Parse the unit token that follows the numeric prefix
///
/// Matching is case-insensitive; liter comes back as `Unit::L` whether the
/// input said "l" or "L".
pub fn get_unit(input: &str) -> ConversionResult<Unit> {
    let (_, token) = split_input(input);

    match Unit::from_token(token) {
        Some(unit) => Ok(unit),
        None => {
            tracing::warn!("Invalid unit '{}' in input '{}'", token, input);
            Err(ConversionError::InvalidUnit)
        }
    }
}

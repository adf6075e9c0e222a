//! Argument validation helpers
//!
//! Each helper either hands the validated value back or fails with a
//! [`FleetError`], so checks can be chained with `?` inside constructors
//! and setters.

use super::errors::{FleetError, FleetResult};

/// Fails if `value` is absent.
pub fn require_non_null<T>(value: Option<T>, field: &str) -> FleetResult<T> {
    value.ok_or_else(|| FleetError::MissingValue(field.to_string()))
}

/// Fails if `value` is empty or whitespace only.
pub fn require_non_blank<'a>(value: &'a str, field: &str) -> FleetResult<&'a str> {
    if value.trim().is_empty() {
        return Err(FleetError::InvalidInput(format!("{field} is blank")));
    }
    Ok(value)
}

/// Fails if `value` is blank or longer than `max` characters.
pub fn require_max_length<'a>(value: &'a str, max: usize, field: &str) -> FleetResult<&'a str> {
    let value = require_non_blank(value, field)?;
    if value.chars().count() > max {
        return Err(FleetError::InvalidInput(format!(
            "{field} is longer than {max} characters"
        )));
    }
    Ok(value)
}

/// Fails with the lazily built message if `expression` is false.
pub fn require_true(expression: bool, message: impl FnOnce() -> String) -> FleetResult<()> {
    if expression {
        Ok(())
    } else {
        Err(FleetError::Rejected(message()))
    }
}

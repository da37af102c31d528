pub mod time_utils;

pub use time_utils::{day_window, parse_iso_datetime, ClockTime};

/// Fails when a required text field is blank.
pub(crate) fn require_text(value: &str, field: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::errors::ValidationError::MissingField(field.to_string()).into());
    }
    Ok(())
}

/// Fails when a money or quantity amount is negative.
pub(crate) fn require_non_negative(value: rust_decimal::Decimal, field: &str) -> crate::Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(crate::Error::invalid_input(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

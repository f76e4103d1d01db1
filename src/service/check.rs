use log::error;

use crate::errors::ApiError;

/// Character-class field policies. Statements are built with bind
/// parameters, so these are defense-in-depth, not the injection barrier;
/// the rejection behavior for malformed input stays the same.

/// Letters (any script), ASCII digits and `-`. Used for logins and other
/// identifier-like fields.
pub fn only_letters_digits_dash(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Printable characters only. Used for free-text fields.
pub fn only_printed_chars(value: &str) -> bool {
    value.chars().all(|c| !c.is_control())
}

/// Applies a policy to a field, logging the field name on rejection. The
/// whole request aborts before any SQL runs.
pub fn require(
    value: &str,
    policy: fn(&str) -> bool,
    field: &'static str,
) -> Result<(), ApiError> {
    if policy(value) {
        Ok(())
    } else {
        error!("rejected value in the {} field", field);
        Err(ApiError::InvalidField(field))
    }
}

//! Name rule shared by both user styles.
//!
//! A name is valid when it is strictly longer than [`MIN_NAME_LENGTH`]
//! characters and made only of alphabetic characters. Length is checked
//! first, so a short name with digits reports the length problem.

use sample_core::{DomainError, DomainResult};

/// Names must be strictly longer than this many characters.
pub const MIN_NAME_LENGTH: usize = 3;

/// Validate `value` as the name held in `field`.
///
/// Length counts `char`s, so "たろう" is three characters, not nine bytes.
pub fn validate_name(field: &str, value: &str) -> DomainResult<()> {
    if value.chars().count() <= MIN_NAME_LENGTH {
        tracing::debug!(field, value, "name rejected: too short");
        return Err(DomainError::validation(format!(
            "{field} must be longer than {MIN_NAME_LENGTH} characters: {value}"
        )));
    }

    if !value.chars().all(char::is_alphabetic) {
        tracing::debug!(field, value, "name rejected: non-alphabetic content");
        return Err(DomainError::validation(format!(
            "{field} must contain only alphabetic characters: {value}"
        )));
    }

    Ok(())
}

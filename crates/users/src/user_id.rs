//! Identity token of the `User` entity.

use sample_core::{DomainError, DomainResult, ValueObject};

/// Exact length (in characters) of a [`UserId`] prefix.
pub const PREFIX_LENGTH: usize = 3;

/// Largest number a [`UserId`] may carry (twelve decimal digits).
pub const MAX_NUMBER: u64 = 999_999_999_999;

/// User identifier: a three-character prefix plus a number.
///
/// A value object itself: immutable and compared on both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    prefix: String,
    number: u64,
}

impl UserId {
    pub fn new(prefix: impl Into<String>, number: u64) -> DomainResult<Self> {
        let prefix = prefix.into();

        if prefix.chars().count() != PREFIX_LENGTH {
            tracing::debug!(%prefix, "user id rejected: prefix length");
            return Err(DomainError::validation(format!(
                "invalid prefix length: {prefix}"
            )));
        }
        if number > MAX_NUMBER {
            tracing::debug!(number, "user id rejected: number length");
            return Err(DomainError::validation(format!(
                "invalid number length: {number}"
            )));
        }

        Ok(Self { prefix, number })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl ValueObject for UserId {}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

//! `User` as a value object.
//!
//! Validated once at construction, immutable afterwards, and compared on
//! every field.

use sample_core::{DomainResult, ValueObject};

use crate::name::validate_name;

/// A person's name pair.
///
/// # Invariants
/// - Both names are alphabetic and longer than [`crate::MIN_NAME_LENGTH`].
/// - Fields are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    first_name: String,
    last_name: String,
}

impl User {
    /// Validate both names and build the value.
    ///
    /// `first_name` is checked before `last_name`; the error names the first
    /// field that fails and the value it rejected.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> DomainResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_name("first_name", &first_name)?;
        validate_name("last_name", &last_name)?;

        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Surname-first rendering, e.g. `"yamada taro"`.
    pub fn full_name_japanese_style(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

impl ValueObject for User {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn users_with_same_names_are_equal() {
        let user = User::new("hoge", "fuga").unwrap();
        let same = User::new("hoge", "fuga").unwrap();
        let other = User::new("tste", "name").unwrap();

        assert_eq!(user, same);
        assert_ne!(user, other);
    }

    #[test]
    fn differing_last_name_breaks_equality() {
        let user = User::new("hoge", "fuga").unwrap();
        let other = User::new("hoge", "piyo").unwrap();
        assert_ne!(user, other);
    }

    #[test]
    fn rejects_first_name_at_minimum_length() {
        let err = User::new("tst", "tset").unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: first_name must be longer than 3 characters: tst"
        );
        assert_eq!(err.message(), "first_name must be longer than 3 characters: tst");
    }

    #[test]
    fn rejects_short_last_name() {
        let err = User::new("hoge", "abc").unwrap_err();
        assert_eq!(err.message(), "last_name must be longer than 3 characters: abc");
    }

    #[test]
    fn rejects_non_alphabetic_last_name() {
        let err = User::new("hoge", "fuga2").unwrap_err();
        assert_eq!(
            err.message(),
            "last_name must contain only alphabetic characters: fuga2"
        );
    }

    #[test]
    fn first_name_is_reported_before_last_name() {
        let err = User::new("ab", "cd").unwrap_err();
        assert!(err.message().starts_with("first_name"));
    }

    #[test]
    fn full_name_puts_surname_first() {
        let user = User::new("taro", "yamada").unwrap();
        assert_eq!(user.full_name_japanese_style(), "yamada taro");
        // Pure: repeated calls agree and leave the value unchanged.
        assert_eq!(user.full_name_japanese_style(), "yamada taro");
        assert_eq!(user, User::new("taro", "yamada").unwrap());
    }

    #[test]
    fn accessors_return_constructed_fields() {
        let user = User::new("taro", "yamada").unwrap();
        assert_eq!(user.first_name(), "taro");
        assert_eq!(user.last_name(), "yamada");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: valid names always construct, and equal inputs give equal values.
        #[test]
        fn construction_succeeds_and_equals_copy(
            first in "[A-Za-z]{4,20}",
            last in "[A-Za-z]{4,20}"
        ) {
            let user = User::new(first.clone(), last.clone()).unwrap();
            let copy = User::new(first, last).unwrap();
            prop_assert_eq!(user, copy);
        }

        /// Property: rebuilding from the accessors yields an equal value.
        #[test]
        fn reconstruction_from_fields_is_idempotent(
            first in "[A-Za-z]{4,20}",
            last in "[A-Za-z]{4,20}"
        ) {
            let user = User::new(first, last).unwrap();
            let rebuilt = User::new(user.first_name(), user.last_name()).unwrap();
            prop_assert_eq!(&user, &rebuilt);
            prop_assert_eq!(
                user.full_name_japanese_style(),
                format!("{} {}", rebuilt.last_name(), rebuilt.first_name())
            );
        }
    }
}

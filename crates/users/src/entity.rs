//! `User` as an entity.
//!
//! Mutable, and compared by [`UserId`] only: two users sharing an id are the
//! same user even after their names drift apart, and two users with identical
//! names but different ids stay distinct.

use core::hash::{Hash, Hasher};

use sample_core::{DomainResult, Entity};

use crate::name::validate_name;

pub use crate::user_id::{MAX_NUMBER, PREFIX_LENGTH, UserId};

/// Registered user.
///
/// # Invariants
/// - Both names are alphabetic and longer than [`crate::MIN_NAME_LENGTH`],
///   at construction and after every rename.
/// - The identity never changes.
#[derive(Debug, Clone)]
pub struct User {
    user_id: UserId,
    first_name: String,
    last_name: String,
}

impl User {
    /// Validate both names and build the entity around `user_id`.
    pub fn new(
        user_id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_name("first_name", &first_name)?;
        validate_name("last_name", &last_name)?;

        Ok(Self {
            user_id,
            first_name,
            last_name,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Replace the first name. On rejection the entity is left untouched.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> DomainResult<()> {
        let first_name = first_name.into();
        validate_name("first_name", &first_name)?;
        tracing::trace!(user_id = %self.user_id, %first_name, "first name changed");
        self.first_name = first_name;
        Ok(())
    }

    /// Replace the last name. On rejection the entity is left untouched.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> DomainResult<()> {
        let last_name = last_name.into();
        validate_name("last_name", &last_name)?;
        tracing::trace!(user_id = %self.user_id, %last_name, "last name changed");
        self.last_name = last_name;
        Ok(())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.user_id
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
    }
}

//! Entity trait: identity + continuity across state changes.
//!
//! Two entities are the same entity when their identifiers are equal, no
//! matter how their other attributes have drifted. Implementors should make
//! `PartialEq`/`Hash` agree with [`Entity::id`].

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity (identity comparison).
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

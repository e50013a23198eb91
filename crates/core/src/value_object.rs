//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal and
//! interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity, compared on every attribute
/// - **Entity**: compared on its identifier only (see [`crate::Entity`])
///
/// A person's name pair is a value object: `("taro", "yamada")` equals any
/// other `("taro", "yamada")`. A registered user is an entity: two users named
/// `("taro", "yamada")` with different ids are different users.
///
/// ## Immutability
///
/// Value objects are validated once, at construction, and never change after.
/// To "modify" one, build a new one. Keep fields private and expose read-only
/// accessors so the invariant checked by the constructor holds for the
/// lifetime of the value.
///
/// ## Usage Pattern
///
/// ```
/// use sample_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Initials(char, char);
///
/// impl ValueObject for Initials {}
///
/// assert_eq!(Initials('t', 'y'), Initials('t', 'y'));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

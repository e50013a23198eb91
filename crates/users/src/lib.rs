//! `sample-users` — one `User` concept modeled two ways.
//!
//! - [`value_object::User`]: immutable name pair, equal when both names match.
//! - [`entity::User`]: mutable record, equal when its [`entity::UserId`] matches.
//!
//! Both share the same name rule ([`name::validate_name`]). The two styles
//! are alternatives and never exchange data.

pub mod entity;
pub mod name;
pub mod value_object;

mod user_id;

pub use name::MIN_NAME_LENGTH;

//! # json-value
//!
//! A dynamically-typed JSON value container.
//!
//! [`JsonValue`] is a closed sum type over the seven JSON kinds: object,
//! array, string, integer, float, boolean, and null. Each variant owns its
//! payload outright, so dropping a value releases its whole subtree,
//! `clone` produces an independent deep copy, and [`JsonValue::take`]
//! moves the payload out leaving `Null` behind.
//!
//! Payload access goes through the typed accessors ([`JsonValue::get_object`]
//! and friends) and the structural mutators ([`JsonValue::insert`],
//! [`JsonValue::push`]); every one of them fails with
//! [`JsonValueError::TypeMismatch`] when the value holds a different kind,
//! leaving the value untouched.
//!
//! Parsing and serialization are deliberately out of scope. A parser builds
//! values through the constructors and mutators here; a serializer walks a
//! value via [`Kind`] and the typed accessors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod value;

// Re-export main types
pub use error::{JsonValueError, Result};
pub use value::{JsonValue, Kind, Map};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}

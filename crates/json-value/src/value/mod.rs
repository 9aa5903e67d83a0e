//! Value representation for JSON documents

mod display;
mod impls;

use indexmap::IndexMap;

/// An insertion-ordered mapping from member names to values.
///
/// Keys are unique per object. Insertion order is preserved for
/// deterministic iteration, though it carries no semantic weight.
pub type Map = IndexMap<String, JsonValue>;

/// The discriminant identifying which JSON kind a value currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Mapping from string keys to values
    Object,
    /// Ordered sequence of values
    Array,
    /// Owned text
    String,
    /// Signed integer scalar
    Integer,
    /// Floating-point scalar
    Float,
    /// `true` or `false`
    Bool,
    /// The absence of a value
    Null,
}

/// A dynamically-typed JSON value.
///
/// Exactly one variant is live at a time and owns its payload outright:
/// values nested inside an `Object` or `Array` belong solely to that
/// container, dropping a value drops its entire subtree, and `clone`
/// produces an independent deep copy. `Null` is the default state and the
/// state left behind by [`JsonValue::take`] and [`JsonValue::nullify`].
#[derive(Clone, PartialEq, Default)]
pub enum JsonValue {
    /// Mapping from unique string keys to owned values
    Object(Map),
    /// Ordered sequence of owned values
    Array(Vec<JsonValue>),
    /// Owned text buffer
    String(String),
    /// Signed 64-bit integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Boolean scalar
    Bool(bool),
    /// No payload
    #[default]
    Null,
}

impl JsonValue {
    /// Report which kind is currently live.
    pub fn kind(&self) -> Kind {
        match self {
            JsonValue::Object(_) => Kind::Object,
            JsonValue::Array(_) => Kind::Array,
            JsonValue::String(_) => Kind::String,
            JsonValue::Integer(_) => Kind::Integer,
            JsonValue::Float(_) => Kind::Float,
            JsonValue::Bool(_) => Kind::Bool,
            JsonValue::Null => Kind::Null,
        }
    }

    /// Create an empty value of the requested kind.
    ///
    /// Containers start empty, strings start blank, numeric scalars start
    /// at zero, booleans at `false`, and `Kind::Null` holds nothing.
    pub fn empty(kind: Kind) -> Self {
        match kind {
            Kind::Object => JsonValue::Object(Map::new()),
            Kind::Array => JsonValue::Array(Vec::new()),
            Kind::String => JsonValue::String(String::new()),
            Kind::Integer => JsonValue::Integer(0),
            Kind::Float => JsonValue::Float(0.0),
            Kind::Bool => JsonValue::Bool(false),
            Kind::Null => JsonValue::Null,
        }
    }

    /// Move the payload out, leaving `Null` behind.
    ///
    /// O(1): ownership of the payload transfers to the returned value.
    pub fn take(&mut self) -> JsonValue {
        std::mem::take(self)
    }

    /// Drop the payload and become `Null`.
    ///
    /// Idempotent: nullifying an already-null value is a no-op.
    pub fn nullify(&mut self) {
        *self = JsonValue::Null;
    }

    /// Replace this value with an empty value of `kind`.
    ///
    /// The previous payload is released; the result is exactly
    /// [`JsonValue::empty`] of the requested kind.
    pub fn retag(&mut self, kind: Kind) {
        *self = JsonValue::empty(kind);
    }
}

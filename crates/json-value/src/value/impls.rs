//! Value trait implementations: constructors, predicates, typed accessors,
//! structural mutators, and From conversions

use crate::error::{JsonValueError, Result};

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl JsonValue {
    /// Create an empty object value
    pub fn object() -> Self {
        JsonValue::Object(Map::new())
    }

    /// Create an empty array value
    pub fn array() -> Self {
        JsonValue::Array(Vec::new())
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        JsonValue::String(s.into())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Kind Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if the value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Check if the value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Check if the value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Check if the value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, JsonValue::Integer(_))
    }

    /// Check if the value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, JsonValue::Float(_))
    }

    /// Check if the value is numeric (integer or float)
    pub fn is_number(&self) -> bool {
        self.is_int() || self.is_float()
    }

    /// Check if the value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe read-only access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract float value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Typed Accessors (fail with TypeMismatch on the wrong kind)
    // ═══════════════════════════════════════════════════════════════════

    fn mismatch(&self, expected: Kind) -> JsonValueError {
        JsonValueError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Borrow the object payload
    pub fn get_object(&self) -> Result<&Map> {
        match self {
            JsonValue::Object(map) => Ok(map),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Mutably borrow the object payload
    pub fn get_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            JsonValue::Object(map) => Ok(map),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Borrow the array payload
    pub fn get_array(&self) -> Result<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Ok(items),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    /// Mutably borrow the array payload
    pub fn get_array_mut(&mut self) -> Result<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Ok(items),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    /// Borrow the string payload
    pub fn get_string(&self) -> Result<&String> {
        match self {
            JsonValue::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    /// Mutably borrow the string payload
    pub fn get_string_mut(&mut self) -> Result<&mut String> {
        match self {
            JsonValue::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    /// Read the integer payload
    pub fn get_int(&self) -> Result<i64> {
        match self {
            JsonValue::Integer(n) => Ok(*n),
            other => Err(other.mismatch(Kind::Integer)),
        }
    }

    /// Mutably borrow the integer payload
    pub fn get_int_mut(&mut self) -> Result<&mut i64> {
        match self {
            JsonValue::Integer(n) => Ok(n),
            other => Err(other.mismatch(Kind::Integer)),
        }
    }

    /// Read the float payload
    pub fn get_float(&self) -> Result<f64> {
        match self {
            JsonValue::Float(n) => Ok(*n),
            other => Err(other.mismatch(Kind::Float)),
        }
    }

    /// Mutably borrow the float payload
    pub fn get_float_mut(&mut self) -> Result<&mut f64> {
        match self {
            JsonValue::Float(n) => Ok(n),
            other => Err(other.mismatch(Kind::Float)),
        }
    }

    /// Read the boolean payload
    pub fn get_bool(&self) -> Result<bool> {
        match self {
            JsonValue::Bool(b) => Ok(*b),
            other => Err(other.mismatch(Kind::Bool)),
        }
    }

    /// Mutably borrow the boolean payload
    pub fn get_bool_mut(&mut self) -> Result<&mut bool> {
        match self {
            JsonValue::Bool(b) => Ok(b),
            other => Err(other.mismatch(Kind::Bool)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Structural Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Insert a key-value entry, overwriting any existing entry for `key`.
    ///
    /// Valid only for objects; the value is taken by ownership. Returns
    /// the displaced value when `key` was already present. Fails with
    /// `TypeMismatch` on any other kind, leaving the value unchanged.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Result<Option<JsonValue>> {
        match self {
            JsonValue::Object(map) => Ok(map.insert(key.into(), value.into())),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Append an element, taking ownership of it.
    ///
    /// Valid only for arrays. Fails with `TypeMismatch` on any other
    /// kind, leaving the value unchanged.
    pub fn push(&mut self, value: impl Into<JsonValue>) -> Result<()> {
        match self {
            JsonValue::Array(items) => {
                items.push(value.into());
                Ok(())
            }
            other => Err(other.mismatch(Kind::Array)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i8> for JsonValue {
    fn from(n: i8) -> Self {
        JsonValue::Integer(n as i64)
    }
}

impl From<i16> for JsonValue {
    fn from(n: i16) -> Self {
        JsonValue::Integer(n as i64)
    }
}

impl From<i32> for JsonValue {
    fn from(n: i32) -> Self {
        JsonValue::Integer(n as i64)
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::Integer(n)
    }
}

impl From<u8> for JsonValue {
    fn from(n: u8) -> Self {
        JsonValue::Integer(n as i64)
    }
}

impl From<u16> for JsonValue {
    fn from(n: u16) -> Self {
        JsonValue::Integer(n as i64)
    }
}

impl From<u32> for JsonValue {
    fn from(n: u32) -> Self {
        JsonValue::Integer(n as i64)
    }
}

impl From<f32> for JsonValue {
    fn from(n: f32) -> Self {
        JsonValue::Float(n as f64)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Float(n)
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::string(s)
    }
}

impl From<Map> for JsonValue {
    fn from(map: Map) -> Self {
        JsonValue::Object(map)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => JsonValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Constructors
    #[test]
    fn test_object_constructor() {
        let v = JsonValue::object();
        assert!(v.is_object());
        assert!(v.get_object().unwrap().is_empty());
    }

    #[test]
    fn test_array_constructor() {
        let v = JsonValue::array();
        assert!(v.is_array());
        assert!(v.get_array().unwrap().is_empty());
    }

    #[test]
    fn test_string_constructor() {
        let v = JsonValue::string("hello");
        assert!(v.is_string());
        assert_eq!(v.as_str(), Some("hello"));
    }

    #[test]
    fn test_empty_per_kind() {
        assert_eq!(JsonValue::empty(Kind::Object), JsonValue::object());
        assert_eq!(JsonValue::empty(Kind::Array), JsonValue::array());
        assert_eq!(JsonValue::empty(Kind::String), JsonValue::string(""));
        assert_eq!(JsonValue::empty(Kind::Integer), JsonValue::Integer(0));
        assert_eq!(JsonValue::empty(Kind::Float), JsonValue::Float(0.0));
        assert_eq!(JsonValue::empty(Kind::Bool), JsonValue::Bool(false));
        assert_eq!(JsonValue::empty(Kind::Null), JsonValue::Null);
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(JsonValue::default(), JsonValue::Null);
    }

    // Kind reporting and predicates
    #[test]
    fn test_kind() {
        assert_eq!(JsonValue::object().kind(), Kind::Object);
        assert_eq!(JsonValue::array().kind(), Kind::Array);
        assert_eq!(JsonValue::string("s").kind(), Kind::String);
        assert_eq!(JsonValue::Integer(1).kind(), Kind::Integer);
        assert_eq!(JsonValue::Float(1.5).kind(), Kind::Float);
        assert_eq!(JsonValue::Bool(true).kind(), Kind::Bool);
        assert_eq!(JsonValue::Null.kind(), Kind::Null);
    }

    #[test]
    fn test_is_number() {
        assert!(JsonValue::Integer(1).is_number());
        assert!(JsonValue::Float(1.5).is_number());
        assert!(!JsonValue::string("1").is_number());
    }

    #[test]
    fn test_is_null() {
        assert!(JsonValue::Null.is_null());
        assert!(!JsonValue::Bool(false).is_null());
    }

    // Extractors
    #[test]
    fn test_as_bool() {
        assert_eq!(JsonValue::Bool(true).as_bool(), Some(true));
        assert_eq!(JsonValue::Integer(1).as_bool(), None);
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(JsonValue::Integer(42).as_i64(), Some(42));
        assert_eq!(JsonValue::Float(42.0).as_i64(), None);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(JsonValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(JsonValue::Integer(1).as_f64(), None);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(JsonValue::string("hi").as_str(), Some("hi"));
        assert_eq!(JsonValue::Null.as_str(), None);
    }

    // Typed accessors
    #[test]
    fn test_get_object_mismatch() {
        let v = JsonValue::Integer(5);
        assert_eq!(
            v.get_object(),
            Err(JsonValueError::TypeMismatch {
                expected: Kind::Object,
                actual: Kind::Integer,
            })
        );
    }

    #[test]
    fn test_get_array_mismatch_reports_kinds() {
        let v = JsonValue::string("not an array");
        let err = v.get_array().unwrap_err();
        let JsonValueError::TypeMismatch { expected, actual } = err;
        assert_eq!(expected, Kind::Array);
        assert_eq!(actual, Kind::String);
    }

    #[test]
    fn test_get_scalar_mut() {
        let mut v = JsonValue::Integer(1);
        *v.get_int_mut().unwrap() += 41;
        assert_eq!(v.get_int(), Ok(42));

        let mut v = JsonValue::Float(0.5);
        *v.get_float_mut().unwrap() *= 2.0;
        assert_eq!(v.get_float(), Ok(1.0));

        let mut v = JsonValue::Bool(false);
        *v.get_bool_mut().unwrap() = true;
        assert_eq!(v.get_bool(), Ok(true));
    }

    #[test]
    fn test_get_string_mut_grows_in_place() {
        let mut v = JsonValue::string("ab");
        v.get_string_mut().unwrap().push('c');
        assert_eq!(v.as_str(), Some("abc"));
    }

    #[test]
    fn test_null_rejects_every_accessor() {
        let v = JsonValue::Null;
        assert!(v.get_object().is_err());
        assert!(v.get_array().is_err());
        assert!(v.get_string().is_err());
        assert!(v.get_int().is_err());
        assert!(v.get_float().is_err());
        assert!(v.get_bool().is_err());
    }

    // Structural mutation
    #[test]
    fn test_insert_into_object() {
        let mut v = JsonValue::object();
        assert_eq!(v.insert("a", 1i64), Ok(None));
        let map = v.get_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&JsonValue::Integer(1)));
    }

    #[test]
    fn test_insert_overwrite_returns_displaced() {
        let mut v = JsonValue::object();
        v.insert("a", 1i64).unwrap();
        let displaced = v.insert("a", "replacement").unwrap();
        assert_eq!(displaced, Some(JsonValue::Integer(1)));
        assert_eq!(v.get_object().unwrap().len(), 1);
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let mut v = JsonValue::array();
        let err = v.insert("a", 1i64).unwrap_err();
        assert_eq!(
            err,
            JsonValueError::TypeMismatch {
                expected: Kind::Object,
                actual: Kind::Array,
            }
        );
    }

    #[test]
    fn test_push_into_array() {
        let mut v = JsonValue::array();
        v.push(1i64).unwrap();
        v.push("two").unwrap();
        let items = v.get_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], JsonValue::Integer(1));
        assert_eq!(items[1], JsonValue::string("two"));
    }

    #[test]
    fn test_push_rejects_non_array() {
        let mut v = JsonValue::Integer(5);
        let err = v.push(1i64).unwrap_err();
        assert_eq!(
            err,
            JsonValueError::TypeMismatch {
                expected: Kind::Array,
                actual: Kind::Integer,
            }
        );
        // Rejection leaves the value unchanged
        assert_eq!(v, JsonValue::Integer(5));
    }

    // From conversions
    #[test]
    fn test_from_integers() {
        assert_eq!(JsonValue::from(42i8), JsonValue::Integer(42));
        assert_eq!(JsonValue::from(42i32), JsonValue::Integer(42));
        assert_eq!(JsonValue::from(42i64), JsonValue::Integer(42));
        assert_eq!(JsonValue::from(42u32), JsonValue::Integer(42));
    }

    #[test]
    fn test_from_floats() {
        assert_eq!(JsonValue::from(1.5f64), JsonValue::Float(1.5));
        assert_eq!(JsonValue::from(2.5f32), JsonValue::Float(2.5));
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(JsonValue::from(true), JsonValue::Bool(true));
    }

    #[test]
    fn test_from_strings() {
        assert_eq!(JsonValue::from("hi"), JsonValue::string("hi"));
        assert_eq!(JsonValue::from(String::from("hi")), JsonValue::string("hi"));
    }

    #[test]
    fn test_from_vec() {
        let v: JsonValue = vec![1i64, 2, 3].into();
        assert_eq!(v.get_array().unwrap().len(), 3);
    }

    #[test]
    fn test_from_map() {
        let mut map = Map::new();
        map.insert("a".to_string(), JsonValue::Integer(1));
        let v: JsonValue = map.into();
        assert!(v.is_object());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(JsonValue::from(Some(1i64)), JsonValue::Integer(1));
        assert_eq!(JsonValue::from(None::<i64>), JsonValue::Null);
    }
}

//! Display and Debug implementations for Kind and JsonValue

use std::fmt;

use super::*;

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Null => "null",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Debug for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => write!(f, "Null"),
            JsonValue::Bool(b) => write!(f, "Bool({})", b),
            JsonValue::Integer(n) => write!(f, "Integer({})", n),
            JsonValue::Float(n) => write!(f, "Float({})", n),
            JsonValue::String(s) => write!(f, "String({:?})", s),

            JsonValue::Array(items) => {
                write!(f, "Array[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }

            JsonValue::Object(map) => {
                write!(f, "Object{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

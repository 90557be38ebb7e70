//! BACnet object model.
//!
//! Types shared between the request builder and the protocol engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric BACnet object type code.
///
/// Named types (`analogInput`, `binaryValue`, ...) are resolved to codes by
/// the injected [`crate::registry::ObjectRegistry`]; numeric tokens in a read
/// specification are used as codes directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ObjectType(pub u16);

impl ObjectType {
    /// The raw type code.
    pub fn code(self) -> u16 {
        self.0
    }
}

impl From<u16> for ObjectType {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Object identifier: type code plus instance number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId {
    /// Object type code.
    pub object_type: ObjectType,
    /// Instance number, unique per type on a device.
    pub instance: u32,
}

impl ObjectId {
    /// Create an object identifier.
    pub fn new(object_type: impl Into<ObjectType>, instance: u32) -> Self {
        Self {
            object_type: object_type.into(),
            instance,
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.object_type, self.instance)
    }
}

/// Application datatypes a property can decode to.
///
/// Returned by the registry's datatype lookup; the facade only checks that a
/// lookup succeeds, decoding itself happens inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Datatype {
    Boolean,
    Unsigned,
    Integer,
    Real,
    Double,
    CharacterString,
    Enumerated,
    BitString,
    Date,
    Time,
    ObjectIdentifier,
    /// Sequence of one element datatype, addressable by array index.
    Array(Box<Datatype>),
}

/// Decoded property value delivered to a caller.
///
/// The facade treats values as opaque: whatever the engine decoded is handed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Unsigned(u64),
    Integer(i64),
    Real(f64),
    Text(String),
    Enumerated(u32),
    /// Heterogeneous list, e.g. an object-list property.
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            Self::Unsigned(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Unsigned(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(*v),
            Self::Integer(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Unsigned(_) => "unsigned",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Enumerated(_) => "enumerated",
            Self::List(_) => "list",
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<u64> for PropertyValue {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Unsigned(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Enumerated(v) => write!(f, "{}", v),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

//! Structured read requests handed to the protocol engine.

use baclink_core::{DeviceAddress, ObjectId};
use serde::{Deserialize, Serialize};

/// Property-set selectors. They stand for whole groups of properties on an
/// object and therefore carry no single datatype to validate against.
pub const PROPERTY_SET_SELECTORS: [&str; 3] = ["all", "required", "optional"];

/// Reference to one property, optionally narrowed to one array element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReference {
    /// Property identifier, or one of the property-set selectors.
    pub property: String,
    /// Element selector for array-valued properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_index: Option<u32>,
}

impl PropertyReference {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            array_index: None,
        }
    }

    pub fn with_array_index(mut self, index: u32) -> Self {
        self.array_index = Some(index);
        self
    }

    /// Whether this reference names a property-set selector rather than a
    /// single property.
    pub fn is_selector(&self) -> bool {
        PROPERTY_SET_SELECTORS.contains(&self.property.as_str())
    }
}

/// Single-property read request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadPropertyRequest {
    pub destination: DeviceAddress,
    pub object: ObjectId,
    pub property: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_index: Option<u32>,
}

/// One object paired with the properties requested from it.
///
/// Invariant: `properties` is non-empty; the parser rejects empty groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadAccessSpec {
    pub object: ObjectId,
    pub properties: Vec<PropertyReference>,
}

/// Multi-object, multi-property read request.
///
/// Invariant: `specs` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadPropertyMultipleRequest {
    pub destination: DeviceAddress,
    pub specs: Vec<ReadAccessSpec>,
}

/// Request shapes the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadRequest {
    Property(ReadPropertyRequest),
    PropertyMultiple(ReadPropertyMultipleRequest),
}

impl ReadRequest {
    /// Destination the request is bound for.
    pub fn destination(&self) -> &DeviceAddress {
        match self {
            Self::Property(request) => &request.destination,
            Self::PropertyMultiple(request) => &request.destination,
        }
    }
}

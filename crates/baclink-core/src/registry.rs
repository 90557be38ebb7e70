//! Object/property type registry seam.

use crate::object::{Datatype, ObjectType};

/// Collaborator supplying object-type resolution and property datatypes.
///
/// Backed by the protocol stack's object database in production; request
/// construction only performs read-only lookups against it.
pub trait ObjectRegistry: Send + Sync {
    /// Resolve a named object type (`analogInput`) to its numeric code.
    fn resolve_object_type(&self, name: &str) -> Option<ObjectType>;

    /// Datatype of `property` on `object_type`, if the combination is known.
    fn property_datatype(&self, object_type: ObjectType, property: &str) -> Option<Datatype>;

    /// Whether `token` is a known property identifier, including the
    /// `all` / `required` / `optional` property-set selectors.
    fn is_property_identifier(&self, token: &str) -> bool;
}

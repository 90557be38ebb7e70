//! BacLink Core Crate
//!
//! Shared protocol object model and collaborator seams for the BacLink
//! read facade.
//!
//! ## Architecture
//!
//! - **ObjectType / ObjectId**: BACnet object identification
//! - **PropertyValue**: opaque decoded payload delivered to callers
//! - **Datatype**: application datatypes the registry resolves properties to
//! - **ObjectRegistry**: injected type/datatype registry (collaborator)
//! - **AddressResolver**: textual address to network destination (collaborator)
//!
//! The registry and resolver are consumed through traits and never
//! implemented here; the engine that decodes wire payloads into
//! `PropertyValue` lives behind the `baclink-io` engine seam.

pub mod address;
pub mod object;
pub mod registry;

pub use address::{AddressError, AddressResolver, DeviceAddress};
pub use object::{Datatype, ObjectId, ObjectType, PropertyValue};
pub use registry::ObjectRegistry;

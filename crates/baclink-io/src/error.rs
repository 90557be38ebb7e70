//! Error taxonomy for read operations.

use baclink_core::{AddressError, ObjectId, ObjectType};
use thiserror::Error;

/// Result alias for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors surfaced by read operations.
///
/// Construction failures (`UnknownObjectType`, `InvalidProperty`,
/// `EmptyPropertyList`, `EmptySpecList`, `MalformedSpec`, `Address`) are
/// raised before anything is submitted to the engine. The remaining variants
/// come out of the exchange itself.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Operation invoked before the engine was running.
    #[error("engine not started, nothing was submitted")]
    NotStarted,

    /// Object-type token is neither numeric nor known to the registry.
    #[error("unknown object type: {0}")]
    UnknownObjectType(String),

    /// Property has no datatype for the resolved object type.
    #[error("invalid property {property} for object type {object_type}")]
    InvalidProperty {
        object_type: ObjectType,
        property: String,
    },

    /// An object group listed no property references.
    #[error("provide at least one property for object {object}")]
    EmptyPropertyList { object: ObjectId },

    /// The specification listed no object groups.
    #[error("at least one read access specification required")]
    EmptySpecList,

    /// Specification text did not match the expected token shape.
    #[error("malformed read specification: {0}")]
    MalformedSpec(String),

    /// Destination address could not be resolved.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The responding device cannot take part in the segmented transfer this
    /// exchange would require. Not retryable.
    #[error("segmentation not supported by responding device")]
    SegmentationNotSupported,

    /// No response arrived within the wait window. The request may still be
    /// outstanding on the network; retrying is the caller's decision.
    #[error("no response from controller within {timeout_ms}ms")]
    NoResponseFromController { timeout_ms: u64 },
}

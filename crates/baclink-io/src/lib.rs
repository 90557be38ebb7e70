//! BacLink IO Crate
//!
//! Synchronous-style read facade over an asynchronous BACnet
//! device-communication engine. Callers hand in textual read specifications;
//! the facade builds structured requests against the injected type registry,
//! submits them to the engine and suspends the caller until the matching
//! response arrives, with a bounded wait.
//!
//! ## Architecture
//!
//! - **SpecTokens / RequestParser**: typed tokenizer plus recursive-descent
//!   construction of the two request shapes
//! - **ProtocolEngine**: seam to the asynchronous engine; responses arrive on
//!   a per-call reply slot
//! - **ReadClient**: dispatch, rendezvous wait and call serialization
//! - **ReadError**: the full failure taxonomy
//!
//! Calls on one client are serialized, so responses are matched to requests
//! purely by temporal ordering.

pub mod client;
pub mod engine;
pub mod error;
pub mod parser;
pub mod request;
pub mod token;

pub use client::{ReadClient, ReadClientConfig};
pub use engine::{EngineError, ProtocolEngine, ReadOutcome, ResponseSlot};
pub use error::{ReadError, ReadResult};
pub use parser::RequestParser;
pub use request::{
    PropertyReference, ReadAccessSpec, ReadPropertyMultipleRequest, ReadPropertyRequest,
    ReadRequest, PROPERTY_SET_SELECTORS,
};
pub use token::{SpecTokens, Token};

//! Seam to the asynchronous device-communication engine.
//!
//! The engine runs its own event-driven reactor and delivers each response
//! on the per-call reply slot handed over at submission. Consuming the
//! paired receiver is the delivery acknowledgment; there is no shared
//! response queue to drain or flag to reset.

use async_trait::async_trait;
use baclink_core::PropertyValue;
use thiserror::Error;
use tokio::sync::oneshot;

use crate::request::ReadRequest;

/// Outcome the engine delivers for one read request.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// Decoded value from the responding device.
    Value(PropertyValue),
    /// The device rejected the exchange because it would require a
    /// segmented transfer it cannot handle.
    SegmentationNotSupported,
}

/// Per-call reply slot. The engine sends exactly one outcome, or drops the
/// slot to signal that no response will ever come.
pub type ResponseSlot = oneshot::Sender<ReadOutcome>;

/// Submission-time engine failure.
///
/// These are reported out-of-band by the engine's reactor; the facade logs
/// them and keeps waiting on the reply slot, which stays the authoritative
/// source of the call's outcome.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request could not be encoded within segmentation limits.
    #[error("segmentation error: {0}")]
    Segmentation(String),

    /// Any other protocol-level submission failure.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Engine-internal failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Asynchronous device-communication engine driven by the read facade.
#[async_trait]
pub trait ProtocolEngine: Send + Sync {
    /// Whether the engine's network application is running.
    fn is_started(&self) -> bool;

    /// Hand a request to the engine together with the slot its response
    /// must be delivered on.
    async fn submit(&self, request: ReadRequest, reply: ResponseSlot) -> Result<(), EngineError>;
}

//! Read facade: dispatch, rendezvous and call serialization.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, warn};

use baclink_core::{AddressResolver, ObjectRegistry, PropertyValue};

use crate::engine::{ProtocolEngine, ReadOutcome};
use crate::error::{ReadError, ReadResult};
use crate::parser::RequestParser;
use crate::request::ReadRequest;

/// Configuration for [`ReadClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadClientConfig {
    /// How long to wait for a response before giving up, in milliseconds.
    /// Longer than any reasonable round trip, bounded so a silent or dead
    /// device cannot hang a caller.
    #[serde(default = "default_response_timeout")]
    pub response_timeout_ms: u64,
}

fn default_response_timeout() -> u64 {
    10_000
}

impl Default for ReadClientConfig {
    fn default() -> Self {
        Self {
            response_timeout_ms: default_response_timeout(),
        }
    }
}

impl ReadClientConfig {
    pub fn with_response_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.response_timeout_ms = timeout_ms;
        self
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }
}

/// Read facade for one communicating endpoint.
///
/// Calls are serialized by an in-flight guard: at most one read is
/// outstanding at a time, so the sole waiter always receives the sole next
/// response and requests need no correlation ids. Removing the guard would
/// allow responses to be attributed to the wrong caller.
///
/// ```ignore
/// let client = ReadClient::new(engine, registry, resolver);
/// let value = client.read("2:5 analogInput 1 presentValue", None).await?;
/// ```
pub struct ReadClient {
    engine: Arc<dyn ProtocolEngine>,
    registry: Arc<dyn ObjectRegistry>,
    resolver: Arc<dyn AddressResolver>,
    config: ReadClientConfig,
    /// In-flight guard, held from request construction until the rendezvous
    /// resolves.
    in_flight: Mutex<()>,
}

impl ReadClient {
    pub fn new(
        engine: Arc<dyn ProtocolEngine>,
        registry: Arc<dyn ObjectRegistry>,
        resolver: Arc<dyn AddressResolver>,
    ) -> Self {
        Self::with_config(engine, registry, resolver, ReadClientConfig::default())
    }

    pub fn with_config(
        engine: Arc<dyn ProtocolEngine>,
        registry: Arc<dyn ObjectRegistry>,
        resolver: Arc<dyn AddressResolver>,
        config: ReadClientConfig,
    ) -> Self {
        Self {
            engine,
            registry,
            resolver,
            config,
            in_flight: Mutex::new(()),
        }
    }

    /// Read one property.
    ///
    /// `spec` format: `"<address> <object-type> <instance> <property> [ <index> ]"`,
    /// e.g. `"2:5 analogInput 1 presentValue"` reads the present value of
    /// analog input 1 on station 5 of network 2. A fifth token overrides
    /// `array_index`.
    pub async fn read(&self, spec: &str, array_index: Option<u32>) -> ReadResult<PropertyValue> {
        if !self.engine.is_started() {
            return Err(ReadError::NotStarted);
        }
        let _guard = self.in_flight.lock().await;
        debug!(spec, "read");
        let request = self.parser().parse_read(spec, array_index)?;
        self.dispatch(ReadRequest::Property(request)).await
    }

    /// Read several properties across several objects in one exchange.
    ///
    /// `spec` format:
    /// `"<address> ( <object-type> <instance> ( <property> [ <index> ] )... )..."`,
    /// e.g. `"2:5 analogInput 1 presentValue units"`.
    pub async fn read_multiple(&self, spec: &str) -> ReadResult<PropertyValue> {
        if !self.engine.is_started() {
            return Err(ReadError::NotStarted);
        }
        let _guard = self.in_flight.lock().await;
        debug!(spec, "read_multiple");
        let request = self.parser().parse_read_multiple(spec)?;
        self.dispatch(ReadRequest::PropertyMultiple(request)).await
    }

    fn parser(&self) -> RequestParser<'_> {
        RequestParser::new(self.registry.as_ref(), self.resolver.as_ref())
    }

    /// Submit the request and wait on the per-call reply slot.
    ///
    /// A submission-time engine error does not abort the wait: the engine
    /// reports those out-of-band and the reply slot stays the authoritative
    /// source of the outcome.
    async fn dispatch(&self, request: ReadRequest) -> ReadResult<PropertyValue> {
        let (reply, response) = oneshot::channel();
        if let Err(err) = self.engine.submit(request, reply).await {
            warn!(error = %err, "submission reported a protocol error, awaiting response");
        }

        match tokio::time::timeout(self.config.response_timeout(), response).await {
            Ok(Ok(ReadOutcome::Value(value))) => Ok(value),
            Ok(Ok(ReadOutcome::SegmentationNotSupported)) => {
                Err(ReadError::SegmentationNotSupported)
            }
            Ok(Err(_)) => {
                // engine dropped the slot: no response is ever coming
                warn!("engine dropped the reply slot without responding");
                Err(ReadError::NoResponseFromController {
                    timeout_ms: self.config.response_timeout_ms,
                })
            }
            Err(_) => Err(ReadError::NoResponseFromController {
                timeout_ms: self.config.response_timeout_ms,
            }),
        }
    }
}

//! Test doubles for driving the read facade without a live network stack.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use baclink_core::{
    AddressError, AddressResolver, Datatype, DeviceAddress, ObjectRegistry, ObjectType,
};
use baclink_io::{EngineError, ProtocolEngine, ReadOutcome, ReadRequest, ResponseSlot};

/// Scripted behavior for one submission.
pub enum MockReply {
    /// Deliver the outcome immediately.
    Respond(ReadOutcome),
    /// Deliver the outcome after a delay, from a background task.
    RespondAfter(Duration, ReadOutcome),
    /// Deliver the outcome but report a submission-time protocol error.
    ErrThenRespond(ReadOutcome),
    /// Drop the reply slot without responding.
    DropSlot,
    /// Keep the slot alive and never respond.
    Silent,
}

/// Engine double recording submissions and replaying scripted replies.
pub struct MockEngine {
    started: AtomicBool,
    replies: Mutex<VecDeque<MockReply>>,
    submissions: Mutex<Vec<(Instant, ReadRequest)>>,
    held_slots: Mutex<Vec<ResponseSlot>>,
}

impl MockEngine {
    pub fn started() -> Self {
        Self::with_state(true)
    }

    pub fn stopped() -> Self {
        Self::with_state(false)
    }

    fn with_state(started: bool) -> Self {
        Self {
            started: AtomicBool::new(started),
            replies: Mutex::new(VecDeque::new()),
            submissions: Mutex::new(Vec::new()),
            held_slots: Mutex::new(Vec::new()),
        }
    }

    pub fn enqueue(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn submission_times(&self) -> Vec<Instant> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .map(|(at, _)| *at)
            .collect()
    }

    pub fn last_submission(&self) -> Option<ReadRequest> {
        self.submissions
            .lock()
            .unwrap()
            .last()
            .map(|(_, request)| request.clone())
    }
}

#[async_trait]
impl ProtocolEngine for MockEngine {
    fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    async fn submit(&self, request: ReadRequest, reply: ResponseSlot) -> Result<(), EngineError> {
        self.submissions
            .lock()
            .unwrap()
            .push((Instant::now(), request));
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockReply::DropSlot);
        match next {
            MockReply::Respond(outcome) => {
                let _ = reply.send(outcome);
                Ok(())
            }
            MockReply::RespondAfter(delay, outcome) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = reply.send(outcome);
                });
                Ok(())
            }
            MockReply::ErrThenRespond(outcome) => {
                let _ = reply.send(outcome);
                Err(EngineError::Segmentation(
                    "request too large for device".to_string(),
                ))
            }
            MockReply::DropSlot => {
                drop(reply);
                Ok(())
            }
            MockReply::Silent => {
                self.held_slots.lock().unwrap().push(reply);
                Ok(())
            }
        }
    }
}

/// Registry double covering a handful of common object types.
pub struct StubRegistry;

impl ObjectRegistry for StubRegistry {
    fn resolve_object_type(&self, name: &str) -> Option<ObjectType> {
        match name {
            "analogInput" => Some(ObjectType(0)),
            "binaryValue" => Some(ObjectType(5)),
            "device" => Some(ObjectType(8)),
            _ => None,
        }
    }

    fn property_datatype(&self, object_type: ObjectType, property: &str) -> Option<Datatype> {
        match (object_type.0, property) {
            (0, "presentValue") => Some(Datatype::Real),
            (0, "units") => Some(Datatype::Enumerated),
            (5, "presentValue") => Some(Datatype::Enumerated),
            (8, "objectList") => Some(Datatype::Array(Box::new(Datatype::ObjectIdentifier))),
            _ => None,
        }
    }

    fn is_property_identifier(&self, token: &str) -> bool {
        matches!(
            token,
            "presentValue" | "units" | "objectList" | "all" | "required" | "optional"
        )
    }
}

/// Resolver double for `net:station` and bare station addresses.
pub struct StubResolver;

impl AddressResolver for StubResolver {
    fn resolve(&self, raw: &str) -> Result<DeviceAddress, AddressError> {
        let station = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| AddressError(raw.to_string()))
        };
        match raw.split_once(':') {
            Some((network, mac)) => {
                let network = network
                    .parse::<u16>()
                    .map_err(|_| AddressError(raw.to_string()))?;
                Ok(DeviceAddress::remote(network, vec![station(mac)?]))
            }
            None => Ok(DeviceAddress::local(vec![station(raw)?])),
        }
    }
}

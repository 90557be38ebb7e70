//! Read Facade Example
//!
//! Demonstrates wiring the read facade to an in-memory engine:
//! 1. ObjectRegistry and AddressResolver collaborators
//! 2. ProtocolEngine answering on the per-call reply slot
//! 3. ReadClient for single and multi-property reads

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use baclink_core::{
    AddressError, AddressResolver, Datatype, DeviceAddress, ObjectRegistry, ObjectType,
    PropertyValue,
};
use baclink_io::{
    EngineError, ProtocolEngine, ReadClient, ReadOutcome, ReadRequest, ResponseSlot,
};

struct DemoRegistry;

impl ObjectRegistry for DemoRegistry {
    fn resolve_object_type(&self, name: &str) -> Option<ObjectType> {
        match name {
            "analogInput" => Some(ObjectType(0)),
            "binaryValue" => Some(ObjectType(5)),
            _ => None,
        }
    }

    fn property_datatype(&self, object_type: ObjectType, property: &str) -> Option<Datatype> {
        match (object_type.0, property) {
            (0, "presentValue") => Some(Datatype::Real),
            (0, "units") => Some(Datatype::Enumerated),
            (5, "presentValue") => Some(Datatype::Enumerated),
            _ => None,
        }
    }

    fn is_property_identifier(&self, token: &str) -> bool {
        matches!(
            token,
            "presentValue" | "units" | "all" | "required" | "optional"
        )
    }
}

struct DemoResolver;

impl AddressResolver for DemoResolver {
    fn resolve(&self, raw: &str) -> Result<DeviceAddress, AddressError> {
        match raw.split_once(':') {
            Some((network, station)) => {
                let network = network
                    .parse::<u16>()
                    .map_err(|_| AddressError(raw.to_string()))?;
                let station = station
                    .parse::<u8>()
                    .map_err(|_| AddressError(raw.to_string()))?;
                Ok(DeviceAddress::remote(network, vec![station]))
            }
            None => Err(AddressError(raw.to_string())),
        }
    }
}

/// Engine double answering every request with canned values after a short
/// simulated round trip.
struct DemoEngine;

#[async_trait]
impl ProtocolEngine for DemoEngine {
    fn is_started(&self) -> bool {
        true
    }

    async fn submit(&self, request: ReadRequest, reply: ResponseSlot) -> Result<(), EngineError> {
        println!(
            "engine received:\n{}\n",
            serde_json::to_string_pretty(&request).expect("request serializes")
        );
        let outcome = match &request {
            ReadRequest::Property(_) => ReadOutcome::Value(PropertyValue::Real(21.7)),
            ReadRequest::PropertyMultiple(request) => {
                let count = request.specs.iter().map(|s| s.properties.len()).sum();
                ReadOutcome::Value(PropertyValue::List(vec![PropertyValue::Real(21.7); count]))
            }
        };
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = reply.send(outcome);
        });
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== BacLink Read Facade Demo ===\n");

    let client = ReadClient::new(
        Arc::new(DemoEngine),
        Arc::new(DemoRegistry),
        Arc::new(DemoResolver),
    );

    println!("--- Example 1: Single property ---");
    let value = client.read("2:5 analogInput 1 presentValue", None).await?;
    println!("presentValue = {}\n", value);

    println!("--- Example 2: Multiple objects and properties ---");
    let value = client
        .read_multiple("2:5 analogInput 1 presentValue units binaryValue 3 presentValue")
        .await?;
    println!("values = {}\n", value);

    println!("--- Example 3: Validation failure ---");
    match client.read("2:5 vaporizer 1 presentValue", None).await {
        Err(err) => println!("rejected: {}", err),
        Ok(value) => println!("unexpected value: {}", value),
    }

    Ok(())
}

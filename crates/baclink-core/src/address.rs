//! Destination addressing for outbound requests.
//!
//! Address resolution (parsing `2:5`, `192.168.1.10`, broadcast forms, ...)
//! belongs to the network stack; this module only defines the resolved shape
//! and the seam it is obtained through.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolved destination of a read request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceAddress {
    /// Destination network number, `None` for the local network.
    pub network: Option<u16>,
    /// MAC address bytes on that network.
    pub mac: Vec<u8>,
}

impl DeviceAddress {
    /// Address on the local network.
    pub fn local(mac: impl Into<Vec<u8>>) -> Self {
        Self {
            network: None,
            mac: mac.into(),
        }
    }

    /// Address behind a router on a remote network.
    pub fn remote(network: u16, mac: impl Into<Vec<u8>>) -> Self {
        Self {
            network: Some(network),
            mac: mac.into(),
        }
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(network) = self.network {
            write!(f, "{}:", network)?;
        }
        for (i, byte) in self.mac.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", byte)?;
        }
        Ok(())
    }
}

/// Address string the resolver could not understand.
#[derive(Debug, Clone, Error)]
#[error("invalid device address: {0}")]
pub struct AddressError(pub String);

/// Collaborator turning textual addresses into network destinations.
pub trait AddressResolver: Send + Sync {
    fn resolve(&self, raw: &str) -> Result<DeviceAddress, AddressError>;
}

//! Registry seam and the in-process implementation
//!
//! The durable device registry is an external collaborator; the pipeline
//! only depends on the [`Registry`] call contract. [`InMemoryRegistry`] is
//! the batteries-included implementation for tests and single-process
//! deployments; durable backends implement the same trait elsewhere.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::device::DeviceRecord;

/// Failure reported by a registry backend
///
/// Carries only a diagnostic message; the pipeline surfaces every registry
/// failure as a generic server-side error.
#[derive(Error, Debug, Clone)]
pub struct RegistryError {
    message: String,
}

impl RegistryError {
    /// Wrap a backend diagnostic message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Durable store of device registration records
#[async_trait]
pub trait Registry: Send + Sync {
    /// Store `record`, returning the opaque identifier the registration is
    /// addressable under
    async fn register(&self, record: DeviceRecord) -> Result<String, RegistryError>;
}

/// Registry keeping records in process memory, keyed by identifier
///
/// Re-registration of an endpoint name that is already present overwrites
/// the stored record and keeps its identifier, so the device's location
/// path stays stable across re-registrations.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    devices: Mutex<HashMap<String, DeviceRecord>>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored record by its registration identifier
    pub async fn get(&self, identifier: &str) -> Option<DeviceRecord> {
        self.devices.lock().await.get(identifier).cloned()
    }

    /// Fetch a stored record by endpoint client name
    pub async fn find_by_name(&self, name: &str) -> Option<DeviceRecord> {
        self.devices
            .lock()
            .await
            .values()
            .find(|record| record.name == name)
            .cloned()
    }

    /// Number of registrations currently stored
    pub async fn len(&self) -> usize {
        self.devices.lock().await.len()
    }

    /// Whether the registry holds no registrations
    pub async fn is_empty(&self) -> bool {
        self.devices.lock().await.is_empty()
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn register(&self, record: DeviceRecord) -> Result<String, RegistryError> {
        let mut devices = self.devices.lock().await;

        let existing = devices
            .iter()
            .find(|(_, stored)| stored.name == record.name)
            .map(|(id, _)| id.clone());

        let identifier = existing.unwrap_or_else(|| Uuid::new_v4().to_string());
        debug!(identifier = %identifier, name = %record.name, "storing device");
        devices.insert(identifier.clone(), record);

        Ok(identifier)
    }
}

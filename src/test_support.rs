//! Shared test doubles for the transport and registry seams

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::device::DeviceRecord;
use crate::registry::{Registry, RegistryError};
use crate::transport::{RegistrationRequest, RegistrationResponse};

/// Install the env-filter subscriber once so `RUST_LOG` works under test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Inbound request double with canned parameters, payload and origin
pub struct TestRequest {
    pub params:  HashMap<String, String>,
    pub payload: Vec<u8>,
    pub address: IpAddr,
    pub port:    u16,
    pub path:    String,
}

impl TestRequest {
    pub fn new(pairs: &[(&str, &str)], payload: &str) -> Self {
        Self {
            params:  pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            payload: payload.as_bytes().to_vec(),
            address: IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7)),
            port:    56830,
            path:    "/rd".to_string(),
        }
    }
}

impl RegistrationRequest for TestRequest {
    fn query_params(&self) -> &HashMap<String, String> {
        &self.params
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn source_address(&self) -> IpAddr {
        self.address
    }

    fn source_port(&self) -> u16 {
        self.port
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// Everything a response double observed for one exchange
#[derive(Debug, Default)]
pub struct ResponseRecord {
    pub code:      Option<String>,
    pub options:   Vec<(String, String)>,
    pub body:      Option<String>,
    pub end_calls: u32,
}

impl ResponseRecord {
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Outbound response double that records what the translator put on the wire
pub struct RecordingResponse {
    record: Arc<Mutex<ResponseRecord>>,
}

impl RecordingResponse {
    /// Returns the double and a shared handle to inspect after `end`
    pub fn new() -> (Self, Arc<Mutex<ResponseRecord>>) {
        let record = Arc::new(Mutex::new(ResponseRecord::default()));
        (
            Self {
                record: Arc::clone(&record),
            },
            record,
        )
    }
}

impl RegistrationResponse for RecordingResponse {
    fn set_code(&mut self, code: &str) {
        self.record.lock().expect("record lock").code = Some(code.to_string());
    }

    fn set_option(&mut self, name: &str, value: &str) {
        self.record
            .lock()
            .expect("record lock")
            .options
            .push((name.to_string(), value.to_string()));
    }

    fn end(self, body: &str) {
        let mut record = self.record.lock().expect("record lock");
        record.body = Some(body.to_string());
        record.end_calls += 1;
    }
}

/// Registry double that counts `register` calls and answers with a fixed
/// identifier or a canned failure
pub struct CountingRegistry {
    pub calls:      AtomicU32,
    pub identifier: String,
    pub fail:       bool,
}

impl CountingRegistry {
    pub fn succeeding(identifier: &str) -> Self {
        Self {
            calls:      AtomicU32::new(0),
            identifier: identifier.to_string(),
            fail:       false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls:      AtomicU32::new(0),
            identifier: String::new(),
            fail:       true,
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for CountingRegistry {
    async fn register(&self, _record: DeviceRecord) -> Result<String, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(RegistryError::new("storage unavailable"))
        } else {
            Ok(self.identifier.clone())
        }
    }
}

//! Registration pipeline orchestrator
//!
//! Runs the stages of one registration request strictly in order: mandatory
//! parameter validation, the caller-supplied policy hook, device record
//! assembly, registry persistence, and finally response translation. The
//! first failing stage short-circuits straight to the response; the
//! response object is moved into the translator on every path, so each
//! request is answered exactly once.
//!
//! Handlers hold no per-request state, so any number of pipelines may run
//! concurrently over the same handler without coordination.

use std::sync::Arc;

use tracing::debug;

use crate::constants::MANDATORY_REGISTRATION_PARAMS;
use crate::device::DeviceRecord;
use crate::error::Result;
use crate::params::check_mandatory_params;
use crate::policy::{PolicyHook, PolicyParams};
use crate::registry::Registry;
use crate::response;
use crate::transport::{RegistrationRequest, RegistrationResponse};

/// Handles inbound registration requests against a registry and a policy
/// hook
pub struct RegistrationHandler {
    registry: Arc<dyn Registry>,
    hook:     Arc<dyn PolicyHook>,
}

impl RegistrationHandler {
    /// Create a handler persisting to `registry`, gated by `hook`
    pub fn new(registry: Arc<dyn Registry>, hook: Arc<dyn PolicyHook>) -> Self {
        Self { registry, hook }
    }

    /// Run the full pipeline for one request and answer it
    ///
    /// Always emits exactly one response, whether the pipeline succeeds or
    /// any stage fails.
    pub async fn handle<Q, S>(&self, request: &Q, response: S)
    where
        Q: RegistrationRequest + Sync,
        S: RegistrationResponse,
    {
        debug!("handling registration request");

        let outcome = self.process(request).await;
        response::deliver(response, outcome);
    }

    /// Sequential stages up to and including persistence
    ///
    /// The `?` on each stage is the short-circuit: a failure skips every
    /// later stage and becomes the terminal outcome.
    async fn process<Q>(&self, request: &Q) -> Result<String>
    where
        Q: RegistrationRequest + Sync,
    {
        let params = request.query_params();
        check_mandatory_params(MANDATORY_REGISTRATION_PARAMS, params)?;

        let payload = String::from_utf8_lossy(request.payload()).into_owned();
        let accepted = self
            .hook
            .decide(PolicyParams::new(params, payload))
            .await?;
        if let Some(value) = accepted {
            debug!(value = %value, "policy hook accepted with value");
        }

        let record = DeviceRecord::from_request(request, params)?;
        debug!(name = %record.name, address = %record.address, "storing device");

        let identifier = self.registry.register(record).await?;
        Ok(identifier)
    }
}

//! Device record assembly
//!
//! A [`DeviceRecord`] is built only after mandatory-parameter validation and
//! policy acceptance have both succeeded, and is immutable once handed to
//! the registry: the pipeline moves it by value into `register` and retains
//! no reference.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{PARAM_ENDPOINT_NAME, PARAM_LIFETIME};
use crate::error::{Error, Result};
use crate::transport::RegistrationRequest;

/// Last creation stamp handed out, in milliseconds since the epoch
static LAST_STAMP_MILLIS: AtomicI64 = AtomicI64::new(0);

/// One device registration, as submitted to the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Endpoint client name the device registered under
    pub name:          String,
    /// Requested registration lifetime in seconds, if the device sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime:      Option<String>,
    /// Source address of the registration request
    pub address:       IpAddr,
    /// Source port of the registration request
    pub port:          u16,
    /// Path under which the registration was requested
    pub path:          String,
    /// Raw request body as text, typically an object/resource link list
    pub payload:       String,
    /// Moment the record was assembled, non-decreasing across requests
    pub creation_date: DateTime<Utc>,
}

impl DeviceRecord {
    /// Assemble a record from the request's transport metadata and its
    /// validated query parameters
    ///
    /// Stamps `creation_date` exactly once, here. Callers run the mandatory
    /// parameter check first, so a missing endpoint name is unreachable in
    /// the pipeline; it is still surfaced as an error rather than a panic.
    pub fn from_request<R>(request: &R, params: &HashMap<String, String>) -> Result<Self>
    where
        R: RegistrationRequest,
    {
        let name = params
            .get(PARAM_ENDPOINT_NAME)
            .cloned()
            .ok_or_else(|| Error::MissingParameter {
                param: PARAM_ENDPOINT_NAME.to_string(),
            })?;

        Ok(Self {
            name,
            lifetime: params.get(PARAM_LIFETIME).cloned(),
            address: request.source_address(),
            port: request.source_port(),
            path: request.path().to_string(),
            payload: String::from_utf8_lossy(request.payload()).into_owned(),
            creation_date: creation_stamp(),
        })
    }
}

/// Current time, clamped so stamps never decrease across requests
///
/// The wall clock alone does not guarantee monotonicity; an atomic max of
/// the last stamp handed out does.
fn creation_stamp() -> DateTime<Utc> {
    let now = Utc::now();
    let now_millis = now.timestamp_millis();
    let prev = LAST_STAMP_MILLIS.fetch_max(now_millis, Ordering::SeqCst);

    if prev <= now_millis {
        now
    } else {
        DateTime::from_timestamp_millis(prev).unwrap_or(now)
    }
}

//! Registration-request pipeline for an LwM2M device-management server
//!
//! Accepts a decoded registration request from the transport layer, checks
//! the mandatory query parameters, lets a caller-supplied policy hook accept
//! or reject the registration, persists the resulting device record through
//! the registry seam, and answers with the protocol response: `2.01` plus a
//! `Location-Path` of `rd/<identifier>` on success, or the failure's own
//! code and name.
//!
//! ```
//! use std::sync::Arc;
//!
//! use lwm2m_registration::{AcceptAll, InMemoryRegistry, RegistrationHandler};
//!
//! let handler = RegistrationHandler::new(
//!     Arc::new(InMemoryRegistry::new()),
//!     Arc::new(AcceptAll),
//! );
//! // transport layer: handler.handle(&request, response).await
//! # let _ = handler;
//! ```

pub mod constants;
pub mod device;
pub mod error;
pub mod handler;
pub mod params;
pub mod policy;
pub mod registry;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::device::DeviceRecord;
pub use self::error::{Error, Result};
pub use self::handler::RegistrationHandler;
pub use self::policy::{
    AcceptAll, PolicyDecision, PolicyFn, PolicyHook, PolicyParams, PolicyRejection, policy_fn,
};
pub use self::registry::{InMemoryRegistry, Registry, RegistryError};
pub use self::transport::{RegistrationRequest, RegistrationResponse};

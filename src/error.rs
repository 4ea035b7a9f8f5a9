//! Error taxonomy for the registration pipeline
//!
//! Every failure a pipeline stage can produce is represented here, together
//! with the CoAP response code and wire name the response translator puts on
//! the wire. Errors never escape the pipeline; the orchestrator routes each
//! one to the translator so the client always receives exactly one response.

use thiserror::Error;

use crate::constants::{
    CODE_BAD_REQUEST, CODE_INTERNAL_SERVER_ERROR, NAME_MISSING_PARAMETER, NAME_REGISTRY_FAILURE,
};
use crate::policy::PolicyRejection;
use crate::registry::RegistryError;

/// Result alias used throughout the pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failure of a registration pipeline stage
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory query parameter was absent from the request
    #[error("mandatory query parameter not found: {param}")]
    MissingParameter {
        /// Name of the first missing parameter, in declared order
        param: String,
    },

    /// The caller-supplied policy hook declined the registration
    #[error("registration rejected by policy hook: {0}")]
    PolicyRejected(#[from] PolicyRejection),

    /// The registry failed to persist the device record
    #[error("registry failed to store device: {0}")]
    RegistryFailure(#[from] RegistryError),
}

impl Error {
    /// CoAP response code put on the wire for this failure
    ///
    /// Policy rejections pass the hook's code through verbatim; nothing in
    /// the pipeline reinterprets it.
    pub fn code(&self) -> &str {
        match self {
            Self::MissingParameter { .. } => CODE_BAD_REQUEST,
            Self::PolicyRejected(rejection) => &rejection.code,
            Self::RegistryFailure(_) => CODE_INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire name sent as the diagnostic response body
    ///
    /// For missing parameters the name identifies the absent field.
    pub fn name(&self) -> String {
        match self {
            Self::MissingParameter { param } => format!("{NAME_MISSING_PARAMETER}: {param}"),
            Self::PolicyRejected(rejection) => rejection.name.clone(),
            Self::RegistryFailure(_) => NAME_REGISTRY_FAILURE.to_string(),
        }
    }
}

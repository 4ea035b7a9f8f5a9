//! Caller-supplied registration policy
//!
//! The pipeline delegates the accept/reject decision to a user hook before
//! anything is persisted. The hook sees an immutable copy of the request's
//! query parameters plus the decoded payload text; it can never mutate the
//! mapping later stages use. The orchestrator invokes the hook exactly once
//! per request and observes only its terminal outcome.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Outcome of a policy decision: accepted (optionally with a value forwarded
/// to later stages) or rejected with a wire-level code and name
pub type PolicyDecision = std::result::Result<Option<Value>, PolicyRejection>;

/// Rejection returned by a policy hook
///
/// Both fields pass through to the wire verbatim; the pipeline does not
/// reinterpret them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct PolicyRejection {
    /// Diagnostic name sent as the response body, e.g. `Forbidden`
    pub name: String,
    /// CoAP response code, e.g. `4.03`
    pub code: String,
}

impl fmt::Display for PolicyRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.code)
    }
}

/// Arguments handed to a policy hook
///
/// An owned snapshot of the query parameter mapping with the request payload
/// attached, built fresh for each invocation.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyParams {
    /// Copy of the request's query parameters
    pub params:  HashMap<String, String>,
    /// Decoded request body text
    pub payload: String,
}

impl PolicyParams {
    /// Snapshot the query parameters and attach the payload text
    pub fn new(params: &HashMap<String, String>, payload: String) -> Self {
        Self {
            params: params.clone(),
            payload,
        }
    }

    /// Look up a query parameter by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Registration policy decision point
///
/// Implementations may perform asynchronous work; the orchestrator awaits
/// the terminal outcome before moving to persistence.
#[async_trait]
pub trait PolicyHook: Send + Sync {
    /// Decide whether the registration described by `params` may proceed
    async fn decide(&self, params: PolicyParams) -> PolicyDecision;
}

/// Policy hook that accepts every registration
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

#[async_trait]
impl PolicyHook for AcceptAll {
    async fn decide(&self, _params: PolicyParams) -> PolicyDecision {
        Ok(None)
    }
}

/// Lift a plain function into a [`PolicyHook`]
///
/// Convenient for policies that decide synchronously from the parameters
/// alone, such as allow-lists.
pub fn policy_fn<F>(decide: F) -> PolicyFn<F>
where
    F: Fn(PolicyParams) -> PolicyDecision + Send + Sync,
{
    PolicyFn { decide }
}

/// Adapter returned by [`policy_fn`]
pub struct PolicyFn<F> {
    decide: F,
}

#[async_trait]
impl<F> PolicyHook for PolicyFn<F>
where
    F: Fn(PolicyParams) -> PolicyDecision + Send + Sync,
{
    async fn decide(&self, params: PolicyParams) -> PolicyDecision {
        (self.decide)(params)
    }
}

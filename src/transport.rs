//! Transport seams between the pipeline and the CoAP layer
//!
//! The pipeline never decodes CoAP itself. It consumes an already-decoded
//! request through [`RegistrationRequest`] and emits its single terminal
//! response through [`RegistrationResponse`]. Transport implementations own
//! retransmission, timeouts and encoding.

use std::collections::HashMap;
use std::net::IpAddr;

/// Decoded inbound registration request
///
/// Exposes the query parameter mapping produced by the transport's
/// extractor, the raw body, and the network origin of the request.
pub trait RegistrationRequest {
    /// Query parameters decoded from the request URI, keyed case-sensitively
    fn query_params(&self) -> &HashMap<String, String>;

    /// Raw request body bytes, typically an object/resource link list
    fn payload(&self) -> &[u8];

    /// Source address the request arrived from
    fn source_address(&self) -> IpAddr;

    /// Source port the request arrived from
    fn source_port(&self) -> u16;

    /// Path under which the registration was requested
    fn path(&self) -> &str;
}

/// Outbound response under construction
///
/// `end` consumes the response, so a second close of the same exchange is
/// unrepresentable; the translator is the only caller.
pub trait RegistrationResponse {
    /// Set the response code, e.g. `2.01`
    fn set_code(&mut self, code: &str);

    /// Set a repeatable response option such as `Location-Path`
    fn set_option(&mut self, name: &str, value: &str);

    /// Write the body and close the exchange
    fn end(self, body: &str);
}

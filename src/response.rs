//! Terminal response translation
//!
//! Maps the pipeline's outcome onto the wire: a created-resource response
//! with a `Location-Path` option, or the failure's own code and name. Every
//! request ends here exactly once; [`deliver`] consumes the response object,
//! so it cannot run twice for the same exchange.

use tracing::debug;

use crate::constants::{CODE_CREATED, OPTION_LOCATION_PATH, REGISTRATION_LOCATION_PREFIX};
use crate::error::Result;
use crate::transport::RegistrationResponse;

/// Translate the terminal pipeline outcome into the wire response and close
/// the exchange
pub fn deliver<R>(mut response: R, outcome: Result<String>)
where
    R: RegistrationResponse,
{
    match outcome {
        Ok(identifier) => {
            debug!(identifier = %identifier, "registration request ended successfully");

            response.set_code(CODE_CREATED);
            response.set_option(
                OPTION_LOCATION_PATH,
                &format!("{REGISTRATION_LOCATION_PREFIX}/{identifier}"),
            );
            response.end("");
        }
        Err(error) => {
            debug!(
                name = %error.name(),
                code = %error.code(),
                "registration request ended in error"
            );

            response.set_code(error.code());
            response.end(&error.name());
        }
    }
}

//! Protocol constants shared across the registration pipeline
//!
//! Query parameter names and response codes follow the LwM2M registration
//! interface as carried over CoAP.

/// Query parameter carrying the endpoint client name
pub const PARAM_ENDPOINT_NAME: &str = "ep";
/// Query parameter carrying the requested registration lifetime in seconds
pub const PARAM_LIFETIME: &str = "lt";

/// Parameters that must be present on every registration request
pub const MANDATORY_REGISTRATION_PARAMS: &[&str] = &[PARAM_ENDPOINT_NAME];

/// Collection prefix under which created registrations are addressable
pub const REGISTRATION_LOCATION_PREFIX: &str = "rd";

/// Response option naming the path of a created resource
pub const OPTION_LOCATION_PATH: &str = "Location-Path";

/// Response code for a successfully created registration
pub const CODE_CREATED: &str = "2.01";
/// Response code for a malformed registration request
pub const CODE_BAD_REQUEST: &str = "4.00";
/// Response code for a server-side failure while persisting the registration
pub const CODE_INTERNAL_SERVER_ERROR: &str = "5.00";

/// Wire name reported when a mandatory query parameter is absent
pub const NAME_MISSING_PARAMETER: &str = "MANDATORY_PARAMETER_NOT_FOUND";
/// Wire name reported when the registry fails to persist a record
pub const NAME_REGISTRY_FAILURE: &str = "INTERNAL_DB_ERROR";

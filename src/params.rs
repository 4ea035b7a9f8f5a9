//! Mandatory query parameter validation
//!
//! First pipeline stage after extraction. Pure and deterministic, so it can
//! run speculatively or be retried without risk.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Check that every required key is present in the query parameter mapping
///
/// A key with an empty value counts as present. Fails with
/// [`Error::MissingParameter`] naming the first absent key, in the order the
/// required set is declared.
pub fn check_mandatory_params(
    required: &[&str],
    params: &HashMap<String, String>,
) -> Result<()> {
    for key in required {
        if !params.contains_key(*key) {
            return Err(Error::MissingParameter {
                param: (*key).to_string(),
            });
        }
    }

    Ok(())
}

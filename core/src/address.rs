//! Joins a client's base address with a per-call path.

use crate::error::ClientError;

/// Resolve the request address from `base` and `path`.
///
/// The two are concatenated verbatim when both are present: no separator is
/// inserted and duplicate slashes are left alone.
pub fn resolve_address(base: &str, path: &str) -> Result<String, ClientError> {
    match (base.is_empty(), path.is_empty()) {
        (true, true) => Err(ClientError::InvalidAddress),
        (false, false) => Ok(format!("{base}{path}")),
        (true, false) => Ok(path.to_string()),
        (false, true) => Ok(base.to_string()),
    }
}

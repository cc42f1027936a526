//! Normalized result of a GET call.
//!
//! # Design
//! The body is read fully before a `Response` exists, so `bytes` is always
//! the complete payload. `data` is filled by a best-effort JSON decode: when
//! the body does not fit the requested shape, `data` keeps the caller's
//! fallback and `decode_error` says why. The call itself still succeeds,
//! because the transport did.

use serde::de::DeserializeOwned;
use ureq::http::{self, StatusCode};

/// Status, decoded data and raw body of one completed request.
#[derive(Debug)]
pub struct Response<T> {
    /// Numeric HTTP status, e.g. `404`.
    pub status: u16,
    /// Status line in `"<code> <reason>"` form, e.g. `"404 Not Found"`.
    pub status_text: String,
    /// The decoded body, or the fallback when decoding failed.
    pub data: T,
    /// Transport response head (status, version, headers). Its body has
    /// already been drained into `bytes`.
    pub response: http::Response<()>,
    /// The raw response body.
    pub bytes: Vec<u8>,
    /// Why `data` could not be decoded from `bytes`, if it could not.
    pub decode_error: Option<serde_json::Error>,
}

impl<T: DeserializeOwned> Response<T> {
    pub(crate) fn assemble(response: http::Response<()>, bytes: Vec<u8>, fallback: T) -> Self {
        let (data, decode_error) = decode(&bytes, fallback);
        if let Some(e) = &decode_error {
            tracing::debug!(error = %e, len = bytes.len(), "response body did not decode as JSON");
        }
        let status = response.status();
        Self {
            status: status.as_u16(),
            status_text: status_text(status),
            data,
            response,
            bytes,
            decode_error,
        }
    }
}

impl<T> Response<T> {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_decoded(&self) -> bool {
        self.decode_error.is_none()
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Decode the raw body into another shape, surfacing any error.
    pub fn json<U: DeserializeOwned>(&self) -> Result<U, serde_json::Error> {
        serde_json::from_slice(&self.bytes)
    }
}

/// Decode `bytes` as JSON, keeping `fallback` when that fails.
fn decode<T: DeserializeOwned>(bytes: &[u8], fallback: T) -> (T, Option<serde_json::Error>) {
    match serde_json::from_slice(bytes) {
        Ok(data) => (data, None),
        Err(e) => (fallback, Some(e)),
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_str()),
        None => status.as_str().to_string(),
    }
}

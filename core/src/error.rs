//! Error types for the GET helper.
//!
//! # Design
//! Each variant marks the stage of the call that failed. JSON decoding is
//! deliberately absent: a body that is not valid JSON is reported through
//! `Response::decode_error` and never fails the call.

use thiserror::Error;

/// Errors returned by `Client` calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Neither a base address nor a path was given.
    #[error("base or path cannot be empty")]
    InvalidAddress,

    /// The resolved address or a configured header could not form a request.
    #[error("request construction failed: {0}")]
    RequestConstruction(String),

    /// DNS, connect, TLS or timeout failure while executing the request.
    #[error("transport failed: {0}")]
    Transport(#[source] ureq::Error),

    /// The response body could not be read to the end.
    #[error("reading response body failed: {0}")]
    BodyRead(#[source] ureq::Error),
}

//! Minimal synchronous HTTP GET helper.
//!
//! # Overview
//! A [`Client`] joins an optional base address with a per-call path, builds a
//! GET request carrying the headers and Basic credentials of its
//! [`Configuration`], executes it with a bounded timeout and hands back a
//! [`Response`] holding the status, the raw body and a best-effort JSON
//! decoding of that body.
//!
//! # Design
//! - `build_get` produces a plain `http::Request<()>`, so address resolution
//!   and header configuration are testable without touching the network.
//! - Non-2xx statuses are data, not errors. Only address, request, transport
//!   and body read failures become [`ClientError`].
//! - A body that does not decode as JSON still yields `Ok`; the failure is
//!   kept in [`Response::decode_error`].

pub mod address;
pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use address::resolve_address;
pub use client::{Client, ClientOptions, DEFAULT_TIMEOUT};
pub use config::{configure_request, BasicAuth, Configuration};
pub use error::ClientError;
pub use response::Response;

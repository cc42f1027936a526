//! GET request construction and execution.
//!
//! # Design
//! `Client` holds only a base address, a timeout and an optional
//! `Configuration`; no state is carried between calls, so one client can be
//! shared by concurrent callers. Each call is split into `build_get`, which
//! produces a plain `http::Request` without touching the network, and the
//! execution step, which runs that request on a ureq agent bounded by the
//! effective timeout. Non-2xx statuses are returned as data.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::http::{self, Request};

use crate::address::resolve_address;
use crate::config::{configure_request, Configuration};
use crate::error::ClientError;
use crate::response::Response;

/// Timeout applied when the client's own timeout is zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Named construction options for a `Client`. Every field may be omitted.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Prefix joined with every call's path.
    pub address: Option<String>,
    pub config: Option<Configuration>,
    /// `None` or zero selects `DEFAULT_TIMEOUT`.
    pub timeout: Option<Duration>,
}

/// Synchronous GET client.
///
/// Fields are public so the owner can adjust them between calls.
#[derive(Debug, Clone, Default)]
pub struct Client {
    /// Empty means "no base address".
    pub base_url: String,
    /// Zero means "use `DEFAULT_TIMEOUT`".
    pub timeout: Duration,
    pub config: Option<Configuration>,
}

impl Client {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            base_url: options.address.unwrap_or_default(),
            timeout: options.timeout.unwrap_or(Duration::ZERO),
            config: options.config,
        }
    }

    /// Client with a base address and nothing else configured.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// The timeout bounding a whole call: connect, send and receive.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// Build the configured GET request for `path` without sending it.
    pub fn build_get(&self, path: &str) -> Result<Request<()>, ClientError> {
        let url = resolve_address(&self.base_url, path)?;
        let mut request = Request::get(url.as_str())
            .body(())
            .map_err(|e| ClientError::RequestConstruction(format!("{url:?}: {e}")))?;
        configure_request(&mut request, self.config.as_ref())?;
        Ok(request)
    }

    /// GET `path`, decoding the body into `T` when it is valid JSON for `T`
    /// and keeping `target` otherwise.
    pub fn get_into<T: DeserializeOwned>(&self, path: &str, target: T) -> Result<Response<T>, ClientError> {
        let request = self.build_get(path)?;
        let timeout = self.effective_timeout();
        tracing::debug!(url = %request.uri(), timeout = ?timeout, "sending GET");

        let response = self.agent(timeout).run(request).map_err(|e| {
            tracing::warn!(error = %e, "GET failed");
            ClientError::Transport(e)
        })?;

        // The body reader is dropped at the end of this scope on every path.
        // No size cap: the whole body is read.
        let (parts, mut body) = response.into_parts();
        let bytes = body.with_config().limit(u64::MAX).read_to_vec().map_err(|e| {
            tracing::warn!(status = parts.status.as_u16(), error = %e, "reading response body failed");
            ClientError::BodyRead(e)
        })?;
        drop(body);
        tracing::debug!(status = parts.status.as_u16(), len = bytes.len(), "received response");

        Ok(Response::assemble(http::Response::from_parts(parts, ()), bytes, target))
    }

    /// GET `path`, decoding into `T` or falling back to `T::default()`.
    pub fn get<T: DeserializeOwned + Default>(&self, path: &str) -> Result<Response<T>, ClientError> {
        self.get_into(path, T::default())
    }

    /// GET `path`, decoding into an untyped JSON value (`Null` on failure).
    pub fn get_value(&self, path: &str) -> Result<Response<Value>, ClientError> {
        self.get_into(path, Value::Null)
    }

    fn agent(&self, timeout: Duration) -> ureq::Agent {
        ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent()
    }
}

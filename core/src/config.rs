//! Header and Basic-auth configuration applied to outgoing requests.
//!
//! # Design
//! A `Configuration` is owned by whoever builds the `Client` and is only read
//! while configuring a request. When it carries no headers, a single
//! `Content-Type: application/json` is sent instead; custom headers and the
//! default are never merged.

use std::collections::HashMap;
use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use ureq::http::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use ureq::http::Request;

use crate::error::ClientError;

/// Username and password sent with the HTTP Basic scheme.
///
/// Both fields are fixed at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Authorization` header value: `Basic base64(username:password)`.
    fn header_value(&self) -> Result<HeaderValue, ClientError> {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::from_str(&format!("Basic {token}"))
            .map_err(|e| ClientError::RequestConstruction(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Headers and credentials attached to every request a `Client` makes.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Header name to value, applied verbatim. Names keep the case supplied.
    pub headers: Option<HashMap<String, String>>,
    auth: Option<BasicAuth>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(BasicAuth::new(username, password));
        self
    }

    pub fn auth(&self) -> Option<&BasicAuth> {
        self.auth.as_ref()
    }
}

/// Apply `config`'s headers and credentials to `request` in place.
///
/// Without a configuration the request is left as built. Header entries are
/// appended, so a name already on the request gains a second value. Basic
/// credentials replace any `Authorization` header present.
pub fn configure_request(
    request: &mut Request<()>,
    config: Option<&Configuration>,
) -> Result<(), ClientError> {
    let Some(config) = config else {
        return Ok(());
    };
    let headers = request.headers_mut();

    match config.headers.as_ref().filter(|h| !h.is_empty()) {
        Some(custom) => {
            for (name, value) in custom {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| ClientError::RequestConstruction(format!("header {name:?}: {e}")))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|e| ClientError::RequestConstruction(format!("header {name}: {e}")))?;
                headers.append(name, value);
            }
        }
        None => {
            headers.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
    }

    if let Some(auth) = &config.auth {
        headers.insert(AUTHORIZATION, auth.header_value()?);
    }
    Ok(())
}

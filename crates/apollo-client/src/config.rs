//! Client configuration.
//!
//! # Default Configuration
//!
//! - `timeout`: 60 seconds (`Duration::ZERO` disables the deadline)
//! - `pool_idle_timeout`: 90 seconds
//! - `pool_max_idle_per_host`: unbounded
//! - `logger`: the tracing dispatcher current when the client is created
//!
//! `url` and `token` have no defaults and must be non-empty.
//!
//! # Example
//!
//! ```
//! use apollo_client::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::new("http://127.0.0.1:8080/api", "secret-token")
//!     .with_timeout(Duration::from_secs(5));
//! assert!(config.validate().is_ok());
//! ```

use hyper::header::HeaderValue;
use hyper::Uri;
use std::fmt;
use std::time::Duration;

use crate::error::{ApolloError, Result};

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default lifetime of an idle pooled connection.
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Construction-time options for [`ApolloClient`](crate::ApolloClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Endpoint every envelope is POSTed to (e.g. `http://cmdb.internal/api`)
    pub url: String,
    /// Static token sent in the `token` header of every request
    pub token: String,
    /// Deadline for one full exchange, send plus body read
    pub timeout: Duration,
    /// How long an idle pooled connection is kept around
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
    /// Dispatcher all client events are routed to
    pub logger: Option<tracing::Dispatch>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            pool_idle_timeout: DEFAULT_POOL_IDLE_TIMEOUT,
            pool_max_idle_per_host: usize::MAX,
            logger: None,
        }
    }
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_pool_idle_timeout(mut self, idle: Duration) -> Self {
        self.pool_idle_timeout = idle;
        self
    }

    pub fn with_pool_max_idle_per_host(mut self, max_idle: usize) -> Self {
        self.pool_max_idle_per_host = max_idle;
        self
    }

    /// Routes every event the client emits to `logger` instead of the
    /// dispatcher that happens to be current at construction.
    pub fn with_logger(mut self, logger: impl Into<tracing::Dispatch>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    /// The deadline to enforce, or `None` when the timeout is disabled.
    pub fn deadline(&self) -> Option<Duration> {
        (!self.timeout.is_zero()).then_some(self.timeout)
    }

    /// Checks the required options and parses the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApolloError::Config`] if:
    /// - the url or token is empty
    /// - the url is not an absolute `http://` or `https://` URI
    /// - the token cannot be sent as an HTTP header value
    pub fn validate(&self) -> Result<Uri> {
        if self.url.trim().is_empty() || self.token.trim().is_empty() {
            return Err(ApolloError::Config("url or token is empty".into()));
        }

        let uri: Uri = self
            .url
            .parse()
            .map_err(|e| ApolloError::Config(format!("invalid url '{}': {}", self.url, e)))?;

        match uri.scheme_str() {
            Some("http") | Some("https") if uri.host().is_some() => {}
            _ => {
                return Err(ApolloError::Config(format!(
                    "invalid url '{}': must start with http:// or https://",
                    self.url
                )))
            }
        }

        HeaderValue::from_str(&self.token)
            .map_err(|_| ApolloError::Config("token is not a valid header value".into()))?;

        Ok(uri)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("token", &"*****")
            .field("timeout", &self.timeout)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

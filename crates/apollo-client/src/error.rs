use thiserror::Error;

/// Every failure the client can report.
///
/// Callers always receive either a fully decoded result or exactly one of
/// these four kinds. The client performs no retries of its own; use
/// [`ApolloError::is_retryable`] to drive a caller-side policy.
#[derive(Error, Debug)]
pub enum ApolloError {
    /// Missing or malformed configuration at construction time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network, connection or timeout failure while talking to the service.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered HTTP 502; the upstream is unavailable.
    #[error("bad gateway")]
    BadGateway,

    /// The response body did not decode into the expected result shape.
    ///
    /// The underlying parse error is kept as the error source.
    #[error("json decode failed")]
    DecodeFailed(#[source] serde_json::Error),
}

/// Fieldless mirror of [`ApolloError`], convenient for matching and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Config,
    Transport,
    BadGateway,
    DecodeFailed,
}

impl ApolloError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApolloError::Config(_) => ErrorKind::Config,
            ApolloError::Transport(_) => ErrorKind::Transport,
            ApolloError::BadGateway => ErrorKind::BadGateway,
            ApolloError::DecodeFailed(_) => ErrorKind::DecodeFailed,
        }
    }

    /// Whether repeating the same call could plausibly succeed.
    ///
    /// Transport failures and bad gateways are transient; configuration and
    /// decode failures are not. Mutations are at-most-once, so retrying them
    /// is the caller's decision.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApolloError::Transport(_) | ApolloError::BadGateway)
    }
}

pub type Result<T> = std::result::Result<T, ApolloError>;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use hyper::{Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use std::time::Duration;

use crate::codec::EnvelopeCodec;
use crate::config::ClientConfig;
use crate::error::{ApolloError, Result};
use crate::protocol::{Method, Params, RpcRequest};

/// Name of the header carrying the static auth token.
pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("token");

/// Pooled HTTP transport bound to one endpoint.
///
/// Safe to share across concurrent calls; the connection pool is the only
/// shared state. Dropping the transport drops the pool and with it every idle
/// connection.
pub struct HttpTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    uri: Uri,
    token: HeaderValue,
    deadline: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport from a configuration.
    ///
    /// No connection is opened until the first call.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let uri = config.validate()?;
        let token = HeaderValue::from_str(&config.token)
            .map_err(|_| ApolloError::Config("token is not a valid header value".into()))?;

        let client = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_timer(TokioTimer::new())
            .build_http();

        Ok(Self {
            client,
            uri,
            token,
            deadline: config.deadline(),
        })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sends one envelope and returns the raw response body.
    ///
    /// The deadline, when set, covers the whole exchange: connect, send and
    /// body read. Dropping the returned future aborts the exchange.
    pub async fn send(&self, method: Method, params: Params) -> Result<Bytes> {
        let envelope = RpcRequest::new(method.as_str(), params);
        let body = EnvelopeCodec::encode_request(&envelope)?;

        let request = Request::post(self.uri.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(TOKEN_HEADER, self.token.clone())
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| ApolloError::Transport(format!("Failed to build request: {}", e)))?;

        tracing::debug!(method = %method, url = %self.uri, "sending apollo request");

        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.exchange(request))
                .await
                .map_err(|_| {
                    ApolloError::Transport(format!(
                        "request timed out after {}ms",
                        deadline.as_millis()
                    ))
                })?,
            None => self.exchange(request).await,
        }
    }

    async fn exchange(&self, request: Request<Full<Bytes>>) -> Result<Bytes> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| ApolloError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::BAD_GATEWAY {
            return Err(ApolloError::BadGateway);
        }
        if !status.is_success() {
            tracing::debug!(status = %status, "non-success status, decoding body anyway");
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ApolloError::Transport(format!("Failed to read response: {}", e)))?
            .to_bytes();

        Ok(body)
    }
}

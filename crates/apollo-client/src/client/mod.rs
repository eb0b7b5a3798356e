//! The Apollo CMDB client.
//!
//! Every public operation funnels into [`ApolloClient::invoke`]: pick the
//! operation's row from [`OPERATIONS`](crate::protocol::OPERATIONS), build the
//! parameter mapping, send, decode into the row's result shape. Failures are
//! logged once here, with the operation name and its arguments, and returned
//! unchanged.
//!
//! # Example
//!
//! ```no_run
//! use apollo_client::{ApolloClient, ClientConfig};
//!
//! # async fn run() -> apollo_client::Result<()> {
//! let client = ApolloClient::new(ClientConfig::new("http://cmdb.internal/api", "secret"))?;
//!
//! let host = client.query_resource_by_type_and_name("host", "host1").await?;
//! for rack in host.related("rack") {
//!     println!("{} sits in rack {:?}", host.type_name(), rack.id);
//! }
//!
//! client.close();
//! # Ok(())
//! # }
//! ```

use serde_json::Value;
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;

use crate::config::ClientConfig;
use crate::decode::{decode, RpcResult};
use crate::error::{ApolloError, Result};
use crate::protocol::{Operation, Params};
use crate::transport::HttpTransport;

/// Builds the parameter mapping of a call.
///
/// Evaluates to `serde_json::Result<Params>`; [`ApolloClient::invoke`] turns
/// an encoding failure into a transport error.
macro_rules! params {
    ($($key:literal => $value:expr),* $(,)?) => {
        (|| -> ::serde_json::Result<$crate::protocol::Params> {
            #[allow(unused_mut)]
            let mut params = $crate::protocol::Params::new();
            $( params.insert($key.to_string(), ::serde_json::to_value(&$value)?); )*
            Ok(params)
        })()
    };
}

mod mutation;
mod query;

/// Typed client for the Apollo CMDB service.
///
/// Safe for concurrent use through a shared reference; calls are independent
/// and unordered. The client is deliberately not `Clone`: [`close`](Self::close)
/// takes ownership, so it cannot run while a call still borrows the client.
pub struct ApolloClient {
    transport: HttpTransport,
    dispatch: Dispatch,
}

impl ApolloClient {
    /// Creates a client.
    ///
    /// No connection is made until the first call. Without an injected
    /// logger, events go to the dispatcher current at this point.
    ///
    /// # Errors
    ///
    /// Returns [`ApolloError::Config`] if the url or token is empty or invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let dispatch = config
            .logger
            .clone()
            .unwrap_or_else(|| tracing::dispatcher::get_default(Dispatch::clone));

        tracing::dispatcher::with_default(&dispatch, || -> Result<Self> {
            let transport = HttpTransport::new(&config).inspect_err(|e| {
                tracing::error!(error = %e, "apollo client creation failed");
            })?;

            tracing::info!(
                url = %config.url,
                timeout_ms = config.timeout.as_millis() as u64,
                "apollo client created"
            );

            Ok(Self {
                transport,
                dispatch: dispatch.clone(),
            })
        })
    }

    /// Releases pooled connections.
    pub fn close(self) {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::info!(url = %self.transport.uri(), "apollo client closed");
        });
    }

    /// Runs one operation and decodes its result.
    async fn invoke<T: RpcResult>(
        &self,
        op: &'static Operation,
        params: serde_json::Result<Params>,
    ) -> Result<T> {
        debug_assert_eq!(T::SHAPE, op.result, "{} decodes into {}", op.name, op.result);

        let call = async {
            let params = params.map_err(|e| {
                ApolloError::Transport(format!("Failed to encode params: {}", e))
            })?;
            debug_assert!(
                params.len() == op.params.len() && op.params.iter().all(|k| params.contains_key(*k)),
                "{} sends {:?}",
                op.name,
                op.params
            );

            let args = Value::Object(params.clone());
            let result = async {
                let body = self.transport.send(op.method, params).await?;
                decode::<T>(&body)
            }
            .await;

            if let Err(e) = &result {
                tracing::error!(
                    operation = op.name,
                    method = %op.method,
                    args = %args,
                    error = %e,
                    cause = ?std::error::Error::source(e),
                    "apollo operation failed"
                );
            }
            result
        };

        call.with_subscriber(self.dispatch.clone()).await
    }
}

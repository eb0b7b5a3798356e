//! Typed client for the Apollo CMDB service.
//!
//! The service speaks a small JSON-RPC-like protocol over HTTP: every call is
//! a POST of `{"method", "params", "jsonrpc": "2.0", "id": 0}` and every
//! answer is `{"jsonrpc", "id", "result"}`, where the shape of `result` is
//! fixed by the operation.
//!
//! # Architecture
//!
//! - **[`transport`]**: pooled hyper client, one POST per call
//! - **[`codec`]**: request envelope encoding, response envelope parsing
//! - **[`decode`]**: typed result decoding and normalization
//! - **[`protocol`]**: envelope types and the operation table
//! - **[`ApolloClient`]**: one async method per operation
//!
//! # Errors
//!
//! A call yields either a fully decoded value or one of the four
//! [`ApolloError`] kinds. The client never retries.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber. Inject
//! a dispatcher with [`ClientConfig::with_logger`] to route them explicitly.

pub mod client;
pub mod codec;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod protocol;
pub mod transport;

pub use client::ApolloClient;
pub use config::ClientConfig;
pub use decode::RpcResult;
pub use error::{ApolloError, ErrorKind, Result};
pub use model::*;
pub use protocol::{Method, Operation, ResultShape, OPERATIONS};

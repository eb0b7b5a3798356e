//! Transport layer.
//!
//! Every call is one HTTP POST of a JSON envelope to the configured endpoint,
//! carried over a pooled hyper client:
//! - the `token` header authenticates the call
//! - HTTP 502 is reported as [`ApolloError::BadGateway`](crate::ApolloError::BadGateway)
//! - any other status hands the body to the codec untouched
//!
//! Nothing is retried; each call is fire-once.
//!
//! # Components
//!
//! - **[`HttpTransport`]**: sends one envelope, returns the raw response body

pub mod http;

pub use http::HttpTransport;

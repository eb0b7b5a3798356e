//! Envelope codec.
//!
//! Turns an [`RpcRequest`] into request bytes and response bytes back into an
//! [`RpcResponse`] whose `result` is decoded into the shape the caller expects.
//! Any parse failure, malformed JSON or shape mismatch alike, becomes
//! [`ApolloError::DecodeFailed`] with the serde error kept as its source.

use serde::de::DeserializeOwned;

use crate::error::{ApolloError, Result};
use crate::protocol::{RpcRequest, RpcResponse};

/// JSON codec for the service's envelopes.
///
/// # Example
///
/// ```
/// use apollo_client::codec::EnvelopeCodec;
/// use apollo_client::protocol::{Params, RpcRequest, RpcResponse};
///
/// let request = RpcRequest::new("query.ci.types", Params::new());
/// let bytes = EnvelopeCodec::encode_request(&request).unwrap();
/// assert!(!bytes.is_empty());
///
/// let response: RpcResponse<Vec<String>> =
///     EnvelopeCodec::decode_response(br#"{"jsonrpc":"2.0","id":0,"result":["host"]}"#).unwrap();
/// assert_eq!(response.result, Some(vec!["host".to_string()]));
/// ```
pub struct EnvelopeCodec;

impl EnvelopeCodec {
    /// Encodes a request envelope.
    ///
    /// The output is pretty-printed; indentation carries no meaning on the
    /// wire.
    pub fn encode_request(request: &RpcRequest) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(request)
            .map_err(|e| ApolloError::Transport(format!("Failed to encode request: {}", e)))
    }

    /// Decodes a response envelope, parsing `result` as `T`.
    pub fn decode_response<T: DeserializeOwned>(data: &[u8]) -> Result<RpcResponse<T>> {
        serde_json::from_slice(data).map_err(ApolloError::DecodeFailed)
    }
}

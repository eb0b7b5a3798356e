//! RPC envelope types.
//!
//! The service speaks a fixed JSON-RPC-like shape:
//! - Request: `{"method": "...", "params": {...}, "jsonrpc": "2.0", "id": 0}`
//! - Response: `{"jsonrpc": "2.0", "id": <int>, "result": <shape>}`
//!
//! There is no error member; failures surface through the HTTP status or a
//! body that does not decode.

use serde::{Deserialize, Serialize};

use crate::decode::null_default;

/// Protocol version carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request identifier carried by every outgoing envelope.
pub const REQUEST_ID: i64 = 0;

/// Parameter mapping of a call.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Outgoing envelope. Always holds exactly `method`, `params`, `jsonrpc` and
/// `id`, whatever the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Wire method name, e.g. `query.resource`
    pub method: String,
    /// Parameter mapping (may be empty)
    pub params: Params,
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Request identifier, always 0
    pub id: i64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Params) -> Self {
        Self {
            method: method.into(),
            params,
            jsonrpc: JSONRPC_VERSION.into(),
            id: REQUEST_ID,
        }
    }
}

/// Incoming envelope with the result decoded into `T`.
///
/// Every member is optional on the wire and `null` reads as absent. A missing
/// or `null` result is reported as `None` and later replaced by the shape's
/// zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default, deserialize_with = "null_default")]
    pub jsonrpc: String,
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    pub result: Option<T>,
}

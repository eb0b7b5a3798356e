pub mod envelope;
pub mod operations;

#[cfg(test)]
mod tests;

pub use envelope::{Params, RpcRequest, RpcResponse, JSONRPC_VERSION, REQUEST_ID};
pub use operations::{operation, Method, Operation, ResultShape, OPERATIONS};

//! Error types for jsonlite decoding and dispatch.
//!
//! Decoding is deliberately best-effort: malformed bracket structure and
//! unresolvable segments degrade to partial values rather than errors (see
//! the crate docs). The only condition that aborts a decode is exceeding the
//! nesting depth limit.

use thiserror::Error;

/// Errors that can occur during decoding or RPC dispatch.
#[derive(Error, Debug)]
pub enum JsonLiteError {
    /// Input nesting drove the node parser past its recursion limit.
    #[error("nesting depth exceeded the limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A registered RPC handler reported a failure.
    #[error("RPC handler {method} failed: {message}")]
    Call { method: String, message: String },
}

/// Convenience alias used throughout jsonlite-core.
pub type Result<T> = std::result::Result<T, JsonLiteError>;

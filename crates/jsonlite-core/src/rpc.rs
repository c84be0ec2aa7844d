//! RPC envelope — a method+params call encoded as a jsonlite mapping.
//!
//! [`encode_call`] builds the wire form; [`dispatch`] decodes one and routes
//! it into a [`CapabilitySet`], a dispatch table the capability owner
//! registers up front. There is no reflection: a method is reachable only if
//! a handler was registered under `method_prefix + method`, so the prefix is
//! the security boundary — an envelope can never address a name that does
//! not start with it.
//!
//! # Example
//! ```
//! use jsonlite_core::{dispatch, encode_call, CapabilitySet, Outcome, Value};
//!
//! let caps = CapabilitySet::new().register("rpc_add", |params| {
//!     let sum = params.iter().filter_map(Value::as_i64).sum();
//!     Ok(Value::Int(sum))
//! });
//!
//! let text = encode_call("add", &[Value::Int(2), Value::Int(3)]);
//! let (outcome, _envelope) = dispatch(&text, &caps, "rpc_").unwrap();
//! assert_eq!(outcome, Outcome::Called(Value::Int(5)));
//! ```

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::{JsonLiteError, Result};
use crate::types::Value;
use std::collections::HashMap;

/// A registered capability. Receives the envelope's params positionally;
/// failures are reported as a message and surface as
/// [`JsonLiteError::Call`].
pub type Handler = Box<dyn Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync>;

/// The dispatch table: qualified method name → handler.
#[derive(Default)]
pub struct CapabilitySet {
    handlers: HashMap<String, Handler>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its full qualified name (prefix included).
    pub fn register<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    /// True if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}

/// What [`dispatch`] did with an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A handler matched and ran; its result.
    Called(Value),
    /// The envelope was not a call, or no handler matched the qualified
    /// name. A normal outcome, not an error.
    NoCall,
}

/// Encode a call envelope: `{"method": method, "params": [...]}`.
pub fn encode_call(method: &str, params: &[Value]) -> String {
    let envelope = Value::Mapping(vec![
        ("method".to_string(), Value::Text(method.to_string())),
        ("params".to_string(), Value::Sequence(params.to_vec())),
    ]);
    encode(&envelope)
}

/// Decode `text` and, if it is a well-shaped call, invoke the matching
/// capability.
///
/// A call is a mapping with a `method` key holding text and a `params` key
/// holding a sequence. The qualified name is `method_prefix` concatenated
/// with the method text; only an exact match against a registered handler
/// runs. Every other shape yields [`Outcome::NoCall`].
///
/// The decoded envelope is returned alongside the outcome either way, so
/// callers can inspect envelopes that did not dispatch. Errors are
/// [`JsonLiteError::DepthExceeded`] from the decode and
/// [`JsonLiteError::Call`] when a matched handler fails.
pub fn dispatch(
    text: &str,
    capability_set: &CapabilitySet,
    method_prefix: &str,
) -> Result<(Outcome, Value)> {
    let envelope = decode(text)?;

    let call = {
        let method = envelope.get("method").and_then(Value::as_text);
        let params = envelope.get("params").and_then(Value::as_sequence);
        match (method, params) {
            (Some(method), Some(params)) => {
                let qualified = format!("{method_prefix}{method}");
                capability_set.handlers.get(&qualified).map(|handler| {
                    handler(params).map_err(|message| JsonLiteError::Call {
                        method: qualified,
                        message,
                    })
                })
            }
            _ => None,
        }
    };

    match call {
        Some(Ok(result)) => Ok((Outcome::Called(result), envelope)),
        Some(Err(error)) => Err(error),
        None => Ok((Outcome::NoCall, envelope)),
    }
}

//! # jsonlite-core
//!
//! Self-contained JSON codec with a non-standard extended-escaping scheme,
//! plus a thin RPC envelope built on top of it.
//!
//! The decoder is the interesting part: instead of a conventional tokenizer
//! it runs a two-pass "boundary scan + placeholder substitution" algorithm —
//! locate every structural bracket, match them recursively through a shared
//! cursor, splice nested regions out as `&i` placeholders, then split on
//! commas. That only works because the encoder hex-escapes `,` `[` `]` `{`
//! `}` inside every string literal, so those bytes are always structural in
//! self-produced text.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonlite_core::{decode, encode, Value};
//!
//! let value = Value::Mapping(vec![
//!     ("name".to_string(), Value::Text("Alice".to_string())),
//!     ("scores".to_string(), Value::Sequence(vec![Value::Int(95), Value::Int(87)])),
//! ]);
//!
//! let text = encode(&value);
//! assert_eq!(text, r#"{"name":"Alice","scores":[95,87]}"#);
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ## Compatibility
//!
//! Output from [`encode`] is syntactically valid standard JSON (hex escapes
//! are legal), and ASCII-only documents read identically under any JSON
//! parser. Non-ASCII text is escaped per byte, so a standard parser sees one
//! character per UTF-8 byte; only [`decode`] reassembles the original text.
//! The reverse direction is stricter still: [`decode`] is only guaranteed
//! correct on extended-escaped input. Standard JSON whose strings contain
//! raw `,` `[` `]` `{` or `}` will confuse the boundary scan and comma
//! split. Both are deliberate one-way tradeoffs, not bugs to patch around.
//!
//! Decoding is best-effort by design: structurally malformed input yields a
//! partial value rather than an error, and the only hard failure is the
//! nesting depth limit. See [`decoder`] for the full policy.
//!
//! ## Modules
//!
//! - [`encoder`] — [`Value`] → extended-escaped JSON text
//! - [`decoder`] — text → [`Value`] via the boundary-scan node parser
//! - [`escape`] — the extended string escaper/unescaper
//! - [`scanner`] — structural bracket location pass
//! - [`adapter`] — generic-container classification + serde_json interop
//! - [`rpc`] — call envelope encoding and prefix-gated dispatch
//! - [`error`] — error types
//! - [`types`] — the [`Value`] model

pub mod adapter;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod rpc;
pub mod scanner;
pub mod types;

pub use adapter::{classify, Key};
pub use decoder::{decode, MAX_DEPTH};
pub use encoder::encode;
pub use error::{JsonLiteError, Result};
pub use escape::{escape, unescape};
pub use rpc::{dispatch, encode_call, CapabilitySet, Handler, Outcome};
pub use scanner::{scan, Boundary};
pub use types::Value;

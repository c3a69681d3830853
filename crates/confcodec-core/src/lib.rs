//! # confcodec-core
//!
//! Encoder and decoder for an indentation-structured configuration format:
//! ordered mappings of string keys, sequences, and typed scalars.
//!
//! ```text
//! # connection settings
//! database:
//!   host: localhost
//!   port: 5432
//!   replicas:
//!     - db-1.internal
//!     - db-2.internal
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use confcodec_core::{decode, encode};
//!
//! let doc = "name: orders\nretry:\n  attempts: 3\n";
//! let value = decode(doc);
//! assert_eq!(value.get("retry").and_then(|r| r.get("attempts")).and_then(|a| a.as_i64()), Some(3));
//!
//! // Value -> text (roundtrip)
//! assert_eq!(encode(&value), doc);
//! ```
//!
//! Decoding is lenient by default: unrecognized lines are skipped and the
//! result is always a mapping. Use [`decode_with`] with
//! [`DecodeOptions::strict`] to reject them instead.
//!
//! ## Modules
//!
//! - [`decoder`]: text → [`Value`]
//! - [`encoder`]: [`Value`] → text
//! - [`line`]: physical line classification and indentation width
//! - [`scalar`]: token ↔ scalar coercion and quoting
//! - [`value`]: the [`Value`] / [`Mapping`] tree and its JSON bridge
//! - [`options`]: decode and encode settings
//! - [`error`]: [`CodecError`]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod line;
pub mod options;
pub mod scalar;
pub mod value;

pub use decoder::{decode, decode_with};
pub use encoder::{encode, encode_with};
pub use error::{CodecError, Result};
pub use line::{classify, Line, LineKind};
pub use options::{DecodeOptions, EncodeOptions};
pub use scalar::{coerce, format_scalar};
pub use value::{from_json_str, to_json_string, Mapping, Number, Value};

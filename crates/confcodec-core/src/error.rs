//! Error types for decoding and the JSON bridge.

use thiserror::Error;

/// Errors that can occur while decoding a document or converting from JSON.
///
/// Lenient decoding never produces an error; only [`crate::decode_with`] in
/// strict mode and the JSON helpers do.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A line that lenient decoding would have skipped.
    /// `line` is 1-based; `content` is the raw line without its terminator.
    #[error("malformed document at line {line}: {content:?}")]
    MalformedDocument { line: usize, content: String },

    /// A JSON document whose root is not an object cannot become a config
    /// document, since decoded roots are always mappings.
    #[error("document root must be a mapping, found {found}")]
    NonMappingRoot { found: &'static str },

    /// The input string was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout confcodec-core.
pub type Result<T> = std::result::Result<T, CodecError>;

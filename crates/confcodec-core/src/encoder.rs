//! Encoder: a [`Value`] tree back into indentation-structured text.
//!
//! - Mapping entries are written as `key: value` in insertion order. A non-empty
//!   nested container is written as `key:` followed by its body one level deeper.
//! - Sequence items are written as `- value`. A non-empty nested container is
//!   written as a bare `- ` marker followed by its body one level deeper.
//! - Empty mappings are `key:` (or a bare `- `); empty sequences are `[]`.
//!
//! Every emitted line ends with `\n`.
//!
//! # Example
//! ```
//! use confcodec_core::{encode, Mapping, Value};
//!
//! let mut root = Mapping::new();
//! root.insert("name", Value::from("orders"));
//! root.insert("ports", Value::from(vec![Value::from(5432_i64), Value::from(5433_i64)]));
//! assert_eq!(encode(&Value::Mapping(root)), "name: orders\nports:\n  - 5432\n  - 5433\n");
//! ```

use crate::options::{EncodeOptions, INDENT_UNIT};
use crate::scalar::format_scalar;
use crate::value::{Mapping, Value};

/// Encode a value starting at depth zero.
///
/// Keys are written verbatim and are not checked. An empty key becomes the
/// line `: value`, which the decoder skips, and a key containing `: ` splits
/// at the wrong colon on the way back.
pub fn encode(value: &Value) -> String {
    encode_with(value, &EncodeOptions::default())
}

/// Encode a value with its outermost lines at `options.indent` levels.
pub fn encode_with(value: &Value, options: &EncodeOptions) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(map) => encode_mapping(map, options.indent, &mut out),
        Value::Sequence(items) if !items.is_empty() => {
            encode_sequence(items, options.indent, &mut out)
        }
        scalar => {
            push_indent(options.indent, &mut out);
            out.push_str(&format_scalar(scalar));
            out.push('\n');
        }
    }
    out
}

fn encode_mapping(map: &Mapping, depth: usize, out: &mut String) {
    for (key, value) in map.iter() {
        push_indent(depth, out);
        out.push_str(key);
        match value {
            Value::Mapping(nested) => {
                out.push_str(":\n");
                encode_mapping(nested, depth + 1, out);
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push_str(":\n");
                encode_sequence(items, depth + 1, out);
            }
            scalar => {
                out.push_str(": ");
                out.push_str(&format_scalar(scalar));
                out.push('\n');
            }
        }
    }
}

fn encode_sequence(items: &[Value], depth: usize, out: &mut String) {
    for item in items {
        push_indent(depth, out);
        match item {
            Value::Mapping(nested) => {
                out.push_str("- \n");
                encode_mapping(nested, depth + 1, out);
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                out.push_str("- \n");
                encode_sequence(nested, depth + 1, out);
            }
            scalar => {
                out.push_str("- ");
                out.push_str(&format_scalar(scalar));
                out.push('\n');
            }
        }
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT_UNIT);
    }
}

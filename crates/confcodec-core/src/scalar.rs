//! Scalar coercion: bare text tokens to typed values and back.
//!
//! [`coerce`] is applied to every value token the decoder reads; [`format_scalar`]
//! is its inverse and is what the encoder writes after `key: ` and `- `.
//! The quoting rules in [`format_scalar`] are derived from [`coerce`]: a string
//! is emitted bare only when coercing the bare form gives the same string back.

use crate::value::{Mapping, Number, Value};

/// Convert a trimmed value token into a typed value.
///
/// Inference order: keywords (`true`, `false`, `null`, `~`), empty string,
/// empty containers (`[]`, `{}`), integers, decimals, quoted strings, and
/// finally the verbatim text.
///
/// Double-quoted text unescapes `\"`, `\\`, `\n`, `\r` and `\t`, so a Windows
/// path such as `"C:\new\table"` reads back with a newline and a tab in it.
/// Write such values single-quoted (`'C:\new\table'`), which are taken literally.
pub fn coerce(text: &str) -> Value {
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "~" => return Value::Null,
        "" => return Value::String(String::new()),
        "[]" => return Value::Sequence(Vec::new()),
        "{}" => return Value::Mapping(Mapping::new()),
        _ => {}
    }

    if is_integer(text) {
        return match text.parse::<i64>() {
            Ok(i) => Value::Number(Number::Int(i)),
            // Digits beyond i64 still read as a number, just not exactly.
            // Beyond f64 they stay text.
            Err(_) => parse_float(text),
        };
    }

    if is_decimal(text) {
        return parse_float(text);
    }

    if let Some(inner) = strip_quote_pair(text, '"') {
        return Value::String(unescape(inner));
    }
    if let Some(inner) = strip_quote_pair(text, '\'') {
        return Value::String(inner.to_string());
    }

    Value::String(text.to_string())
}

/// Render a scalar (or an empty container) as a value token.
///
/// Non-empty mappings and sequences have no single-token form; they render as
/// `null` here and are laid out by the encoder instead.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => format_string(s),
        Value::Sequence(items) if items.is_empty() => "[]".to_string(),
        Value::Mapping(map) if map.is_empty() => "{}".to_string(),
        Value::Sequence(_) | Value::Mapping(_) => "null".to_string(),
    }
}

/// Integers print as-is. Floats print in shortest round-trip form without
/// exponents and always carry a `.` so they read back as floats.
fn format_number(n: &Number) -> String {
    match *n {
        Number::Int(i) => i.to_string(),
        Number::Float(f) if !f.is_finite() => "null".to_string(),
        Number::Float(f) => {
            let mut s = f.to_string();
            if !s.contains('.') {
                s.push_str(".0");
            }
            s
        }
    }
}

fn format_string(s: &str) -> String {
    if needs_quoting(s) {
        quote(s)
    } else {
        s.to_string()
    }
}

/// A string needs quotes if it carries structural characters, or if its bare
/// form would decode to something other than itself.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s != s.trim() {
        return true;
    }
    if s.contains([':', '#', '\n', '\r', '\t']) {
        return true;
    }
    if s.starts_with(['-', '[', '{']) {
        return true;
    }
    !matches!(coerce(s), Value::String(ref t) if t == s)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Reverse the escapes written by [`quote`]. Unknown sequences are kept verbatim.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn strip_quote_pair(text: &str, quote: char) -> Option<&str> {
    if text.len() >= 2 {
        text.strip_prefix(quote)?.strip_suffix(quote)
    } else {
        None
    }
}

fn parse_float(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Number(Number::Float(f)),
        _ => Value::String(text.to_string()),
    }
}

/// `-?digits`
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `-?digits.digits`
fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

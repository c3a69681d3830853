/// Property-based roundtrip tests.
///
/// Uses `proptest` to generate random value trees and verify that
/// `decode(encode(v)) == v` and `encode(decode(encode(v))) == encode(v)` hold.
///
/// Strategies generate:
/// - Strings with edge cases (empty, padded, keyword-like, numeric-like,
///   structural characters, escapes, unicode)
/// - Integers across the i64 range and floats with a few decimal places
/// - Mappings with simple keys, sequences of scalars, and nested containers
///   (mappings and sequences inside sequences included)
///
/// Keys are restricted to identifier-like text: keys are written verbatim, so
/// a key containing `:` or starting with `#` or `- ` cannot be read back.
use confcodec_core::{coerce, decode, encode, format_scalar, Mapping, Number, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_.]{0,15}").unwrap()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        prop::string::string_regex("[a-zA-Z0-9:#,\\[\\]{}\\-\\.'\" ]{0,20}").unwrap(),
        Just(String::new()),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        Just("~".to_string()),
        Just("42".to_string()),
        Just("-3.25".to_string()),
        Just("007".to_string()),
        Just("[]".to_string()),
        Just("{}".to_string()),
        Just("- item".to_string()),
        Just("-".to_string()),
        Just("# note".to_string()),
        Just("key: value".to_string()),
        " [a-zA-Z]{1,10} ",
        Just("line1\nline2".to_string()),
        Just("col1\tcol2".to_string()),
        Just("path\\to\\file".to_string()),
        Just("say \"hi\"".to_string()),
        Just("'single'".to_string()),
        Just("caf\u{00e9}".to_string()),
        Just("\u{4f60}\u{597d}".to_string()),
    ]
}

/// Floats built as mantissa / 10^n so they always print back exactly.
fn arb_float() -> impl Strategy<Value = f64> {
    (-100_000_000i64..100_000_000i64, 0u32..5u32)
        .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32))
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => arb_string().prop_map(Value::String),
        2 => any::<i64>().prop_map(|i| Value::Number(Number::Int(i))),
        1 => arb_float().prop_map(|f| Value::Number(Number::Float(f))),
        1 => any::<bool>().prop_map(Value::Bool),
        1 => Just(Value::Null),
    ]
}

fn arb_mapping(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Mapping> {
    prop::collection::vec((arb_key(), inner), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<Mapping>())
}

/// A value tree up to `depth` container levels below the root.
fn arb_value(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        return arb_scalar().boxed();
    }
    prop_oneof![
        4 => arb_scalar(),
        2 => arb_mapping(arb_value(depth - 1)).prop_map(Value::Mapping),
        2 => prop::collection::vec(arb_value(depth - 1), 0..5).prop_map(Value::Sequence),
    ]
    .boxed()
}

fn arb_document() -> impl Strategy<Value = Value> {
    arb_mapping(arb_value(3)).prop_map(Value::Mapping)
}

/// Flat documents: scalar values and sequences of scalars only.
fn arb_flat_document() -> impl Strategy<Value = Value> {
    let entry = prop_oneof![
        3 => arb_scalar(),
        1 => prop::collection::vec(arb_scalar(), 0..6).prop_map(Value::Sequence),
    ];
    arb_mapping(entry).prop_map(Value::Mapping)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn flat_documents_roundtrip(doc in arb_flat_document()) {
        let text = encode(&doc);
        prop_assert_eq!(decode(&text), doc, "text:\n{}", text);
    }

    #[test]
    fn nested_documents_roundtrip(doc in arb_document()) {
        let text = encode(&doc);
        prop_assert_eq!(decode(&text), doc, "text:\n{}", text);
    }

    #[test]
    fn reencode_is_idempotent(doc in arb_document()) {
        let text = encode(&doc);
        prop_assert_eq!(encode(&decode(&text)), text);
    }

    #[test]
    fn scalars_survive_format_then_coerce(scalar in arb_scalar()) {
        prop_assert_eq!(coerce(&format_scalar(&scalar)), scalar);
    }

    #[test]
    fn strings_with_colon_are_quoted(prefix in "[a-z]{0,8}", suffix in "[a-z ]{0,8}") {
        let s = format!("{prefix}:{suffix}");
        let formatted = format_scalar(&Value::String(s.clone()));
        prop_assert!(formatted.starts_with('"') && formatted.ends_with('"'));
        prop_assert_eq!(coerce(&formatted), Value::String(s));
    }

    #[test]
    fn tabs_decode_like_two_spaces(doc in arb_document()) {
        let spaced = encode(&doc);
        let tabbed: String = spaced
            .lines()
            .map(|line| {
                let body = line.trim_start_matches(' ');
                let tabs = (line.len() - body.len()) / 2;
                format!("{}{}\n", "\t".repeat(tabs), body)
            })
            .collect();
        prop_assert_eq!(decode(&tabbed), decode(&spaced));
    }

    #[test]
    fn decode_never_panics(text in "[ \\t\\-#:a-z0-9\\n\"']{0,200}") {
        let value = decode(&text);
        prop_assert!(value.as_mapping().is_some());
    }
}

#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query parameter store tests
///
/// This test suite covers:
/// - Construction from strings, objects and options
/// - Persistent mutation (append, set, delete, append_all)
/// - Reads and serialization
/// - Custom codecs
use qparams::{ParamValue, ParameterCodec, ParamsError, ParamsOptions, QueryParams, StrictCodec};

fn all<C: ParameterCodec>(params: &QueryParams<C>, key: &str) -> Option<Vec<String>> {
    params.get_all(key).map(<[String]>::to_vec)
}

#[test]
fn test_parse_scenario() {
    let params = QueryParams::parse("?a=1&b=2&a=3");
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(all(&params, "a"), Some(vec!["1".to_string(), "3".to_string()]));
    assert_eq!(params.get("a"), Some("1"));
    assert_eq!(params.get("b"), Some("2"));
}

#[test]
fn test_parse_empty() {
    let params = QueryParams::parse("");
    assert!(params.is_empty());
    assert_eq!(params.len(), 0);
    assert!(!params.has(""));
}

#[test]
fn test_parse_no_value() {
    let params = QueryParams::parse("key1&key2=value2");
    assert_eq!(params.get("key1"), Some(""));
    assert_eq!(params.get("key2"), Some("value2"));
}

#[test]
fn test_from_str_and_from() {
    let parsed: QueryParams = "x=1".parse().unwrap();
    assert_eq!(parsed.get("x"), Some("1"));
    assert_eq!(QueryParams::from("?y=2").get("y"), Some("2"));
    assert_eq!(QueryParams::from(String::from("z=3")).get("z"), Some("3"));
}

#[test]
fn test_append_order() {
    let params = QueryParams::new().append("a", "1").append("a", "2");
    assert_eq!(all(&params, "a"), Some(vec!["1".to_string(), "2".to_string()]));
}

#[test]
fn test_append_stringifies() {
    let params = QueryParams::new()
        .append("n", 42)
        .append("f", 1.5)
        .append("b", false);
    assert_eq!(params.to_string(), "n=42&f=1.5&b=false");
}

#[test]
fn test_mutation_returns_new_store() {
    let base = QueryParams::parse("a=1");
    let appended = base.append("b", "2");
    let deleted = base.delete("a", None);

    assert!(!base.has("b"));
    assert!(base.has("a"));
    assert!(appended.has("a") && appended.has("b"));
    assert!(!deleted.has("a"));
}

#[test]
fn test_parse_many_distinct_keys() {
    let query = (0..100_000)
        .map(|i| format!("k{i}=v{i}"))
        .collect::<Vec<_>>()
        .join("&");
    let params = QueryParams::parse(&query);
    assert_eq!(params.len(), 100_000);
    assert_eq!(params.keys().next(), Some("k0"));
    assert_eq!(params.get("k99999"), Some("v99999"));
}

#[test]
fn test_replay_many_distinct_keys() {
    let params = QueryParams::new()
        .append_all((0..50_000).map(|i| (format!("k{i}"), i)))
        .delete("k0", None)
        .append("k0", "again");
    assert_eq!(params.len(), 50_000);
    assert_eq!(params.keys().last(), Some("k0"));
    assert_eq!(params.get("k49999"), Some("49999"));
}

#[test]
fn test_long_chain_reads_correctly() {
    let mut params = QueryParams::new();
    for i in 0..1000 {
        params = params.append("i", i);
    }
    let values = params.get_all("i").unwrap();
    assert_eq!(values.len(), 1000);
    assert_eq!(values[0], "0");
    assert_eq!(values[999], "999");
}

#[test]
fn test_set_accumulates_like_append() {
    let params = QueryParams::new().set("x", "1").set("x", "2");
    assert_eq!(all(&params, "x"), Some(vec!["1".to_string(), "2".to_string()]));
}

#[test]
fn test_set_on_empty_store() {
    let params = QueryParams::new().set("x", "only");
    assert_eq!(params.get("x"), Some("only"));
    assert_eq!(params.to_string(), "x=only");
}

#[test]
fn test_set_keeps_existing_values() {
    let params = QueryParams::parse("x=1").set("x", "2");
    assert_eq!(all(&params, "x"), Some(vec!["1".to_string(), "2".to_string()]));
}

#[test]
fn test_delete_value() {
    let params = QueryParams::new()
        .append("a", "1")
        .append("a", "2")
        .delete("a", Some("1"));
    assert_eq!(all(&params, "a"), Some(vec!["2".to_string()]));
}

#[test]
fn test_delete_first_occurrence_only() {
    let params = QueryParams::parse("a=1&a=2&a=1").delete("a", Some("1"));
    assert_eq!(params.to_string(), "a=2&a=1");
}

#[test]
fn test_delete_last_value_removes_key() {
    let params = QueryParams::parse("a=1&b=2").delete("a", Some("1"));
    assert!(!params.has("a"));
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn test_delete_key() {
    let params = QueryParams::new().append("a", "1").delete("a", None);
    assert!(!params.has("a"));
    assert_eq!(params.get("a"), None);
    assert_eq!(params.get_all("a"), None);
}

#[test]
fn test_delete_missing_is_noop() {
    let params = QueryParams::parse("a=1")
        .delete("a", Some("nope"))
        .delete("missing", None)
        .delete("missing", Some("1"));
    assert_eq!(params.to_string(), "a=1");
}

#[test]
fn test_delete_then_append_moves_key_to_end() {
    let params = QueryParams::parse("a=1&b=2").delete("a", None).append("a", "3");
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(params.to_string(), "b=2&a=3");
}

#[test]
fn test_append_all() {
    let params = QueryParams::new().append_all([
        ("a", ParamValue::from([1, 2])),
        ("b", ParamValue::from("x")),
        ("a", ParamValue::from(3)),
    ]);
    assert_eq!(params.to_string(), "a=1&a=2&a=3&b=x");
}

#[test]
fn test_append_all_empty_sequence_adds_nothing() {
    let empty: Vec<String> = Vec::new();
    let params = QueryParams::new().append_all([("a", empty)]);
    assert!(!params.has("a"));
}

#[test]
fn test_from_object_scenario() {
    let params = QueryParams::from_object([
        ("a", ParamValue::from([1, 2])),
        ("b", ParamValue::from(true)),
    ]);
    assert_eq!(params.to_string(), "a=1&a=2&b=true");
}

#[test]
fn test_from_object_values_are_strings() {
    let params = QueryParams::from_object([("n", 7)]).delete("n", Some("7"));
    assert!(!params.has("n"));
}

#[test]
fn test_from_object_empty_sequence() {
    let empty: [&str; 0] = [];
    let params = QueryParams::from_object([("a", ParamValue::from(empty)), ("b", "1".into())]);
    assert!(params.has("a"));
    assert_eq!(params.get("a"), None);
    assert_eq!(params.get_all("a"), Some(&[][..]));
    assert_eq!(params.to_string(), "b=1");
}

#[test]
fn test_delete_value_drops_empty_sequence_key() {
    let empty: [&str; 0] = [];
    let params = QueryParams::from_object([("a", ParamValue::from(empty)), ("b", "1".into())]);
    let deleted = params.delete("a", Some("anything"));
    assert!(!deleted.has("a"));
    assert_eq!(deleted.keys().collect::<Vec<_>>(), vec!["b"]);
    assert!(params.has("a"));
}

#[test]
fn test_options_query() {
    let params = QueryParams::with_options(ParamsOptions::new().query("a=1")).unwrap();
    assert_eq!(params.get("a"), Some("1"));
}

#[test]
fn test_options_object() {
    let params = QueryParams::with_options(ParamsOptions::new().object([("a", "b")])).unwrap();
    assert_eq!(params.to_string(), "a=b");
}

#[test]
fn test_options_empty() {
    let params = QueryParams::with_options(ParamsOptions::new()).unwrap();
    assert!(params.is_empty());
    assert_eq!(params.to_string(), "");
}

#[test]
fn test_options_sources_are_mutually_exclusive() {
    let options = ParamsOptions::new().query("a=1").object([("b", "2")]);
    let err = QueryParams::with_options(options).unwrap_err();
    assert_eq!(err, ParamsError::MutuallyExclusiveSources);
    assert!(err.to_string().contains("mutually exclusive"));
}

#[test]
fn test_options_codec() {
    let options = ParamsOptions::new().query("p=%2Fx").codec(StrictCodec);
    let params = QueryParams::with_options(options).unwrap();
    assert_eq!(params.get("p"), Some("/x"));
    assert_eq!(params.to_string(), "p=%2Fx");
}

#[test]
fn test_to_string_encoding() {
    let params = QueryParams::new()
        .append("q", "x y")
        .append("route", "/a/b?c=d")
        .append("amp", "a&b")
        .append("k e y", "v");
    assert_eq!(
        params.to_string(),
        "q=x%20y&route=/a/b?c=d&amp=a%26b&k%20e%20y=v"
    );
}

#[test]
fn test_serialize_with_question_mark() {
    assert_eq!(QueryParams::parse("a=1").serialize(), "?a=1");
    assert_eq!(QueryParams::new().serialize(), "");
}

#[test]
fn test_display_matches_to_string() {
    let params = QueryParams::parse("a=1&b=x%20y");
    assert_eq!(format!("{params}"), params.to_string());
}

#[test]
fn test_round_trip() {
    let params = QueryParams::new()
        .append("path", "/home/user")
        .append("email", "me@example.com")
        .append("list", "a,b;c")
        .append("space", "x y")
        .append("uni", "日本");
    let serialized = params.to_string();
    assert_eq!(QueryParams::parse(&serialized).to_string(), serialized);
    assert_eq!(QueryParams::parse(&serialized), params);
}

#[test]
fn test_iter_pairs() {
    let params = QueryParams::parse("a=1&b=2&a=3");
    let pairs: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("a", "3"), ("b", "2")]);
}

#[test]
fn test_clone_shares_snapshot() {
    let params = QueryParams::new().append("a", "1");
    let copy = params.clone();
    assert_eq!(copy, params);
    assert_eq!(copy.get("a"), Some("1"));
    assert_eq!(params.get("a"), Some("1"));
}

#[test]
fn test_equality_ignores_history() {
    let built = QueryParams::new().append("a", "1").append("b", "2");
    let parsed = QueryParams::parse("a=1&b=2");
    assert_eq!(built, parsed);
    assert_ne!(built, QueryParams::parse("b=2&a=1"));
}

#[test]
fn test_debug_shows_map() {
    let params = QueryParams::parse("a=1");
    assert_eq!(format!("{params:?}"), r#"{"a": ["1"]}"#);
}

/// Codec that upper-cases keys on the wire
struct UpperKeys;

impl ParameterCodec for UpperKeys {
    fn encode_key(&self, key: &str) -> String {
        key.to_uppercase()
    }

    fn encode_value(&self, value: &str) -> String {
        value.to_string()
    }

    fn decode_key(&self, key: &str) -> String {
        key.to_lowercase()
    }

    fn decode_value(&self, value: &str) -> String {
        value.to_string()
    }
}

#[test]
fn test_custom_codec_used_for_parse_and_serialize() {
    let params = QueryParams::parse_with_codec("A=1&b=2", UpperKeys);
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);

    let next = params.append("c", "3");
    assert_eq!(next.to_string(), "A=1&B=2&C=3");
}

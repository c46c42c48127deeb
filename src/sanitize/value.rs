//! Marker-guided redaction of JSON value trees.
//!
//! A value tree is walked together with a sensitivity marker tree of the same
//! shape space. A marker of `true` replaces the whole subtree at that
//! position; an object or array marker descends into matching children; any
//! other combination leaves the value untouched.

use serde_json::{Map, Value};
use tracing::trace;

/// Suffixes of derived attributes that inherit the sensitivity of their base
/// attribute, e.g. `content_base64sha256` for `content`.
pub const AUXILIARY_SUFFIXES: [&str; 8] = [
    "_base64",
    "_base64sha1",
    "_base64sha256",
    "_base64sha512",
    "_md5",
    "_sha1",
    "_sha256",
    "_sha512",
];

/// Replaces every position of `value` marked sensitive by `sensitive` with
/// `replace_with`, in place.
///
/// Returns the number of substitutions made. A null value is never replaced,
/// and a marker whose shape does not match the value is ignored.
pub fn sanitize_value(value: &mut Value, sensitive: &Value, replace_with: &Value) -> usize {
    if value.is_null() {
        return 0;
    }

    if is_marked(sensitive) {
        *value = replace_with.clone();
        return 1;
    }

    match (value, sensitive) {
        (Value::Array(values), Value::Array(markers)) => values
            .iter_mut()
            .zip(markers)
            .map(|(item, marker)| sanitize_value(item, marker, replace_with))
            .sum(),
        (Value::Object(values), Value::Object(markers)) => {
            let mut redacted = 0;
            for (key, marker) in markers {
                let Some(item) = values.get_mut(key) else {
                    continue;
                };
                redacted += sanitize_value(item, marker, replace_with);
                // Siblings marked `true` themselves are replaced by this loop.
                redacted += redact_auxiliary(key, values, marker, replace_with, |name| {
                    markers.get(name).is_some_and(is_marked)
                });
            }
            redacted
        }
        // Scalars, and containers whose marker has a different shape.
        _ => 0,
    }
}

/// Redacts the derived siblings of `field` (see [`AUXILIARY_SUFFIXES`]) when
/// `sensitive` is exactly `true`.
///
/// Only siblings that exist and are not null are replaced; no keys are added.
pub fn sanitize_auxiliary(
    field: &str,
    siblings: &mut Map<String, Value>,
    sensitive: &Value,
    replace_with: &Value,
) -> usize {
    redact_auxiliary(field, siblings, sensitive, replace_with, |_| false)
}

fn redact_auxiliary(
    field: &str,
    siblings: &mut Map<String, Value>,
    sensitive: &Value,
    replace_with: &Value,
    skip: impl Fn(&str) -> bool,
) -> usize {
    if !is_marked(sensitive) {
        return 0;
    }

    let mut redacted = 0;
    let mut name = String::with_capacity(field.len() + 16);
    for suffix in AUXILIARY_SUFFIXES {
        name.clear();
        name.push_str(field);
        name.push_str(suffix);

        if skip(&name) {
            continue;
        }
        if let Some(sibling) = siblings.get_mut(&name).filter(|s| !s.is_null()) {
            trace!("Redacting auxiliary attribute {name}");
            *sibling = replace_with.clone();
            redacted += 1;
        }
    }
    redacted
}

const fn is_marked(sensitive: &Value) -> bool {
    matches!(sensitive, Value::Bool(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn redacted() -> Value {
        json!("REDACTED_SENSITIVE")
    }

    #[test]
    fn test_null_value_is_kept() {
        let mut value = Value::Null;
        assert_eq!(sanitize_value(&mut value, &json!(true), &redacted()), 0);
        assert!(value.is_null());
    }

    #[test]
    fn test_true_marker_replaces_any_type() {
        for original in [json!("secret"), json!(42), json!(false), json!([1, 2]), json!({"a": 1})] {
            let mut value = original;
            assert_eq!(sanitize_value(&mut value, &json!(true), &redacted()), 1);
            assert_eq!(value, redacted());
        }
    }

    #[test]
    fn test_false_or_absent_marker_is_noop() {
        let original = json!({"a": "x", "b": [1, 2, 3], "c": {"d": true}});
        for marker in [json!(false), Value::Null, json!({}), json!({"zzz": true})] {
            let mut value = original.clone();
            assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 0);
            assert_eq!(value, original);
        }
    }

    #[test]
    fn test_nested_object_marker() {
        let mut value = json!({"qux": {"a": {"b": "foo"}, "c": "bar"}});
        let marker = json!({"qux": {"c": true}});
        assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 1);
        assert_eq!(value, json!({"qux": {"a": {"b": "foo"}, "c": "REDACTED_SENSITIVE"}}));
    }

    #[test]
    fn test_empty_marker_object_descends_without_change() {
        let original = json!({"qux": {"a": {"b": "foo"}, "c": "bar"}});
        let mut value = original.clone();
        sanitize_value(&mut value, &json!({"qux": {}}), &redacted());
        assert_eq!(value, original);
    }

    #[test]
    fn test_array_marker_shorter_than_value() {
        let mut value = json!(["a", "b", "c"]);
        let marker = json!([true]);
        assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 1);
        assert_eq!(value, json!(["REDACTED_SENSITIVE", "b", "c"]));
    }

    #[test]
    fn test_array_marker_longer_than_value() {
        let mut value = json!(["a"]);
        let marker = json!([false, true, true]);
        assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 0);
        assert_eq!(value, json!(["a"]));
    }

    #[test]
    fn test_array_of_objects() {
        let mut value = json!([{"password": "p1", "user": "u1"}, {"password": "p2", "user": "u2"}]);
        let marker = json!([{"password": true}, {}]);
        sanitize_value(&mut value, &marker, &redacted());
        assert_eq!(
            value,
            json!([
                {"password": "REDACTED_SENSITIVE", "user": "u1"},
                {"password": "p2", "user": "u2"}
            ])
        );
    }

    #[test]
    fn test_shape_mismatch_is_noop() {
        let original_array = json!(["a", "b"]);
        let mut value = original_array.clone();
        assert_eq!(sanitize_value(&mut value, &json!({"0": true}), &redacted()), 0);
        assert_eq!(value, original_array);

        let original_object = json!({"a": "b"});
        let mut value = original_object.clone();
        assert_eq!(sanitize_value(&mut value, &json!([true]), &redacted()), 0);
        assert_eq!(value, original_object);

        let mut scalar = json!("plain");
        assert_eq!(sanitize_value(&mut scalar, &json!({"a": true}), &redacted()), 0);
        assert_eq!(scalar, json!("plain"));
    }

    #[test]
    fn test_marker_keys_do_not_create_value_keys() {
        let mut value = json!({"a": 1});
        sanitize_value(&mut value, &json!({"b": true}), &redacted());
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_idempotent() {
        let mut value = json!({"a": "secret", "b": {"c": ["x", "y"]}, "d": "kept"});
        let marker = json!({"a": true, "b": {"c": [false, true]}});
        sanitize_value(&mut value, &marker, &redacted());
        let once = value.clone();
        sanitize_value(&mut value, &marker, &redacted());
        assert_eq!(value, once);
    }

    #[test]
    fn test_custom_replacement_is_opaque() {
        let mut value = json!({"a": {"deep": "secret"}});
        let replacement = json!({"redacted": true});
        sanitize_value(&mut value, &json!({"a": true}), &replacement);
        assert_eq!(value, json!({"a": {"redacted": true}}));
    }

    #[test]
    fn test_auxiliary_fields_follow_base_field() {
        let mut value = json!({
            "content": "secret",
            "content_sha256": "abc",
            "content_base64sha512": "def",
            "content_md5": null,
            "other_sha256": "keep"
        });
        let marker = json!({"content": true});
        assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 3);
        assert_eq!(
            value,
            json!({
                "content": "REDACTED_SENSITIVE",
                "content_sha256": "REDACTED_SENSITIVE",
                "content_base64sha512": "REDACTED_SENSITIVE",
                "content_md5": null,
                "other_sha256": "keep"
            })
        );
    }

    #[test]
    fn test_auxiliary_fields_untouched_when_base_not_marked() {
        let original = json!({"content": "plain", "content_sha256": "abc"});
        for marker in [json!({"content": false}), json!({}), json!({"content": {}})] {
            let mut value = original.clone();
            sanitize_value(&mut value, &marker, &redacted());
            assert_eq!(value, original);
        }
    }

    #[test]
    fn test_auxiliary_requires_base_field_present() {
        let original = json!({"content_sha256": "abc"});
        let mut value = original.clone();
        sanitize_value(&mut value, &json!({"content": true}), &redacted());
        assert_eq!(value, original);
    }

    #[test]
    fn test_marked_auxiliary_field_counted_once() {
        let mut value = json!({"content": "x", "content_sha256": "h", "content_md5": "m"});
        let marker = json!({"content": true, "content_sha256": true});

        assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 3);
        assert_eq!(
            value,
            json!({
                "content": "REDACTED_SENSITIVE",
                "content_sha256": "REDACTED_SENSITIVE",
                "content_md5": "REDACTED_SENSITIVE"
            })
        );
    }

    #[test]
    fn test_auxiliary_field_marked_false_still_follows_base() {
        let mut value = json!({"content": "x", "content_sha256": "h"});
        let marker = json!({"content": true, "content_sha256": false});

        assert_eq!(sanitize_value(&mut value, &marker, &redacted()), 2);
        assert_eq!(value["content_sha256"], redacted());
    }

    #[test]
    fn test_sanitize_auxiliary_directly() {
        let mut siblings = Map::new();
        siblings.insert(String::from("key_base64"), json!("Zm9v"));
        siblings.insert(String::from("key_sha1"), json!("0beec7b5"));
        assert_eq!(sanitize_auxiliary("key", &mut siblings, &json!(true), &redacted()), 2);
        assert_eq!(siblings["key_base64"], redacted());
        assert_eq!(siblings["key_sha1"], redacted());
        assert_eq!(sanitize_auxiliary("key", &mut siblings, &json!({}), &json!("x")), 0);
    }
}

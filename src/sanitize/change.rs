//! Redaction of before/after changes.

use serde_json::Value;

use crate::document::Change;

use super::value::sanitize_value;

/// Redacts `before` using `before_sensitive` and `after` using
/// `after_sensitive`. The two halves are independent: a value generated
/// during apply may only be sensitive after the change.
///
/// Returns the number of substitutions made; an absent change is a no-op.
pub fn sanitize_change(change: Option<&mut Change>, replace_with: &Value) -> usize {
    let Some(change) = change else {
        return 0;
    };

    sanitize_value(&mut change.before, &change.before_sensitive, replace_with)
        + sanitize_value(&mut change.after, &change.after_sensitive, replace_with)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::DEFAULT_SENSITIVE_VALUE;
    use serde_json::json;

    fn redacted() -> Value {
        json!(DEFAULT_SENSITIVE_VALUE)
    }

    #[test]
    fn test_absent_change() {
        assert_eq!(sanitize_change(None, &redacted()), 0);
    }

    #[test]
    fn test_basic_change() {
        let mut change = Change {
            before: json!({
                "foo": {"a": "foo"},
                "bar": {"a": "foo"},
                "baz": {"a": "foo"},
                "qux": {"a": {"b": "foo"}, "c": "bar"},
                "quxx": {"a": {"b": "foo"}, "c": "bar"}
            }),
            after: json!({
                "one": {"x": "one"},
                "two": {"x": "one"},
                "three": {"x": "one"},
                "four": {"x": {"y": "one"}, "z": "two"},
                "five": {"x": {"y": "one"}, "z": "two"}
            }),
            before_sensitive: json!({
                "foo": {},
                "bar": true,
                "baz": {"a": true},
                "qux": {},
                "quxx": {"c": true}
            }),
            after_sensitive: json!({
                "one": {},
                "two": true,
                "three": {"x": true},
                "four": {},
                "five": {"z": true}
            }),
            ..Change::default()
        };
        let markers = (change.before_sensitive.clone(), change.after_sensitive.clone());

        assert_eq!(sanitize_change(Some(&mut change), &redacted()), 6);

        assert_eq!(
            change.before,
            json!({
                "foo": {"a": "foo"},
                "bar": DEFAULT_SENSITIVE_VALUE,
                "baz": {"a": DEFAULT_SENSITIVE_VALUE},
                "qux": {"a": {"b": "foo"}, "c": "bar"},
                "quxx": {"a": {"b": "foo"}, "c": DEFAULT_SENSITIVE_VALUE}
            })
        );
        assert_eq!(
            change.after,
            json!({
                "one": {"x": "one"},
                "two": DEFAULT_SENSITIVE_VALUE,
                "three": {"x": DEFAULT_SENSITIVE_VALUE},
                "four": {"x": {"y": "one"}, "z": "two"},
                "five": {"x": {"y": "one"}, "z": DEFAULT_SENSITIVE_VALUE}
            })
        );
        // Markers are read, never rewritten.
        assert_eq!((change.before_sensitive, change.after_sensitive), markers);
    }

    #[test]
    fn test_sensitive_on_one_side_only() {
        let mut change = Change {
            before: json!({"password": "old"}),
            after: json!({"password": "new"}),
            after_sensitive: json!({"password": true}),
            ..Change::default()
        };

        sanitize_change(Some(&mut change), &redacted());

        assert_eq!(change.before, json!({"password": "old"}));
        assert_eq!(change.after, json!({"password": DEFAULT_SENSITIVE_VALUE}));
    }

    #[test]
    fn test_create_with_null_before() {
        let mut change = Change {
            actions: vec![String::from("create")],
            before: Value::Null,
            after: json!("secret"),
            before_sensitive: json!(true),
            after_sensitive: json!(true),
            ..Change::default()
        };

        assert_eq!(sanitize_change(Some(&mut change), &redacted()), 1);
        assert!(change.before.is_null());
        assert_eq!(change.after, redacted());
    }
}

//! Field-value helpers over `serde_json::Value`.
//!
//! Form field values travel through the builder as [`serde_json::Value`]s:
//! the bound model, the previous-input store, and the resolver all traffic
//! in `Value`, and conversion to attribute text happens at the element
//! boundary. The emptiness rules here are deliberately loose — `0`, `false`,
//! `""`, `null`, and empty collections all count as "no value given" — so
//! that an unset default defers to the bound model exactly like a missing
//! one.

use serde_json::Value;

/// Returns `true` when the value counts as empty for field resolution.
///
/// `Null`, `false`, numeric zero, the empty string, and empty arrays or
/// objects are empty; everything else is not. Note that the *string* `"0"`
/// is non-empty: string emptiness is decided by length alone.
pub fn is_empty(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(truthy) => !truthy,
		Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
		Value::String(text) => text.is_empty(),
		Value::Array(items) => items.is_empty(),
		Value::Object(entries) => entries.is_empty(),
	}
}

/// Returns `true` when the value is non-empty per [`is_empty`].
pub fn is_truthy(value: &Value) -> bool {
	!is_empty(value)
}

/// Converts a field value to the text carried by an HTML attribute.
///
/// Strings pass through unquoted, numbers and booleans use their canonical
/// text form, `Null` becomes the empty string, and arrays or objects
/// serialize to their JSON text.
pub fn to_attr_string(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => number.to_string(),
		Value::String(text) => text.clone(),
		other => serde_json::to_string(other).unwrap_or_default(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), true)]
	#[case(json!(false), true)]
	#[case(json!(true), false)]
	#[case(json!(0), true)]
	#[case(json!(0.0), true)]
	#[case(json!(7), false)]
	#[case(json!(""), true)]
	#[case(json!("0"), false)]
	#[case(json!("hello"), false)]
	#[case(json!([]), true)]
	#[case(json!(["a"]), false)]
	#[case(json!({}), true)]
	#[case(json!({"a": 1}), false)]
	fn test_is_empty_table(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_empty(&value), expected);
		assert_eq!(is_truthy(&value), !expected);
	}

	#[rstest]
	#[case(json!(null), "")]
	#[case(json!(true), "true")]
	#[case(json!(false), "false")]
	#[case(json!(42), "42")]
	#[case(json!(1.5), "1.5")]
	#[case(json!("plain"), "plain")]
	#[case(json!(["a", "b"]), r#"["a","b"]"#)]
	fn test_to_attr_string_table(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(to_attr_string(&value), expected);
	}

	#[test]
	fn test_string_values_are_not_json_quoted() {
		assert_eq!(to_attr_string(&json!("a \"quoted\" word")), "a \"quoted\" word");
	}
}

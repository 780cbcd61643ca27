//! Field-value resolution.
//!
//! Every form-field helper funnels through [`field_value`], so the
//! precedence between explicit values, bound models, and flashed old input
//! is decided in exactly one place.

use serde_json::Value;

use crate::model::BoundModel;
use crate::session::OldInput;
use crate::value;

/// Resolves the value a form field should carry.
///
/// Precedence, lowest to highest:
///
/// 1. the explicit value passed at the call site,
/// 2. the bound model's field, consulted only when the explicit value is
///    empty under the loose emptiness rules of [`value::is_empty`] (a
///    missing model field resolves to an empty string, not an error),
/// 3. old input flashed from the previous request, which always wins.
///
/// A field with an empty name skips the chain entirely and keeps its
/// explicit value: there is no key to look anything up under, and callers
/// rely on anonymous fields passing values through untouched.
pub fn field_value(
	name: &str,
	explicit: Value,
	model: Option<&dyn BoundModel>,
	old_input: &dyn OldInput,
) -> Value {
	if name.is_empty() {
		return explicit;
	}

	let mut resolved = explicit;
	if value::is_empty(&resolved) {
		if let Some(model) = model {
			resolved = model
				.field(name)
				.unwrap_or_else(|| Value::String(String::new()));
		}
	}

	match old_input.old(name) {
		Some(flashed) => flashed,
		None => resolved,
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use rstest::rstest;
	use serde_json::json;

	use super::*;
	use crate::session::SessionSnapshot;

	fn model(entries: &[(&str, Value)]) -> HashMap<String, Value> {
		entries
			.iter()
			.map(|(name, value)| (name.to_string(), value.clone()))
			.collect()
	}

	#[test]
	fn test_explicit_value_wins_without_model_or_old_input() {
		let session = SessionSnapshot::default();
		let resolved = field_value("name", json!("typed"), None, &session);
		assert_eq!(resolved, json!("typed"));
	}

	#[test]
	fn test_empty_explicit_falls_back_to_model() {
		let session = SessionSnapshot::default();
		let model = model(&[("name", json!("Ada"))]);
		let resolved = field_value("name", json!(""), Some(&model), &session);
		assert_eq!(resolved, json!("Ada"));
	}

	#[test]
	fn test_non_empty_explicit_shadows_model() {
		let session = SessionSnapshot::default();
		let model = model(&[("name", json!("Ada"))]);
		let resolved = field_value("name", json!("typed"), Some(&model), &session);
		assert_eq!(resolved, json!("typed"));
	}

	#[test]
	fn test_missing_model_field_resolves_to_empty_string() {
		let session = SessionSnapshot::default();
		let model = model(&[]);
		let resolved = field_value("name", Value::Null, Some(&model), &session);
		assert_eq!(resolved, json!(""));
	}

	#[test]
	fn test_old_input_wins_over_everything() {
		let session = SessionSnapshot::new("tok").flash("name", json!("flashed"));
		let model = model(&[("name", json!("Ada"))]);
		let resolved = field_value("name", json!("typed"), Some(&model), &session);
		assert_eq!(resolved, json!("flashed"));
	}

	#[test]
	fn test_empty_name_returns_explicit_unchanged() {
		let session = SessionSnapshot::new("tok").flash("", json!("flashed"));
		let resolved = field_value("", Value::Null, None, &session);
		assert_eq!(resolved, Value::Null);
	}

	#[rstest]
	#[case(Value::Null)]
	#[case(json!(false))]
	#[case(json!(0))]
	#[case(json!(""))]
	#[case(json!([]))]
	fn test_all_empty_shapes_trigger_model_fallback(#[case] explicit: Value) {
		let session = SessionSnapshot::default();
		let model = model(&[("field", json!("from-model"))]);
		let resolved = field_value("field", explicit, Some(&model), &session);
		assert_eq!(resolved, json!("from-model"));
	}

	#[test]
	fn test_zero_string_does_not_trigger_model_fallback() {
		let session = SessionSnapshot::default();
		let model = model(&[("count", json!("9"))]);
		let resolved = field_value("count", json!("0"), Some(&model), &session);
		assert_eq!(resolved, json!("0"));
	}
}

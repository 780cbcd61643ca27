//! Model binding for form-field resolution.

use std::collections::HashMap;

use serde_json::Value;

/// A record whose fields can back a form.
///
/// When a model is bound to the builder, field helpers fall back to
/// [`field`](BoundModel::field) for any field whose explicit value is
/// empty. Returning `None` means the model has no such field, which
/// resolution treats as an empty string rather than an error.
pub trait BoundModel: Send + Sync {
	/// Returns the model's value for `name`, or `None` when absent.
	fn field(&self, name: &str) -> Option<Value>;
}

impl BoundModel for HashMap<String, Value> {
	fn field(&self, name: &str) -> Option<Value> {
		self.get(name).cloned()
	}
}

impl BoundModel for serde_json::Map<String, Value> {
	fn field(&self, name: &str) -> Option<Value> {
		self.get(name).cloned()
	}
}

/// JSON objects expose their keys as fields; any other JSON shape has no
/// fields at all.
impl BoundModel for Value {
	fn field(&self, name: &str) -> Option<Value> {
		self.as_object().and_then(|fields| fields.get(name).cloned())
	}
}

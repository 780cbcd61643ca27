//! Form assembly: method spoofing, anti-forgery tokens, model binding.

use serde::Serialize;
use serde_json::Value;

use super::HtmlBuilder;
use crate::element::Element;
use crate::error::{BuilderError, BuilderResult};
use crate::model::BoundModel;

/// Methods a browser form cannot submit directly.
const SPOOFED_METHODS: &[&str] = &["DELETE", "PATCH", "PUT"];

/// Default name of the hidden method-spoof field.
pub const METHOD_FORM_FIELD: &str = "_method";

/// Default name of the hidden anti-forgery token field.
pub const TOKEN_FORM_FIELD: &str = "_token";

/// Names of the hidden bookkeeping fields a form carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
	/// Field name for the spoofed HTTP method.
	pub method_field: String,
	/// Field name for the anti-forgery token.
	pub token_field: String,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			method_field: METHOD_FORM_FIELD.to_string(),
			token_field: TOKEN_FORM_FIELD.to_string(),
		}
	}
}

impl HtmlBuilder {
	/// Opens a `<form>` for the given HTTP method and action.
	///
	/// The method is normalized to uppercase. DELETE, PATCH, and PUT ride
	/// along in a hidden method field while the form itself submits as
	/// POST; every non-GET form also gets a hidden anti-forgery token
	/// field. An empty `action` sets no attribute.
	///
	/// ```
	/// use hypertag::{HtmlBuilder, SessionSnapshot};
	///
	/// let builder = HtmlBuilder::from_session(SessionSnapshot::new("tok"));
	/// let form = builder.form("put", "/profile").render_to_string();
	///
	/// assert!(form.contains("method=\"POST\""));
	/// assert!(form.contains("name=\"_method\" id=\"_method\" value=\"PUT\""));
	/// assert!(form.contains("name=\"_token\" id=\"_token\" value=\"tok\""));
	/// ```
	pub fn form(&self, method: &str, action: &str) -> Element {
		let method = method.to_ascii_uppercase();
		let mut form = Element::new("form");

		// Browsers only submit GET and POST; anything else travels in a
		// hidden field for the server to pick up.
		if SPOOFED_METHODS.contains(&method.as_str()) {
			tracing::debug!(
				"Spoofing form method {} through hidden {} field",
				method,
				self.config.method_field
			);
			form = form.child(
				self.hidden(&self.config.method_field, Value::Null)
					.attribute("value", method.as_str()),
			);
		}

		if method != "GET" {
			form = form.child(self.token());
		}

		form.attribute("method", if method == "GET" { "GET" } else { "POST" })
			.attribute_if(!action.is_empty(), "action", action)
	}

	/// Creates the hidden anti-forgery token input on its own.
	///
	/// The field is emitted even when the provider hands back an empty
	/// token; that is a host-side contract violation and logs a warning.
	pub fn token(&self) -> Element {
		let token = self.tokens.current_token();
		if token.is_empty() {
			tracing::warn!(
				"Token provider returned an empty token; emitting {} field anyway",
				self.config.token_field
			);
		}
		self.hidden(&self.config.token_field, Value::Null)
			.attribute("value", token)
	}

	/// Binds a model for field resolution to fall back on.
	pub fn model(&mut self, model: impl BoundModel + 'static) -> &mut Self {
		self.model = Some(Box::new(model));
		self
	}

	/// Binds any serializable value as the model.
	///
	/// The value converts through `serde_json::to_value`; a value that does
	/// not map to JSON (non-string keys, unserializable types) fails with
	/// [`BuilderError::InvalidModel`].
	pub fn model_from(&mut self, model: &impl Serialize) -> BuilderResult<&mut Self> {
		let fields = serde_json::to_value(model)?;
		Ok(self.model(fields))
	}

	/// Clears the bound model.
	pub fn end_model(&mut self) -> &mut Self {
		self.model = None;
		self
	}

	/// Binds `model`, then opens a form as [`form`](Self::form) does.
	///
	/// The binding stays active for the fields built afterwards; clear it
	/// with [`close_model_form`](Self::close_model_form) or
	/// [`end_model`](Self::end_model).
	pub fn model_form(
		&mut self,
		model: impl BoundModel + 'static,
		method: &str,
		action: &str,
	) -> Element {
		self.model(model);
		self.form(method, action)
	}

	/// Clears the bound model and renders the closing form tag.
	pub fn close_model_form(&mut self) -> String {
		self.end_model();
		self.element("form").close()
	}

	/// Runs `build` with `model` bound, clearing the binding on the way
	/// out. The binding clears even when `build` panics.
	///
	/// ```
	/// use std::collections::HashMap;
	///
	/// use hypertag::{HtmlBuilder, SessionSnapshot};
	/// use serde_json::json;
	///
	/// let mut builder = HtmlBuilder::from_session(SessionSnapshot::new("tok"));
	/// let mut fields = HashMap::new();
	/// fields.insert("email".to_string(), json!("ada@example.com"));
	///
	/// let input = builder.with_model(fields, |builder| builder.text("email", json!("")));
	/// assert!(input.render_to_string().contains("value=\"ada@example.com\""));
	/// assert!(!builder.has_model());
	/// ```
	pub fn with_model<M, R>(&mut self, model: M, build: impl FnOnce(&Self) -> R) -> R
	where
		M: BoundModel + 'static,
	{
		// RAII guard: the unbind runs on drop, unwinding included.
		struct UnbindGuard<'a>(&'a mut HtmlBuilder);

		impl Drop for UnbindGuard<'_> {
			fn drop(&mut self) {
				self.0.end_model();
			}
		}

		self.model(model);
		let guard = UnbindGuard(self);
		build(&*guard.0)
	}

	/// Returns the bound model's value for `name`, `Null` on a field miss.
	///
	/// Fails with [`BuilderError::ModelRequired`] when no model is bound:
	/// explicitly model-scoped reads never operate silently on no data.
	pub fn model_value(&self, name: &str) -> BuilderResult<Value> {
		match &self.model {
			Some(model) => Ok(model.field(name).unwrap_or(Value::Null)),
			None => Err(BuilderError::ModelRequired),
		}
	}
}

//! Session seams: flashed old input and the request token.
//!
//! The builder never talks to a session store directly. It sees two small
//! traits — [`OldInput`] for values flashed back after a failed submission
//! and [`TokenProvider`] for the per-request form token — and the host
//! application decides what stands behind them. [`SessionSnapshot`] is the
//! ready-made implementation of both for the common case where the state
//! was captured up front.

use std::collections::HashMap;

use serde_json::Value;

/// Source of old form input flashed from the previous request.
///
/// Old input has the highest priority during field resolution: when a
/// value exists for a field name, it wins over both the explicit value
/// and the bound model.
pub trait OldInput: Send + Sync {
	/// Returns the flashed value for `name`, or `None` when absent.
	fn old(&self, name: &str) -> Option<Value>;
}

/// Source of the current request's form token.
pub trait TokenProvider: Send + Sync {
	/// Returns the token to embed in non-GET forms.
	///
	/// An empty token is emitted as-is (the form still carries the hidden
	/// field), but the builder logs a warning when that happens.
	fn current_token(&self) -> String;
}

/// An immutable capture of the request session state the builder needs.
///
/// Implements both [`OldInput`] and [`TokenProvider`], so one snapshot can
/// back a whole builder:
///
/// ```
/// use hypertag::{HtmlBuilder, SessionSnapshot};
/// use serde_json::json;
///
/// let session = SessionSnapshot::new("token-123").flash("email", json!("ada@example.com"));
/// let builder = HtmlBuilder::from_session(session);
///
/// assert_eq!(builder.old("email", json!("")), json!("ada@example.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
	token: String,
	old_input: HashMap<String, Value>,
}

impl SessionSnapshot {
	/// Creates a snapshot with a token and no old input.
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
			old_input: HashMap::new(),
		}
	}

	/// Creates a snapshot with a token and pre-collected old input.
	pub fn with_old_input(token: impl Into<String>, old_input: HashMap<String, Value>) -> Self {
		Self {
			token: token.into(),
			old_input,
		}
	}

	/// Adds one flashed field value.
	pub fn flash(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.old_input.insert(name.into(), value.into());
		self
	}
}

impl OldInput for SessionSnapshot {
	fn old(&self, name: &str) -> Option<Value> {
		self.old_input.get(name).cloned()
	}
}

impl TokenProvider for SessionSnapshot {
	fn current_token(&self) -> String {
		self.token.clone()
	}
}

//! The builder facade and the generic element catalog.
//!
//! [`HtmlBuilder`] ties the crate together: it holds the previous-input
//! store and the token provider behind their traits, the form-field naming
//! configuration, and the optional bound model, and it exposes the
//! constructor catalog (`div`, `a`, `text`, `select`, `form`, …).
//! Constructors hand out owned [`Element`]s for the caller to keep
//! chaining on; the builder itself only carries form state.
//!
//! ## Example
//!
//! ```
//! use hypertag::{HtmlBuilder, SessionSnapshot};
//! use serde_json::json;
//!
//! let builder = HtmlBuilder::from_session(SessionSnapshot::new("token"));
//! let field = builder.text("email", json!("ada@example.com"));
//!
//! assert_eq!(
//! 	field.render_to_string(),
//! 	"<input type=\"text\" name=\"email\" id=\"email\" value=\"ada@example.com\" />"
//! );
//! ```

mod form;
mod input;
mod select;

pub use form::{FormConfig, METHOD_FORM_FIELD, TOKEN_FORM_FIELD};
pub use select::mark_selected_options;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::attributes::{Attributes, IntoClassTokens};
use crate::element::{Element, IntoNode};
use crate::model::BoundModel;
use crate::resolve;
use crate::session::{OldInput, SessionSnapshot, TokenProvider};

/// Fluent constructor catalog with form state.
///
/// One builder serves one request/response cycle: the previous-input store
/// and token provider are fixed at construction, while the bound model
/// comes and goes per form (see [`model`](Self::model) /
/// [`with_model`](Self::with_model)).
pub struct HtmlBuilder {
	old_input: Arc<dyn OldInput>,
	tokens: Arc<dyn TokenProvider>,
	config: FormConfig,
	model: Option<Box<dyn BoundModel>>,
}

impl HtmlBuilder {
	/// Creates a builder over the given collaborators.
	pub fn new(old_input: Arc<dyn OldInput>, tokens: Arc<dyn TokenProvider>) -> Self {
		Self {
			old_input,
			tokens,
			config: FormConfig::default(),
			model: None,
		}
	}

	/// Creates a builder backed by one [`SessionSnapshot`] for both the
	/// previous-input store and the token provider.
	pub fn from_session(session: SessionSnapshot) -> Self {
		let session = Arc::new(session);
		Self::new(session.clone(), session)
	}

	/// Replaces the form-field naming configuration.
	pub fn with_config(mut self, config: FormConfig) -> Self {
		self.config = config;
		self
	}

	/// Returns whether a model is currently bound.
	pub fn has_model(&self) -> bool {
		self.model.is_some()
	}

	/// Resolves the value a form field should carry.
	///
	/// The facade door to [`resolve::field_value`], wired to this builder's
	/// bound model and previous-input store. Every field constructor funnels
	/// its explicit value through here.
	pub fn old(&self, name: &str, value: impl Into<Value>) -> Value {
		resolve::field_value(name, value.into(), self.model.as_deref(), self.old_input.as_ref())
	}

	/// Creates an empty element with an arbitrary tag.
	pub fn element(&self, tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Renders a standalone `class="…"` attribute string.
	///
	/// Tokens deduplicate in first-seen order, with the usual class-token
	/// normalization; no tokens at all yields an empty string.
	pub fn class(&self, tokens: impl IntoClassTokens) -> String {
		let mut attributes = Attributes::new();
		attributes.add_class_tokens(tokens);
		attributes.render()
	}

	/// Creates an `<a>` element; an empty `href` sets no attribute.
	pub fn a(&self, href: &str, contents: impl IntoNode) -> Element {
		Element::new("a")
			.attribute_if(!href.is_empty(), "href", href)
			.html(contents)
	}

	/// Creates an `<a>` element linking to a `mailto:` address.
	pub fn mailto(&self, email: &str, text: impl IntoNode) -> Element {
		self.a(&format!("mailto:{email}"), text)
	}

	/// Creates an `<a>` element linking to a `tel:` number.
	pub fn tel(&self, number: &str, text: impl IntoNode) -> Element {
		self.a(&format!("tel:{number}"), text)
	}

	/// Creates a `<div>` with the given children.
	pub fn div(&self, contents: impl IntoNode) -> Element {
		Element::new("div").children(contents)
	}

	/// Creates a `<span>` with the given children.
	pub fn span(&self, contents: impl IntoNode) -> Element {
		Element::new("span").children(contents)
	}

	/// Creates a `<p>` with the given children.
	pub fn p(&self, contents: impl IntoNode) -> Element {
		Element::new("p").children(contents)
	}

	/// Creates a `<label>`; an empty `for_id` sets no `for` attribute.
	pub fn label(&self, contents: impl IntoNode, for_id: &str) -> Element {
		Element::new("label")
			.attribute_if(!for_id.is_empty(), "for", for_id)
			.children(contents)
	}

	/// Creates a `<legend>` with the given markup.
	pub fn legend(&self, contents: impl IntoNode) -> Element {
		Element::new("legend").html(contents)
	}

	/// Creates a `<fieldset>`, wrapping non-empty `legend` content in a
	/// `<legend>` child.
	pub fn fieldset(&self, legend: impl IntoNode) -> Element {
		let legend = legend.into_node();
		if legend.is_empty() {
			Element::new("fieldset")
		} else {
			Element::new("fieldset").child(self.legend(legend))
		}
	}

	/// Creates a `<button>`; an empty `button_type` sets no `type`
	/// attribute.
	pub fn button(&self, contents: impl IntoNode, button_type: &str) -> Element {
		Element::new("button")
			.attribute_if(!button_type.is_empty(), "type", button_type)
			.html(contents)
	}

	/// Creates a submit button.
	pub fn submit(&self, label: impl IntoNode) -> Element {
		self.button(label, "submit")
	}

	/// Creates a reset button.
	pub fn reset(&self, label: impl IntoNode) -> Element {
		self.button(label, "reset")
	}

	/// Creates an `<img>`; empty `src` or `alt` set no attribute.
	pub fn img(&self, src: &str, alt: &str) -> Element {
		Element::new("img")
			.attribute_if(!src.is_empty(), "src", src)
			.attribute_if(!alt.is_empty(), "alt", alt)
	}
}

impl fmt::Debug for HtmlBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HtmlBuilder")
			.field("config", &self.config)
			.field("has_model", &self.has_model())
			.finish_non_exhaustive()
	}
}

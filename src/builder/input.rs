//! Input-family constructors.

use serde_json::Value;

use super::HtmlBuilder;
use crate::element::Element;
use crate::value;

impl HtmlBuilder {
	/// Creates an `<input>` with resolved value state.
	///
	/// `type`, `name`, and `id` are set only when non-empty. The explicit
	/// `value` runs through field resolution (model fallback, then flashed
	/// old input), and the `value` attribute is set only when the field has
	/// a name and the resolved value is non-empty.
	pub fn input(&self, input_type: &str, name: &str, value: impl Into<Value>) -> Element {
		let resolved = self.old(name, value);
		Element::new("input")
			.attribute_if(!input_type.is_empty(), "type", input_type)
			.attribute_if(!name.is_empty(), "name", name)
			.attribute_if(!name.is_empty(), "id", name)
			.attribute_if(
				!name.is_empty() && value::is_truthy(&resolved),
				"value",
				value::to_attr_string(&resolved),
			)
	}

	/// Creates a text input.
	pub fn text(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("text", name, value)
	}

	/// Creates an email input.
	pub fn email(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("email", name, value)
	}

	/// Creates a number input.
	pub fn number(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("number", name, value)
	}

	/// Creates a date input.
	pub fn date(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("date", name, value)
	}

	/// Creates a time input.
	pub fn time(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("time", name, value)
	}

	/// Creates a url input.
	pub fn url(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("url", name, value)
	}

	/// Creates a search input.
	pub fn search(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("search", name, value)
	}

	/// Creates a hidden input.
	pub fn hidden(&self, name: &str, value: impl Into<Value>) -> Element {
		self.input("hidden", name, value)
	}

	/// Creates a password input.
	///
	/// Resolves like any input but is never given an explicit value, so a
	/// `value` attribute appears only when old input was flashed for the
	/// name.
	pub fn password(&self, name: &str) -> Element {
		self.input("password", name, Value::Null)
	}

	/// Creates a file input. File fields carry no value state at all.
	pub fn file(&self, name: &str) -> Element {
		Element::new("input")
			.attribute("type", "file")
			.attribute_if(!name.is_empty(), "name", name)
			.attribute_if(!name.is_empty(), "id", name)
	}

	/// Creates a checkbox.
	///
	/// The `checked` flag itself runs through field resolution: flashed old
	/// input or a bound model's field decide checkedness by truthiness when
	/// the explicit flag is off.
	pub fn checkbox(&self, name: &str, checked: bool, value: impl Into<Value>) -> Element {
		self.input("checkbox", name, value)
			.checked_if(value::is_truthy(&self.old(name, checked)))
	}

	/// Creates a radio button; checkedness resolves like
	/// [`checkbox`](Self::checkbox).
	pub fn radio(&self, name: &str, checked: bool, value: impl Into<Value>) -> Element {
		self.input("radio", name, value)
			.checked_if(value::is_truthy(&self.old(name, checked)))
	}

	/// Creates a `<textarea>`.
	///
	/// The resolved value becomes an escaped text child, never a `value`
	/// attribute.
	pub fn textarea(&self, name: &str, value: impl Into<Value>) -> Element {
		let content = value::to_attr_string(&self.old(name, value));
		let textarea = Element::new("textarea")
			.attribute_if(!name.is_empty(), "name", name)
			.attribute_if(!name.is_empty(), "id", name);
		if content.is_empty() {
			textarea
		} else {
			textarea.text(content)
		}
	}
}

//! Ordered attribute sets with class-token merging.
//!
//! Every element owns one [`Attributes`] set: an ordered `name → value`
//! mapping where insertion order governs render order and overwriting an
//! existing name keeps its original position. The `class` attribute gets
//! special treatment — its value is a deduplicated token list rather than
//! an opaque string, merged through [`Attributes::add_class_tokens`].

use std::borrow::Cow;

use crate::element::html_escape;

/// The value carried by one attribute entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// A presence-only attribute, rendered as the bare name
	/// (e.g. `disabled`, `checked`, `multiple`).
	Flag,
	/// A plain text value, rendered as `name="escaped-value"`.
	Text(String),
	/// A list of class tokens, rendered space-joined.
	TokenList(Vec<String>),
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

impl From<Cow<'static, str>> for AttrValue {
	fn from(value: Cow<'static, str>) -> Self {
		AttrValue::Text(value.into_owned())
	}
}

/// Conversion into a list of CSS class tokens.
///
/// Accepts a single token, a whitespace-separated string, a
/// slice/array/`Vec` of either, or an `Option` of any of those. Strings are
/// split on whitespace, so `"btn btn-primary"` yields two tokens.
pub trait IntoClassTokens {
	/// Converts self into a flat list of non-empty tokens.
	fn into_class_tokens(self) -> Vec<String>;
}

impl IntoClassTokens for &str {
	fn into_class_tokens(self) -> Vec<String> {
		self.split_whitespace().map(str::to_string).collect()
	}
}

impl IntoClassTokens for String {
	fn into_class_tokens(self) -> Vec<String> {
		self.split_whitespace().map(str::to_string).collect()
	}
}

impl IntoClassTokens for &String {
	fn into_class_tokens(self) -> Vec<String> {
		self.split_whitespace().map(str::to_string).collect()
	}
}

impl<T: IntoClassTokens> IntoClassTokens for Option<T> {
	fn into_class_tokens(self) -> Vec<String> {
		match self {
			Some(tokens) => tokens.into_class_tokens(),
			None => Vec::new(),
		}
	}
}

impl<T: IntoClassTokens> IntoClassTokens for Vec<T> {
	fn into_class_tokens(self) -> Vec<String> {
		self.into_iter()
			.flat_map(IntoClassTokens::into_class_tokens)
			.collect()
	}
}

impl<T: IntoClassTokens, const N: usize> IntoClassTokens for [T; N] {
	fn into_class_tokens(self) -> Vec<String> {
		self.into_iter()
			.flat_map(IntoClassTokens::into_class_tokens)
			.collect()
	}
}

impl<T: IntoClassTokens + Clone> IntoClassTokens for &[T] {
	fn into_class_tokens(self) -> Vec<String> {
		self.iter()
			.cloned()
			.flat_map(IntoClassTokens::into_class_tokens)
			.collect()
	}
}

/// An ordered attribute set.
///
/// At most one entry exists per name; insertion order governs render order.
/// The set is owned by exactly one element and mutated only through the
/// named operations below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: Vec<(String, AttrValue)>,
}

impl Attributes {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute, overwriting any existing entry for `name`.
	///
	/// An overwritten entry keeps its original position in the render order.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Sets an attribute only when `condition` is true; otherwise a no-op.
	pub fn set_if(&mut self, condition: bool, name: impl Into<String>, value: impl Into<AttrValue>) {
		if condition {
			self.set(name, value);
		}
	}

	/// Removes the entry for `name` if present.
	pub fn remove(&mut self, name: &str) {
		self.entries.retain(|(existing, _)| existing != name);
	}

	/// Merges class tokens into the `class` entry.
	///
	/// New tokens are appended after any existing ones, duplicates are
	/// dropped, and first-seen order is preserved. A plain-string `class`
	/// entry set earlier via [`set`](Self::set) is re-parsed into tokens
	/// before merging. Empty input is a no-op and never creates an empty
	/// `class=""`.
	pub fn add_class_tokens(&mut self, tokens: impl IntoClassTokens) {
		let incoming = tokens.into_class_tokens();
		if incoming.is_empty() {
			return;
		}

		let existing: Vec<String> = match self.get("class") {
			Some(AttrValue::TokenList(tokens)) => tokens.clone(),
			Some(AttrValue::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
			Some(AttrValue::Flag) | None => Vec::new(),
		};

		let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
		for token in existing.into_iter().chain(incoming) {
			if !merged.contains(&token) {
				merged.push(token);
			}
		}
		self.set("class", AttrValue::TokenList(merged));
	}

	/// Returns the value for `name`, if set.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value)
	}

	/// Returns the entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &(String, AttrValue)> {
		self.entries.iter()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no attribute is set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Renders the serialized attribute string.
	///
	/// Flags render as the bare name, text values as `name="escaped-value"`,
	/// and token lists space-joined; entries are separated by single spaces
	/// in insertion order.
	pub fn render(&self) -> String {
		let mut parts = Vec::with_capacity(self.entries.len());
		for (name, value) in &self.entries {
			match value {
				AttrValue::Flag => parts.push(name.clone()),
				AttrValue::Text(text) => {
					parts.push(format!("{}=\"{}\"", name, html_escape(text)));
				}
				AttrValue::TokenList(tokens) => {
					parts.push(format!("{}=\"{}\"", name, html_escape(&tokens.join(" "))));
				}
			}
		}
		parts.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_set_overwrites_in_place() {
		let mut attrs = Attributes::new();
		attrs.set("id", "first");
		attrs.set("name", "field");
		attrs.set("id", "second");
		assert_eq!(attrs.render(), "id=\"second\" name=\"field\"");
	}

	#[test]
	fn test_set_if_false_is_a_no_op() {
		let mut attrs = Attributes::new();
		attrs.set_if(false, "x", "y");
		assert!(attrs.is_empty());
		attrs.set_if(true, "x", "y");
		assert_eq!(attrs.get("x"), Some(&AttrValue::Text("y".to_string())));
	}

	#[test]
	fn test_remove_drops_the_entry() {
		let mut attrs = Attributes::new();
		attrs.set("href", "/home");
		attrs.remove("href");
		assert!(attrs.get("href").is_none());
	}

	#[test]
	fn test_class_tokens_merge_deduplicated_in_first_seen_order() {
		let mut attrs = Attributes::new();
		attrs.add_class_tokens("a b");
		attrs.add_class_tokens("b c");
		assert_eq!(attrs.render(), "class=\"a b c\"");
	}

	#[test]
	fn test_class_merges_with_plain_string_entry() {
		let mut attrs = Attributes::new();
		attrs.set("class", "btn btn");
		attrs.add_class_tokens("btn-primary");
		assert_eq!(attrs.render(), "class=\"btn btn-primary\"");
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_empty_class_input_is_a_no_op(#[case] input: &str) {
		let mut attrs = Attributes::new();
		attrs.add_class_tokens(input);
		assert!(attrs.get("class").is_none());
		assert_eq!(attrs.render(), "");
	}

	#[test]
	fn test_class_accepts_token_collections() {
		let mut attrs = Attributes::new();
		attrs.add_class_tokens(vec!["a", "b c"]);
		attrs.add_class_tokens(Some("d"));
		attrs.add_class_tokens(None::<&str>);
		assert_eq!(attrs.render(), "class=\"a b c d\"");
	}

	#[test]
	fn test_class_keeps_its_position_when_merged() {
		let mut attrs = Attributes::new();
		attrs.set("class", "a");
		attrs.set("id", "x");
		attrs.add_class_tokens("b");
		assert_eq!(attrs.render(), "class=\"a b\" id=\"x\"");
	}

	#[test]
	fn test_render_mixes_flags_and_values() {
		let mut attrs = Attributes::new();
		attrs.set("type", "checkbox");
		attrs.set("checked", AttrValue::Flag);
		assert_eq!(attrs.render(), "type=\"checkbox\" checked");
	}

	#[test]
	fn test_render_escapes_values() {
		let mut attrs = Attributes::new();
		attrs.set("value", "a \"b\" & <c>");
		assert_eq!(
			attrs.render(),
			"value=\"a &quot;b&quot; &amp; &lt;c&gt;\""
		);
	}
}

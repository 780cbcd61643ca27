//! Select constructors and selection application.

use std::borrow::Cow;

use serde_json::Value;

use super::HtmlBuilder;
use crate::attributes::AttrValue;
use crate::element::{Element, Node};
use crate::value;

impl HtmlBuilder {
	/// Creates an `<option>` with an escaped text label.
	///
	/// The `value` attribute is always present (converted to attribute
	/// text); `selected` forces the flag regardless of any later value
	/// matching.
	pub fn option(
		&self,
		text: impl Into<Cow<'static, str>>,
		value: impl Into<Value>,
		selected: bool,
	) -> Element {
		Element::new("option")
			.attribute("value", value::to_attr_string(&value.into()))
			.selected_if(selected)
			.text(text)
	}

	/// Creates a `<select>` with one option per `(value, label)` pair.
	///
	/// The effective value runs through field resolution and the matching
	/// option is marked selected by string equality.
	pub fn select(
		&self,
		name: &str,
		options: &[(String, String)],
		value: impl Into<Value>,
	) -> Element {
		let resolved = self.old(name, value);
		let select = Element::new("select")
			.attribute_if(!name.is_empty(), "name", name)
			.attribute_if(!name.is_empty(), "id", name)
			.children(self.option_list(options));
		mark_selected_options(select, &resolved)
	}

	/// Creates a multiple-selection `<select>`.
	///
	/// An array-shaped resolved value marks every member's option; the
	/// members are string-compared against the option values.
	pub fn multiselect(
		&self,
		name: &str,
		options: &[(String, String)],
		value: impl Into<Value>,
	) -> Element {
		let resolved = self.old(name, value);
		let select = Element::new("select")
			.attribute_if(!name.is_empty(), "name", name)
			.attribute_if(!name.is_empty(), "id", name)
			.attribute("multiple", AttrValue::Flag)
			.children(self.option_list(options));
		mark_selected_options(select, &resolved)
	}

	fn option_list(&self, options: &[(String, String)]) -> Vec<Element> {
		options
			.iter()
			.map(|(value, label)| self.option(label.clone(), value.as_str(), false))
			.collect()
	}
}

/// Marks the options inside a finished `<select>` tree as selected.
///
/// Multiplicity comes from the select's own `multiple` attribute: with it,
/// an array-shaped `value` selects every option whose `value` attribute
/// string-equals a member; without it, the value is string-compared
/// directly. A `Null` value marks nothing. Options are found recursively
/// through element and fragment children, so grouping under `<optgroup>`
/// does not hide them. Marking only ever sets the flag; options forced
/// selected at construction stay selected.
pub fn mark_selected_options(mut select: Element, value: &Value) -> Element {
	let multiple = select.attributes().get("multiple").is_some();
	apply_selection(select.children_mut(), value, multiple);
	select
}

fn apply_selection(children: &mut [Node], value: &Value, multiple: bool) {
	for child in children.iter_mut() {
		match child {
			Node::Element(element) => {
				if element.tag().eq_ignore_ascii_case("option") {
					if option_matches(element, value, multiple) {
						element.attributes_mut().set("selected", AttrValue::Flag);
					}
				} else {
					apply_selection(element.children_mut(), value, multiple);
				}
			}
			Node::Fragment(nested) => apply_selection(nested, value, multiple),
			_ => {}
		}
	}
}

fn option_matches(option: &Element, value: &Value, multiple: bool) -> bool {
	let candidate = match option.attributes().get("value") {
		Some(AttrValue::Text(candidate)) => candidate,
		_ => return false,
	};
	match value {
		Value::Null => false,
		Value::Array(members) => {
			multiple
				&& members
					.iter()
					.any(|member| value::to_attr_string(member) == *candidate)
		}
		other => value::to_attr_string(other) == *candidate,
	}
}

//! Element trees and the fluent builder API.
//!
//! ## Overview
//!
//! [`Element`] is one tag: a name, an owned [`Attributes`] set, an ordered
//! child list, and a void flag. [`Node`] is the child-tree enum — elements,
//! escaped text, verbatim markup, fragments, or nothing — and [`IntoNode`]
//! is the conversion seam that lets strings, options, vectors, and tuples
//! slot in as children. Builder calls consume `self` and return it, so
//! construction chains left to right and each node stays exclusively owned
//! by its chain.
//!
//! ## Example
//!
//! ```
//! use hypertag::Element;
//!
//! let card = Element::new("div")
//! 	.add_class("card")
//! 	.child(Element::new("span").text("Hello, World!"));
//!
//! assert_eq!(
//! 	card.render_to_string(),
//! 	"<div class=\"card\"><span>Hello, World!</span></div>"
//! );
//! ```

mod util;

pub(crate) use util::html_escape;
pub use util::{VOID_TAGS, is_void_tag};

use std::borrow::Cow;

use crate::attributes::{AttrValue, Attributes, IntoClassTokens};
use crate::error::{BuilderError, BuilderResult};

/// One node of a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A tag with attributes and children.
	Element(Element),
	/// A text node, escaped at render time.
	Text(Cow<'static, str>),
	/// Pre-built markup inserted verbatim, never escaped.
	Raw(Cow<'static, str>),
	/// A sequence of nodes with no wrapper element.
	Fragment(Vec<Node>),
	/// Renders nothing.
	Empty,
}

impl Node {
	/// Creates a text node, escaped at render time.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Node::Text(content.into())
	}

	/// Creates a verbatim markup node.
	pub fn raw(markup: impl Into<Cow<'static, str>>) -> Self {
		Node::Raw(markup.into())
	}

	/// Creates a fragment from a sequence of children.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Node::Fragment(children.into_iter().map(IntoNode::into_node).collect())
	}

	/// Creates a node that renders nothing.
	pub fn empty() -> Self {
		Node::Empty
	}

	/// Returns `true` when the node renders nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Node::Empty => true,
			Node::Text(content) | Node::Raw(content) => content.is_empty(),
			Node::Fragment(children) => children.iter().all(Node::is_empty),
			Node::Element(_) => false,
		}
	}

	/// Renders the node to a markup string.
	///
	/// Text is escaped, raw markup passes through, and rendering is pure:
	/// the same tree always yields the same output.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Node::Element(element) => element.render_into(output),
			Node::Text(content) => output.push_str(&html_escape(content)),
			Node::Raw(markup) => output.push_str(markup),
			Node::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Node::Empty => {}
		}
	}

	/// Flattens the node into a child list: fragments spread, empties drop.
	fn into_child_list(self) -> Vec<Node> {
		match self {
			Node::Fragment(children) => children,
			Node::Empty => Vec::new(),
			node => vec![node],
		}
	}
}

/// Wraps pre-escaped markup so it renders verbatim.
///
/// This is the one door past the default escaping: every plain string that
/// enters a tree through [`IntoNode`] is escaped at render time, while
/// `raw` markup is the caller's responsibility.
pub fn raw(markup: impl Into<Cow<'static, str>>) -> Node {
	Node::Raw(markup.into())
}

/// Represents one tag in the element tree.
///
/// Elements are constructed through [`Element::new`] (or the builder
/// facade's constructors) and mutated through the fluent API below. A void
/// element never holds children; every child-mutating call enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	/// The tag name (e.g. "div", "input").
	tag: Cow<'static, str>,
	/// The element's own attribute set, never shared with another node.
	attributes: Attributes,
	/// Child nodes, always empty for void elements.
	children: Vec<Node>,
	/// Whether this tag renders without children or a closing tag.
	is_void: bool,
}

impl Element {
	/// Creates an empty element with the given tag.
	///
	/// Voidness comes from the fixed [`VOID_TAGS`] table; unknown tags are
	/// non-void.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = is_void_tag(&tag);
		Self {
			tag,
			attributes: Attributes::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute, overwriting any existing entry for `name`.
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attributes.set(name, value);
		self
	}

	/// Sets an attribute only when `condition` is true; otherwise a no-op.
	pub fn attribute_if(
		self,
		condition: bool,
		name: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Self {
		if condition { self.attribute(name, value) } else { self }
	}

	/// Merges class tokens into the `class` attribute.
	///
	/// ```
	/// use hypertag::Element;
	///
	/// let div = Element::new("div").add_class("a b").add_class("b c");
	/// assert_eq!(div.render_to_string(), "<div class=\"a b c\"></div>");
	/// ```
	pub fn add_class(mut self, tokens: impl IntoClassTokens) -> Self {
		self.attributes.add_class_tokens(tokens);
		self
	}

	/// Sets a presence-only attribute when `condition` is true, removes it
	/// otherwise.
	///
	/// A false boolean attribute must not render at all, so unlike the
	/// `*_if` toggles this clears any earlier entry.
	pub fn bool_attr(mut self, name: impl Into<String>, condition: bool) -> Self {
		let name = name.into();
		if condition {
			self.attributes.set(name, AttrValue::Flag);
		} else {
			self.attributes.remove(&name);
		}
		self
	}

	/// Adds the `selected` flag when `condition` is true.
	pub fn selected_if(self, condition: bool) -> Self {
		self.attribute_if(condition, "selected", AttrValue::Flag)
	}

	/// Adds the `checked` flag when `condition` is true.
	pub fn checked_if(self, condition: bool) -> Self {
		self.attribute_if(condition, "checked", AttrValue::Flag)
	}

	/// Adds the `disabled` flag when `condition` is true.
	pub fn disabled_if(self, condition: bool) -> Self {
		self.attribute_if(condition, "disabled", AttrValue::Flag)
	}

	/// Adds the `readonly` flag when `condition` is true.
	pub fn readonly_if(self, condition: bool) -> Self {
		self.attribute_if(condition, "readonly", AttrValue::Flag)
	}

	/// Replaces the entire child list, failing on void elements.
	///
	/// This is the checked form of [`children`](Self::children).
	///
	/// ```
	/// use hypertag::Element;
	///
	/// let err = Element::new("input").try_children("x").unwrap_err();
	/// assert_eq!(
	/// 	err.to_string(),
	/// 	"<input> is a void element and cannot contain children"
	/// );
	/// ```
	pub fn try_children(mut self, content: impl IntoNode) -> BuilderResult<Self> {
		self.ensure_not_void()?;
		self.children = content.into_node().into_child_list();
		Ok(self)
	}

	/// Replaces the entire child list.
	///
	/// Accepts anything [`IntoNode`]: `()` clears, a single child replaces,
	/// and a `Vec` or tuple supplies a sequence.
	///
	/// # Panics
	///
	/// Panics if the element is void; use
	/// [`try_children`](Self::try_children) for the checked form.
	pub fn children(self, content: impl IntoNode) -> Self {
		self.try_children(content)
			.unwrap_or_else(|err| panic!("{err}"))
	}

	/// Appends one child.
	///
	/// # Panics
	///
	/// Panics if the element is void.
	pub fn child(mut self, content: impl IntoNode) -> Self {
		self.assert_not_void();
		self.children.push(content.into_node());
		self
	}

	/// Inserts one child before all existing children.
	///
	/// # Panics
	///
	/// Panics if the element is void.
	pub fn prepend_child(mut self, content: impl IntoNode) -> Self {
		self.assert_not_void();
		self.children.insert(0, content.into_node());
		self
	}

	/// Replaces the children with a single escaped text child.
	///
	/// The content is escaped at render time, so nested markup cannot leak
	/// through:
	///
	/// ```
	/// use hypertag::Element;
	///
	/// let div = Element::new("div").text("<b>bold?</b>");
	/// assert_eq!(div.render_to_string(), "<div>&lt;b&gt;bold?&lt;/b&gt;</div>");
	/// ```
	///
	/// # Panics
	///
	/// Panics if the element is void.
	pub fn text(mut self, content: impl Into<Cow<'static, str>>) -> Self {
		self.assert_not_void();
		self.children = vec![Node::Text(content.into())];
		self
	}

	/// Replaces the children with pre-built markup.
	///
	/// Unlike [`text`](Self::text) this inserts nodes as-is: plain strings
	/// still arrive as escaped text through [`IntoNode`], and verbatim
	/// markup must pass through [`raw`] explicitly.
	///
	/// ```
	/// use hypertag::{Element, raw};
	///
	/// let div = Element::new("div").html(raw("<b>bold</b>"));
	/// assert_eq!(div.render_to_string(), "<div><b>bold</b></div>");
	/// ```
	///
	/// # Panics
	///
	/// Panics if the element is void.
	pub fn html(self, content: impl IntoNode) -> Self {
		self.children(content)
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the attribute set.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}

	pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
		&mut self.children
	}

	/// Renders the element to a markup string.
	///
	/// Void elements render as `<tag attrs />` with no children or closing
	/// tag; rendering is pure.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Renders the start tag plus children, without the closing tag.
	///
	/// This is how a form opened at the top of a template is emitted; the
	/// matching [`close`](Self::close) goes at the bottom.
	pub fn open(&self) -> String {
		let mut output = String::new();
		self.render_open(&mut output);
		output
	}

	/// Renders the matching closing tag, or nothing for void elements.
	pub fn close(&self) -> String {
		if self.is_void {
			String::new()
		} else {
			format!("</{}>", self.tag)
		}
	}

	fn render_into(&self, output: &mut String) {
		self.render_open(output);
		if !self.is_void {
			output.push_str("</");
			output.push_str(&self.tag);
			output.push('>');
		}
	}

	fn render_open(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		if !self.attributes.is_empty() {
			output.push(' ');
			output.push_str(&self.attributes.render());
		}
		if self.is_void {
			output.push_str(" />");
		} else {
			output.push('>');
			for child in &self.children {
				child.render_into(output);
			}
		}
	}

	fn ensure_not_void(&self) -> BuilderResult<()> {
		if self.is_void {
			Err(BuilderError::VoidChildren {
				tag: self.tag.to_string(),
			})
		} else {
			Ok(())
		}
	}

	fn assert_not_void(&self) {
		if let Err(err) = self.ensure_not_void() {
			panic!("{err}");
		}
	}
}

/// Trait for types that can be converted into a [`Node`].
///
/// This is the conversion seam for child content: implementing it lets a
/// type be used anywhere the builder accepts children.
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(content) => content.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Fragment(self.into_iter().map(IntoNode::into_node).collect())
	}
}

// Tuple implementations for fragments

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode, D: IntoNode> IntoNode for (A, B, C, D) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
			self.3.into_node(),
		])
	}
}

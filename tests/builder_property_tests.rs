//! Property-based tests for the builder
//!
//! Uses proptest to verify:
//! 1. Class tokens deduplicate in first-seen order
//! 2. Escaped content and attribute values never leak markup
//! 3. Rendering is pure
//! 4. Flashed old input always wins resolution
//! 5. Form methods normalize to GET or POST with the right hidden fields

use hypertag::{Element, HtmlBuilder, SessionSnapshot};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Class-token merging
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: each distinct token renders exactly once, first-seen order
	#[test]
	fn test_class_tokens_dedupe_in_first_seen_order(
		first in prop::collection::vec("[a-z][a-z0-9-]{0,7}", 0..6),
		second in prop::collection::vec("[a-z][a-z0-9-]{0,7}", 0..6),
	) {
		let element = Element::new("div")
			.add_class(first.clone())
			.add_class(second.clone());
		let html = element.render_to_string();

		let mut expected: Vec<String> = Vec::new();
		for token in first.into_iter().chain(second) {
			if !expected.contains(&token) {
				expected.push(token);
			}
		}

		if expected.is_empty() {
			prop_assert_eq!(html, "<div></div>".to_string());
		} else {
			prop_assert_eq!(html, format!("<div class=\"{}\"></div>", expected.join(" ")));
		}
	}
}

// ============================================================================
// Escaping
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(128))]

	/// Property: text content never leaks raw markup characters
	#[test]
	fn test_text_content_never_leaks_markup(content in ".*") {
		let html = Element::new("span").text(content).render_to_string();
		let inner = &html["<span>".len()..html.len() - "</span>".len()];

		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
		prop_assert!(!inner.contains('"'));
		prop_assert!(!inner.contains('\''));
	}

	/// Property: attribute values never escape their quotes
	#[test]
	fn test_attribute_values_stay_inside_their_quotes(value in ".*") {
		let html = Element::new("div").attribute("data-x", value).render_to_string();

		let open_quote = html.find('"').unwrap();
		let close_quote = html.rfind('"').unwrap();
		let quoted = &html[open_quote + 1..close_quote];

		prop_assert!(!quoted.contains('"'));
		prop_assert!(!quoted.contains('<'));
		prop_assert!(!quoted.contains('>'));
	}
}

// ============================================================================
// Render purity
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: rendering the same tree twice yields identical output
	#[test]
	fn test_rendering_is_idempotent(
		tokens in prop::collection::vec("[a-z]{1,6}", 0..4),
		content in ".*",
		hidden in any::<bool>(),
	) {
		let element = Element::new("div")
			.add_class(tokens)
			.bool_attr("hidden", hidden)
			.child(Element::new("span").text(content))
			.child(Element::new("input").attribute("name", "field"));

		prop_assert_eq!(element.render_to_string(), element.render_to_string());
	}
}

// ============================================================================
// Field resolution
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: a flashed value always beats the explicit one
	#[test]
	fn test_flashed_input_always_wins(explicit in ".*", flashed in ".*") {
		let session = SessionSnapshot::new("tok").flash("field", json!(flashed.clone()));
		let builder = HtmlBuilder::from_session(session);

		prop_assert_eq!(builder.old("field", json!(explicit)), json!(flashed));
	}

	/// Property: an empty field name passes the explicit value through
	#[test]
	fn test_empty_name_passes_values_through(explicit in ".*") {
		let builder = HtmlBuilder::from_session(SessionSnapshot::new("tok"));
		prop_assert_eq!(builder.old("", json!(explicit.clone())), json!(explicit));
	}
}

// ============================================================================
// Form method normalization
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: the rendered method is GET or POST, with hidden fields to match
	#[test]
	fn test_form_method_renders_get_or_post(method in "[a-zA-Z]{1,8}") {
		let builder = HtmlBuilder::from_session(SessionSnapshot::new("tok"));
		let html = builder.form(&method, "/x").render_to_string();
		let normalized = method.to_ascii_uppercase();

		if normalized == "GET" {
			prop_assert!(html.contains("method=\"GET\""));
			prop_assert!(!html.contains("name=\"_token\""));
		} else {
			prop_assert!(html.contains("method=\"POST\""));
			prop_assert!(html.contains("name=\"_token\""));
		}

		let spoofed = ["DELETE", "PATCH", "PUT"].contains(&normalized.as_str());
		prop_assert_eq!(spoofed, html.contains("name=\"_method\""));
	}
}

//! Fluent HTML builder with form state.
//!
//! `hypertag` assembles HTML element trees programmatically and renders
//! them to text, handling the recurring chores of HTML forms along the
//! way: class-list merging, conditional attributes, re-populating fields
//! from a failed submission's flashed input, falling back to a bound data
//! model, HTTP method spoofing through a hidden `_method` field, and
//! anti-forgery `_token` injection into every non-GET form.
//!
//! ## Quick start
//!
//! ```
//! use hypertag::{HtmlBuilder, SessionSnapshot};
//!
//! let builder = HtmlBuilder::from_session(SessionSnapshot::new("secret-token"));
//! let html = builder.form("PUT", "/profile").render_to_string();
//!
//! // Browsers cannot submit PUT: the form goes out as POST with the real
//! // method riding in a hidden field, plus the anti-forgery token.
//! assert!(html.contains("method=\"POST\""));
//! assert!(html.contains("name=\"_method\""));
//! assert!(html.contains("name=\"_token\""));
//! ```
//!
//! Field constructors resolve their values through the fallback chain —
//! flashed old input first, then the bound model, then the explicit value:
//!
//! ```
//! use hypertag::{HtmlBuilder, SessionSnapshot};
//! use serde_json::json;
//!
//! // The previous submission was rejected; "email" was flashed back.
//! let session = SessionSnapshot::new("secret-token").flash("email", json!("typo@example"));
//! let builder = HtmlBuilder::from_session(session);
//!
//! let input = builder.email("email", json!(""));
//! assert!(input.render_to_string().contains("value=\"typo@example\""));
//! ```
//!
//! ## Escaping
//!
//! Plain strings become escaped text wherever they enter a tree; verbatim
//! markup must pass through [`raw`] explicitly.

pub mod attributes;
pub mod builder;
pub mod element;
pub mod error;
pub mod model;
pub mod resolve;
pub mod session;
pub mod value;

pub use attributes::{AttrValue, Attributes, IntoClassTokens};
pub use builder::{
	FormConfig, HtmlBuilder, METHOD_FORM_FIELD, TOKEN_FORM_FIELD, mark_selected_options,
};
pub use element::{Element, IntoNode, Node, VOID_TAGS, is_void_tag, raw};
pub use error::{BuilderError, BuilderResult};
pub use model::BoundModel;
pub use session::{OldInput, SessionSnapshot, TokenProvider};

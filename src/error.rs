//! Error types for builder misuse.

use thiserror::Error;

/// Errors raised by contract violations on the builder surface.
///
/// Lookup misses (a field absent from the bound model or the previous-input
/// store) are not errors; they resolve silently to fallback values.
#[derive(Debug, Error)]
pub enum BuilderError {
	/// A child-mutating call was made on a void element.
	#[error("<{tag}> is a void element and cannot contain children")]
	VoidChildren {
		/// Tag name of the offending element.
		tag: String,
	},
	/// A model-scoped operation ran with no model bound.
	#[error("method requires a model to be set on the builder")]
	ModelRequired,
	/// A value handed to `model_from` did not convert to field values.
	#[error("model cannot be converted to field values: {0}")]
	InvalidModel(#[from] serde_json::Error),
}

/// Convenience alias for results carrying [`BuilderError`].
pub type BuilderResult<T> = Result<T, BuilderError>;

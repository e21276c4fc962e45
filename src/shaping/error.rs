//! Typed failures reported by the graph builders.

use thiserror::Error;

/// Everything that can go wrong while shaping a backend payload into a graph.
///
/// An empty payload is never an error: builders return an empty (or center-only)
/// graph for it.
#[derive(Debug, Error)]
pub enum ShapeError {
	/// A raw entity is missing a required field.
	///
	/// `entity` locates the offending value in the payload, e.g. `paper_nodes[3]`
	/// or `paths[1][0]`.
	#[error("invalid entity {entity}: missing `{field}`")]
	InvalidEntity {
		/// Payload location of the entity.
		entity: String,
		/// Name of the missing field.
		field: &'static str,
	},

	/// A label that the category registry does not know.
	#[error("unknown category label `{0}`")]
	UnknownCategory(String),

	/// The backend answered with an error envelope instead of data.
	#[error("backend error: {0}")]
	Backend(String),

	/// JSON text that does not have the expected wire shape.
	#[error("malformed payload: {0}")]
	Payload(#[from] serde_json::Error),

	/// A finished graph violates its structural invariants.
	#[error("graph integrity violated: {0}")]
	Integrity(String),
}

impl ShapeError {
	pub(crate) fn missing(entity: impl Into<String>, field: &'static str) -> Self {
		Self::InvalidEntity {
			entity: entity.into(),
			field,
		}
	}
}

//! Wire shapes of the search backend's responses.
//!
//! Required fields are modelled as `Option` so that a missing or `null` value
//! surfaces as [`ShapeError::InvalidEntity`] with its payload location, instead of
//! a generic deserialization failure. Unknown fields are ignored.

use std::fmt;

use serde::Deserialize;

use super::error::ShapeError;

/// `GET /search?query=...`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
	/// Result documents, passed through untouched.
	pub list: Vec<serde_json::Value>,
	/// Data for the frequency graph.
	pub freq_graph: FreqGraphPayload,
}

/// Keywords shared by a set of papers, papers ordered by publication date.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FreqGraphPayload {
	/// Keywords, in legend order.
	pub key_nodes: Vec<RawKeywordEntity>,
	/// Papers, oldest first.
	pub paper_nodes: Vec<RawPaperEntity>,
}

/// Keyword entry of a frequency graph.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawKeywordEntity {
	/// Keyword text. Required.
	#[serde(default)]
	pub name: Option<String>,
}

/// Paper entry of a frequency graph.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPaperEntity {
	/// Paper title. Required.
	#[serde(default)]
	pub name: Option<String>,
	/// Publication date as sent by the backend. Required.
	#[serde(default)]
	pub date: Option<String>,
}

/// `GET /path/<documentId>`
///
/// The backend answers `{"error": "..."}` for documents that were not part of the
/// last search; that shape lands in `error`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathPayload {
	/// Title of the queried document. Required unless `error` is set.
	pub query_name: Option<String>,
	/// Handle of the queried document.
	pub query_uri: Option<String>,
	/// Each path is stored root first: the element closest to the query comes first.
	pub paths: Vec<Vec<RawPathNode>>,
	/// Backend failure message.
	pub error: Option<String>,
}

/// One entity along a path.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPathNode {
	/// Entity text. Required.
	#[serde(default)]
	pub name: Option<String>,
	/// `keyword`, `title` or `center`.
	#[serde(default)]
	pub label: Option<String>,
	/// Handle for titles; empty strings count as absent.
	#[serde(default)]
	pub uri: Option<String>,
}

/// `GET /graph/search?query=...` and `GET /graph/default`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct KnowledgeGraphPayload {
	/// Graph database nodes.
	pub nodes: Vec<RawKgNode>,
	/// Relationships between `nodes`.
	pub links: Vec<RawKgLink>,
}

/// Graph database node.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawKgNode {
	/// Node id. Required.
	#[serde(default)]
	pub id: Option<RawId>,
	/// Display text. Required.
	#[serde(default)]
	pub name: Option<String>,
	/// Database labels; the first one picks the category.
	#[serde(default)]
	pub labels: Vec<String>,
}

/// Graph database relationship.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawKgLink {
	/// Start node id. Required.
	#[serde(default)]
	pub source: Option<RawId>,
	/// End node id. Required.
	#[serde(default)]
	pub target: Option<RawId>,
	/// Relationship type.
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
}

/// Graph database ids arrive as numbers; other producers send strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
	/// Numeric id.
	Int(i64),
	/// String id.
	Text(String),
}

impl fmt::Display for RawId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RawId::Int(id) => write!(f, "{id}"),
			RawId::Text(id) => f.write_str(id),
		}
	}
}

/// Take a required field or report where it was missing.
pub(crate) fn required<'a>(
	value: &'a Option<String>,
	entity: impl FnOnce() -> String,
	field: &'static str,
) -> Result<&'a str, ShapeError> {
	value
		.as_deref()
		.ok_or_else(|| ShapeError::missing(entity(), field))
}

/// The backend sends `""` when it has no link for an entity.
pub(crate) fn non_empty(uri: &Option<String>) -> Option<String> {
	uri.as_deref()
		.filter(|uri| !uri.is_empty())
		.map(str::to_string)
}

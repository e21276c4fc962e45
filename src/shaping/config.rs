//! Layout, sizing and label configuration for the builders.
//!
//! Every struct has a `Default` matching the search UI's stock look and
//! deserializes with `#[serde(default)]`, so a partial JSON document only needs
//! the fields it overrides.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::category::{LEGEND_KEYWORD, LEGEND_PAPER, LEGEND_QUERY};
use super::error::ShapeError;
use super::label::LabelFormat;

/// Node symbol sizes keyed by category name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizeTable {
	/// Size per legend category name.
	pub by_category: BTreeMap<String, f64>,
	/// Size for categories missing from `by_category`.
	pub fallback: f64,
}

impl SizeTable {
	/// Symbol size for nodes of the category called `name`.
	pub fn size_of(&self, name: &str) -> f64 {
		self.by_category.get(name).copied().unwrap_or(self.fallback)
	}
}

impl Default for SizeTable {
	fn default() -> Self {
		Self {
			by_category: [
				(LEGEND_KEYWORD, 25.0),
				(LEGEND_QUERY, 35.0),
				(LEGEND_PAPER, 30.0),
			]
			.into_iter()
			.map(|(k, v)| (k.to_string(), v))
			.collect(),
			fallback: 20.0,
		}
	}
}

/// Fixed two-row layout of the frequency graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrequencyLayout {
	/// X of the first keyword.
	pub keyword_origin_x: f64,
	/// Horizontal distance between neighbouring keywords.
	pub keyword_pitch: f64,
	/// Y of the keyword row.
	pub keyword_row_y: f64,
	/// X of the earliest paper.
	pub paper_origin_x: f64,
	/// Horizontal distance between neighbouring papers on the timeline.
	pub paper_pitch: f64,
	/// Y of the paper timeline.
	pub paper_row_y: f64,
}

impl Default for FrequencyLayout {
	fn default() -> Self {
		Self {
			keyword_origin_x: 400.0,
			keyword_pitch: 250.0,
			keyword_row_y: 80.0,
			paper_origin_x: 100.0,
			paper_pitch: 150.0,
			paper_row_y: 300.0,
		}
	}
}

/// Ego-network layout of the path graph: paths fan out horizontally around the
/// center, nodes within a path step down vertically.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathLayout {
	/// Query node position.
	pub center_x: f64,
	/// See `center_x`.
	pub center_y: f64,
	/// Horizontal distance between neighbouring paths.
	pub path_spacing_x: f64,
	/// Vertical step per position along a path.
	pub path_spacing_y: f64,
}

impl Default for PathLayout {
	fn default() -> Self {
		Self {
			center_x: 200.0,
			center_y: 200.0,
			path_spacing_x: 180.0,
			path_spacing_y: 100.0,
		}
	}
}

/// Force-layout knowledge graph sizing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct KnowledgeLayout {
	/// Symbol size of every node.
	pub node_size: f64,
}

impl Default for KnowledgeLayout {
	fn default() -> Self {
		Self { node_size: 30.0 }
	}
}

/// All builder configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapingConfig {
	/// Label wrapping budget.
	pub label: LabelFormat,
	/// Node sizes for the frequency and path graphs.
	pub sizes: SizeTable,
	/// Frequency graph layout.
	pub frequency: FrequencyLayout,
	/// Path graph layout.
	pub path: PathLayout,
	/// Knowledge graph sizing.
	pub knowledge: KnowledgeLayout,
}

impl ShapingConfig {
	/// Parse a (possibly partial) JSON configuration on top of the defaults.
	pub fn from_json(text: &str) -> Result<Self, ShapeError> {
		Ok(serde_json::from_str(text)?)
	}
}

//! Canonical graph model handed to the rendering side.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::ShapeError;

/// A node in the finished graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	/// Unique within one [`GraphModel`]. Edges refer to nodes by this id.
	pub id: String,
	/// Wrapped/truncated text drawn on the node.
	pub display_label: String,
	/// Original untruncated text, for tooltips.
	pub full_label: String,
	/// Index into [`GraphModel::categories`].
	pub category: usize,
	/// Click-through target, only for navigable entities.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uri: Option<String>,
	/// Fixed layout position. Absent for force layouts.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub x: Option<f64>,
	/// See `x`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub y: Option<f64>,
	/// Symbol size in pixels.
	pub size: f64,
}

impl GraphNode {
	/// Whether the builder pinned this node to explicit coordinates.
	pub fn is_fixed(&self) -> bool {
		self.x.is_some() && self.y.is_some()
	}
}

/// An edge between two nodes, by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
	/// Id of the node the edge starts at.
	pub source: String,
	/// Id of the node the edge ends at.
	pub target: String,
	/// Directed edges are drawn with an arrow at the target.
	pub directed: bool,
	/// Relationship name, when the backend supplies one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

impl GraphEdge {
	/// Edge drawn with an arrow head at `target`.
	pub fn directed(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			directed: true,
			label: None,
		}
	}

	/// Plain line between `source` and `target`.
	pub fn undirected(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			directed: false,
			label: None,
		}
	}

	/// Attach a text label to the edge.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

/// One legend entry. Its position in [`GraphModel::categories`] is the category index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpec {
	/// Legend text.
	pub name: String,
	/// Index into the category palette.
	pub color_index: usize,
}

/// Complete graph: nodes, edges and the legend their categories index into.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
	/// Nodes, with unique ids.
	pub nodes: Vec<GraphNode>,
	/// Edges, whose endpoints are all in `nodes`.
	pub edges: Vec<GraphEdge>,
	/// Legend, indexed by [`GraphNode::category`].
	pub categories: Vec<CategorySpec>,
}

impl GraphModel {
	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Edges touching the node with `id`, in either direction.
	pub fn edges_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
		self.edges
			.iter()
			.filter(move |e| e.source == id || e.target == id)
	}

	/// Verify the structural invariants: node ids are unique, every edge endpoint
	/// names an existing node and every node category indexes into `categories`.
	pub fn check(&self) -> Result<(), ShapeError> {
		let mut ids = HashSet::with_capacity(self.nodes.len());
		for node in &self.nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(ShapeError::Integrity(format!(
					"duplicate node id `{}`",
					node.id
				)));
			}
			if node.category >= self.categories.len() {
				return Err(ShapeError::Integrity(format!(
					"node `{}` has category {} but only {} categories exist",
					node.id,
					node.category,
					self.categories.len()
				)));
			}
		}
		for edge in &self.edges {
			for end in [&edge.source, &edge.target] {
				if !ids.contains(end.as_str()) {
					return Err(ShapeError::Integrity(format!(
						"edge {} -> {} references missing node `{}`",
						edge.source, edge.target, end
					)));
				}
			}
		}
		Ok(())
	}
}

//! Path graph: an ego-network around the queried document.
//!
//! The query sits at the center. Each path connects it to one leaf entity,
//! possibly through intermediate entities, and is laid out as its own column:
//! columns are spread horizontally around the center, nodes step down one row
//! per position from the query end.
//!
//! Node identity is the display label. Two raw nodes with the same display label
//! become one node, across paths too. Titles are wrapped before comparison, so
//! two long titles that only differ after the truncation point also merge.
//!
//! Only the center node is sized as the query. Inside a path, titles take the
//! paper size and every other label the keyword size.

use std::collections::HashMap;

use log::debug;

use super::category::{CategoryRegistry, LEGEND_KEYWORD, LEGEND_PAPER, LEGEND_QUERY};
use super::config::ShapingConfig;
use super::error::ShapeError;
use super::raw::{PathPayload, non_empty, required};
use super::types::{GraphEdge, GraphModel, GraphNode};

/// Path node label whose names are wrapped before use.
pub const TITLE_LABEL: &str = "title";

/// Nodes collected so far, keyed by display label, in first-seen order.
#[derive(Default)]
struct NodeIndex {
	nodes: Vec<GraphNode>,
	by_label: HashMap<String, usize>,
}

impl NodeIndex {
	fn contains(&self, label: &str) -> bool {
		self.by_label.contains_key(label)
	}

	fn insert(&mut self, node: GraphNode) {
		self.by_label.insert(node.id.clone(), self.nodes.len());
		self.nodes.push(node);
	}
}

/// Build the ego-network graph from a `/path/<id>` payload.
pub fn build_path_graph(
	payload: &PathPayload,
	config: &ShapingConfig,
) -> Result<GraphModel, ShapeError> {
	if let Some(message) = &payload.error {
		return Err(ShapeError::Backend(message.clone()));
	}

	let registry = CategoryRegistry::legend();
	let layout = &config.path;
	let mut index = NodeIndex::default();
	let mut edges = Vec::new();

	let query_name = required(&payload.query_name, || "query".to_string(), "query_name")?;
	let center_key = config.label.wrap(query_name);
	index.insert(GraphNode {
		id: center_key.clone(),
		display_label: center_key.clone(),
		full_label: query_name.to_string(),
		category: registry.index_of(LEGEND_QUERY)?,
		uri: non_empty(&payload.query_uri),
		x: Some(layout.center_x),
		y: Some(layout.center_y),
		size: config.sizes.size_of(LEGEND_QUERY),
	});

	let spread = payload.paths.len().saturating_sub(1) as f64 / 2.0;

	for (path_idx, path) in payload.paths.iter().enumerate() {
		let offset_x = layout.center_x + (path_idx as f64 - spread) * layout.path_spacing_x;
		let mut prev = center_key.clone();

		// Stored root first; walk from the leaf end back towards the center.
		for (i, raw) in path.iter().enumerate().rev() {
			let entity = || format!("paths[{path_idx}][{i}]");
			let name = required(&raw.name, entity, "name")?;
			let label = required(&raw.label, entity, "label")?;
			let (category, _) = registry.classify(label)?;

			let (display, size_key) = if label == TITLE_LABEL {
				(config.label.wrap(name), LEGEND_PAPER)
			} else {
				(name.to_string(), LEGEND_KEYWORD)
			};

			if !index.contains(&display) {
				let depth = (path.len() - i) as f64;
				index.insert(GraphNode {
					id: display.clone(),
					display_label: display.clone(),
					full_label: name.to_string(),
					category,
					uri: non_empty(&raw.uri),
					x: Some(offset_x),
					y: Some(layout.center_y + depth * layout.path_spacing_y),
					size: config.sizes.size_of(size_key),
				});
			}

			edges.push(GraphEdge::directed(display.clone(), prev));
			prev = display;
		}
	}

	debug!(
		"path graph: {} paths, {} nodes, {} edges",
		payload.paths.len(),
		index.nodes.len(),
		edges.len()
	);

	Ok(GraphModel {
		nodes: index.nodes,
		edges,
		categories: registry.categories().to_vec(),
	})
}

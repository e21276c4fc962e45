//! Frequency graph: shared keywords on a top row, the papers that share them on a
//! timeline below.
//!
//! Papers arrive already sorted by publication date and are chained in that order
//! by directed timeline edges. Every keyword is linked to every paper.

use log::debug;

use super::category::{CategoryRegistry, LEGEND_KEYWORD, LEGEND_PAPER};
use super::config::ShapingConfig;
use super::error::ShapeError;
use super::raw::{FreqGraphPayload, required};
use super::types::{GraphEdge, GraphModel, GraphNode};

/// Id of the `i`-th keyword node.
pub fn keyword_id(i: usize) -> String {
	format!("k{i}")
}

/// Id of the `i`-th paper node.
pub fn paper_id(i: usize) -> String {
	format!("p{i}")
}

/// Build the keyword/paper timeline graph from a `freq_graph` payload.
pub fn build_frequency_graph(
	payload: &FreqGraphPayload,
	config: &ShapingConfig,
) -> Result<GraphModel, ShapeError> {
	let registry = CategoryRegistry::legend();
	let keyword_category = registry.index_of(LEGEND_KEYWORD)?;
	let paper_category = registry.index_of(LEGEND_PAPER)?;
	let layout = &config.frequency;

	let mut nodes = Vec::with_capacity(payload.key_nodes.len() + payload.paper_nodes.len());
	let mut edges = Vec::new();

	for (i, keyword) in payload.key_nodes.iter().enumerate() {
		let name = required(&keyword.name, || format!("key_nodes[{i}]"), "name")?;
		nodes.push(GraphNode {
			id: keyword_id(i),
			display_label: name.to_string(),
			full_label: name.to_string(),
			category: keyword_category,
			uri: None,
			x: Some(layout.keyword_origin_x + i as f64 * layout.keyword_pitch),
			y: Some(layout.keyword_row_y),
			size: config.sizes.size_of(LEGEND_KEYWORD),
		});
	}

	for (i, paper) in payload.paper_nodes.iter().enumerate() {
		let name = required(&paper.name, || format!("paper_nodes[{i}]"), "name")?;
		let date = required(&paper.date, || format!("paper_nodes[{i}]"), "date")?;
		let id = paper_id(i);

		nodes.push(GraphNode {
			id: id.clone(),
			display_label: format!("{}\n{}", config.label.wrap(name), date),
			full_label: name.to_string(),
			category: paper_category,
			uri: None,
			x: Some(layout.paper_origin_x + i as f64 * layout.paper_pitch),
			y: Some(layout.paper_row_y),
			size: config.sizes.size_of(LEGEND_PAPER),
		});

		if i > 0 {
			edges.push(GraphEdge::directed(paper_id(i - 1), id.clone()));
		}
		// Full bipartite fan-out, not weighted by co-occurrence.
		for k in 0..payload.key_nodes.len() {
			edges.push(GraphEdge::undirected(keyword_id(k), id.clone()));
		}
	}

	debug!(
		"frequency graph: {} keywords, {} papers, {} edges",
		payload.key_nodes.len(),
		payload.paper_nodes.len(),
		edges.len()
	);

	Ok(GraphModel {
		nodes,
		edges,
		categories: registry.categories().to_vec(),
	})
}

//! Knowledge-graph view: a pre-shaped node/link payload straight from the graph
//! database, drawn with a force layout.
//!
//! Ids pass through as strings. Each node is colored by its first database
//! label: keywords and titles get their own colors, everything else is gray.

use std::collections::HashSet;

use log::{debug, warn};

use super::category::{CategoryRegistry, KG_OTHER, KG_TITLE};
use super::config::ShapingConfig;
use super::error::ShapeError;
use super::raw::{KnowledgeGraphPayload, RawId};
use super::types::{GraphEdge, GraphModel, GraphNode};

/// Build the force-layout graph from a `/graph/search` or `/graph/default` payload.
///
/// Repeated node ids keep their first occurrence. Links to ids that are not in
/// `nodes` are dropped.
pub fn build_knowledge_graph(
	payload: &KnowledgeGraphPayload,
	config: &ShapingConfig,
) -> Result<GraphModel, ShapeError> {
	let registry = CategoryRegistry::knowledge();
	let mut seen = HashSet::with_capacity(payload.nodes.len());
	let mut nodes = Vec::with_capacity(payload.nodes.len());

	for (i, raw) in payload.nodes.iter().enumerate() {
		let id = raw
			.id
			.as_ref()
			.map(RawId::to_string)
			.ok_or_else(|| ShapeError::missing(format!("nodes[{i}]"), "id"))?;
		let name = raw
			.name
			.as_deref()
			.ok_or_else(|| ShapeError::missing(format!("nodes[{i}]"), "name"))?;

		if !seen.insert(id.clone()) {
			continue;
		}

		let label = raw.labels.first().map_or(KG_OTHER, String::as_str);
		let (category, spec) = registry.classify(label)?;
		let display_label = if spec.name == KG_TITLE {
			config.label.wrap(name)
		} else {
			name.to_string()
		};

		nodes.push(GraphNode {
			id,
			display_label,
			full_label: name.to_string(),
			category,
			uri: None,
			x: None,
			y: None,
			size: config.knowledge.node_size,
		});
	}

	let mut edges = Vec::with_capacity(payload.links.len());
	for (i, link) in payload.links.iter().enumerate() {
		let (Some(source), Some(target)) = (&link.source, &link.target) else {
			return Err(ShapeError::missing(
				format!("links[{i}]"),
				if link.source.is_none() { "source" } else { "target" },
			));
		};
		let (source, target) = (source.to_string(), target.to_string());
		if !seen.contains(&source) || !seen.contains(&target) {
			warn!("knowledge graph: dropping link {source} -> {target} to unknown node");
			continue;
		}

		let edge = GraphEdge::undirected(source, target);
		edges.push(match &link.kind {
			Some(kind) => edge.with_label(kind.clone()),
			None => edge,
		});
	}

	debug!(
		"knowledge graph: {} nodes, {} edges",
		nodes.len(),
		edges.len()
	);

	Ok(GraphModel {
		nodes,
		edges,
		categories: registry.categories().to_vec(),
	})
}

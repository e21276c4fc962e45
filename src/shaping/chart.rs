//! Minimal graph-series option object for the chart renderer.
//!
//! Categories become the legend and carry their palette color, nodes become
//! points sized by their symbol size, edges become lines. Graphs whose nodes all
//! have coordinates are drawn as-is; anything else is handed to the renderer's
//! force layout.

use serde_json::{Map, Value, json};

use super::theme::CategoryPalette;
use super::types::{GraphEdge, GraphModel, GraphNode};

const FORCE_REPULSION: f64 = 300.0;
const FORCE_EDGE_LENGTH: f64 = 150.0;
const EDGE_WIDTH: f64 = 1.5;
const ARROW_SIZE: f64 = 10.0;

/// Build the chart option for `model`, coloring categories from `palette`.
pub fn chart_option(model: &GraphModel, palette: &CategoryPalette) -> Value {
	let fixed = !model.nodes.is_empty() && model.nodes.iter().all(GraphNode::is_fixed);

	let categories: Vec<Value> = model
		.categories
		.iter()
		.map(|c| {
			json!({
				"name": c.name,
				"itemStyle": { "color": palette.get(c.color_index).to_css_rgb() },
			})
		})
		.collect();

	let mut series = json!({
		"type": "graph",
		"layout": if fixed { "none" } else { "force" },
		"roam": true,
		"categories": categories,
		"data": model.nodes.iter().map(node_data).collect::<Vec<_>>(),
		"links": model.edges.iter().map(link_data).collect::<Vec<_>>(),
		"label": {
			"show": true,
			"position": if fixed { "bottom" } else { "right" },
		},
		"lineStyle": { "color": "source", "width": EDGE_WIDTH, "curveness": 0 },
	});
	if !fixed {
		series["force"] = json!({
			"repulsion": FORCE_REPULSION,
			"edgeLength": FORCE_EDGE_LENGTH,
		});
	}

	json!({
		"tooltip": {},
		"legend": {
			"data": model.categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
			"orient": "vertical",
			"left": "right",
		},
		"series": [series],
	})
}

fn node_data(node: &GraphNode) -> Value {
	let mut data = Map::new();
	data.insert("id".into(), json!(node.id));
	data.insert("name".into(), json!(node.display_label));
	data.insert("fullName".into(), json!(node.full_label));
	data.insert("category".into(), json!(node.category));
	data.insert("symbolSize".into(), json!(node.size));
	if let (Some(x), Some(y)) = (node.x, node.y) {
		data.insert("x".into(), json!(x));
		data.insert("y".into(), json!(y));
	}
	// Clicking a node opens its uri.
	if let Some(uri) = &node.uri {
		data.insert("uri".into(), json!(uri));
	}
	Value::Object(data)
}

fn link_data(edge: &GraphEdge) -> Value {
	let mut link = json!({ "source": edge.source, "target": edge.target });
	if edge.directed {
		link["symbol"] = json!(["none", "arrow"]);
		link["symbolSize"] = json!(ARROW_SIZE);
	}
	if let Some(label) = &edge.label {
		link["label"] = json!({ "show": true, "formatter": label });
	}
	link
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shaping::category::CategoryRegistry;

	fn node(id: &str, fixed: bool, uri: Option<&str>) -> GraphNode {
		GraphNode {
			id: id.into(),
			display_label: id.into(),
			full_label: format!("{id} (full)"),
			category: 0,
			uri: uri.map(str::to_string),
			x: fixed.then_some(1.0),
			y: fixed.then_some(2.0),
			size: 25.0,
		}
	}

	fn model(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> GraphModel {
		GraphModel {
			nodes,
			edges,
			categories: CategoryRegistry::legend().categories().to_vec(),
		}
	}

	#[test]
	fn fixed_layout_graph() {
		let option = chart_option(
			&model(
				vec![node("a", true, Some("https://example.org/a")), node("b", true, None)],
				vec![GraphEdge::directed("a", "b")],
			),
			&CategoryPalette::legend(),
		);
		let series = &option["series"][0];
		assert_eq!(series["layout"], "none");
		assert_eq!(series["label"]["position"], "bottom");
		assert!(series.get("force").is_none());
		assert_eq!(option["legend"]["data"], json!(["Keyword", "Query", "Paper"]));
		assert_eq!(series["categories"][1]["itemStyle"]["color"], "#ff7f0e");

		let a = &series["data"][0];
		assert_eq!(a["symbolSize"], 25.0);
		assert_eq!(a["fullName"], "a (full)");
		assert_eq!(a["uri"], "https://example.org/a");
		assert_eq!(a["x"], 1.0);
		assert!(series["data"][1].get("uri").is_none());

		assert_eq!(series["links"][0]["symbol"], json!(["none", "arrow"]));
	}

	#[test]
	fn force_layout_when_any_node_is_free() {
		let option = chart_option(
			&model(
				vec![node("a", true, None), node("b", false, None)],
				vec![GraphEdge::undirected("a", "b").with_label("CITES")],
			),
			&CategoryPalette::knowledge(),
		);
		let series = &option["series"][0];
		assert_eq!(series["layout"], "force");
		assert_eq!(series["force"]["repulsion"], 300.0);
		assert!(series["data"][1].get("x").is_none());

		let link = &series["links"][0];
		assert!(link.get("symbol").is_none());
		assert_eq!(link["label"]["formatter"], "CITES");
	}

	#[test]
	fn empty_graph_still_has_legend() {
		let option = chart_option(&model(vec![], vec![]), &CategoryPalette::default());
		assert_eq!(option["series"][0]["data"], json!([]));
		assert_eq!(option["legend"]["data"].as_array().map(Vec::len), Some(3));
	}
}

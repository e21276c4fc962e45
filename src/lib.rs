//! kg-shaping: graph data shaping for the knowledge-search UI.
//!
//! This crate converts the search backend's JSON payloads into node/link graph
//! models, and those models into chart options for the renderer. It builds
//! natively and as a WASM module; on `wasm32` the JSON entry points below are
//! exported to the browser.

pub mod shaping;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use shaping::{
	GraphEdge, GraphModel, GraphNode, ShapeError, ShapingConfig, build_frequency_graph,
	build_knowledge_graph, build_path_graph, chart_option,
};

use shaping::{KnowledgeGraphPayload, PathPayload, SearchResponse};

/// Initialize logging and panic hooks for the WASM target.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
	let _ = console_log::init_with_level(log::Level::Debug);
	console_error_panic_hook::set_once();
	log::info!("kg-shaping: logging initialized");
}

/// Frequency graph from the text of a `/search` response.
pub fn shape_search_json(text: &str, config: &ShapingConfig) -> Result<GraphModel, ShapeError> {
	let response: SearchResponse = serde_json::from_str(text)?;
	build_frequency_graph(&response.freq_graph, config)
}

/// Path graph from the text of a `/path/<id>` response.
pub fn shape_path_json(text: &str, config: &ShapingConfig) -> Result<GraphModel, ShapeError> {
	let payload: PathPayload = serde_json::from_str(text)?;
	build_path_graph(&payload, config)
}

/// Knowledge graph from the text of a `/graph/search` or `/graph/default` response.
pub fn shape_knowledge_json(
	text: &str,
	config: &ShapingConfig,
) -> Result<GraphModel, ShapeError> {
	let payload: KnowledgeGraphPayload = serde_json::from_str(text)?;
	build_knowledge_graph(&payload, config)
}

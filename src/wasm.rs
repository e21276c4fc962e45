//! Browser entry points. Everything crosses the boundary as JSON text.

use wasm_bindgen::prelude::*;

use crate::shaping::{CategoryPalette, GraphModel, ShapeError, ShapingConfig, chart_option};

impl From<ShapeError> for JsValue {
	fn from(err: ShapeError) -> Self {
		JsError::new(&err.to_string()).into()
	}
}

/// Runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
	crate::init_logging();
}

fn config(config_json: Option<String>) -> Result<ShapingConfig, ShapeError> {
	match config_json {
		Some(text) => ShapingConfig::from_json(&text),
		None => Ok(ShapingConfig::default()),
	}
}

fn to_json(model: &GraphModel) -> Result<String, ShapeError> {
	Ok(serde_json::to_string(model)?)
}

/// Graph model JSON for a `/search` response.
#[wasm_bindgen(js_name = shapeSearch)]
pub fn shape_search(text: &str, config_json: Option<String>) -> Result<String, JsValue> {
	let model = crate::shape_search_json(text, &config(config_json)?)?;
	Ok(to_json(&model)?)
}

/// Graph model JSON for a `/path/<id>` response.
#[wasm_bindgen(js_name = shapePath)]
pub fn shape_path(text: &str, config_json: Option<String>) -> Result<String, JsValue> {
	let model = crate::shape_path_json(text, &config(config_json)?)?;
	Ok(to_json(&model)?)
}

/// Graph model JSON for a `/graph/...` response.
#[wasm_bindgen(js_name = shapeKnowledge)]
pub fn shape_knowledge(text: &str, config_json: Option<String>) -> Result<String, JsValue> {
	let model = crate::shape_knowledge_json(text, &config(config_json)?)?;
	Ok(to_json(&model)?)
}

/// Chart option JSON for a graph model produced by one of the `shape*` calls.
///
/// `knowledge` selects the knowledge-graph palette instead of the legend palette.
#[wasm_bindgen(js_name = chartOption)]
pub fn chart(model_json: &str, knowledge: bool) -> Result<String, JsValue> {
	let model: GraphModel = serde_json::from_str(model_json).map_err(ShapeError::from)?;
	let palette = if knowledge {
		CategoryPalette::knowledge()
	} else {
		CategoryPalette::legend()
	};
	let option = chart_option(&model, &palette);
	Ok(serde_json::to_string(&option).map_err(ShapeError::from)?)
}

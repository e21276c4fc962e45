//! Graph data shaping for the knowledge-search UI.
//!
//! Turns backend payloads into one canonical [`GraphModel`]:
//! - Frequency graph: shared keywords on a row above a date-ordered paper timeline
//! - Path graph: an ego-network of paths from the queried paper to its keywords
//! - Knowledge graph: database nodes and relationships, force laid out
//!
//! Every builder is a pure function of its payload and a [`ShapingConfig`]; each
//! call allocates its own state, so builders can run concurrently.
//!
//! # Example
//!
//! ```
//! use kg_shaping::shaping::{build_frequency_graph, FreqGraphPayload, ShapingConfig};
//!
//! let payload: FreqGraphPayload = serde_json::from_str(
//!     r#"{"key_nodes": [{"name": "A"}],
//!         "paper_nodes": [{"name": "P1", "date": "2020"}, {"name": "P2", "date": "2021"}]}"#,
//! ).unwrap();
//! let graph = build_frequency_graph(&payload, &ShapingConfig::default()).unwrap();
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.edges.len(), 3);
//! ```

mod category;
pub mod chart;
mod config;
mod error;
mod frequency;
mod knowledge;
pub mod label;
mod path;
mod raw;
pub mod theme;
mod types;

pub use category::CategoryRegistry;
pub use chart::chart_option;
pub use config::{FrequencyLayout, KnowledgeLayout, PathLayout, ShapingConfig, SizeTable};
pub use error::ShapeError;
pub use frequency::{build_frequency_graph, keyword_id, paper_id};
pub use knowledge::build_knowledge_graph;
pub use label::{LabelFormat, wrap};
pub use path::build_path_graph;
pub use raw::{
	FreqGraphPayload, KnowledgeGraphPayload, PathPayload, RawId, RawKeywordEntity, RawKgLink,
	RawKgNode, RawPaperEntity, RawPathNode, SearchResponse,
};
pub use theme::CategoryPalette;
pub use types::{CategorySpec, GraphEdge, GraphModel, GraphNode};

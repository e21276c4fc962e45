//! Property-based invariant tests for label wrapping and graph building.
//!
//! 1. Wrapped labels never show more than `max_lines * max_chars_per_line` characters.
//! 2. Text within budget is reproduced exactly, line breaks aside.
//! 3. Frequency graphs: every edge endpoint exists, categories are in range,
//!    node and edge counts follow the payload.
//! 4. Path graphs: same structural invariants, one node per display label.
//! 5. Knowledge graphs: same structural invariants with colliding numeric and
//!    string ids and links to absent nodes.

use std::collections::HashSet;

use kg_shaping::shaping::{
	FreqGraphPayload, KnowledgeGraphPayload, PathPayload, RawId, RawKeywordEntity, RawKgLink,
	RawKgNode, RawPaperEntity, RawPathNode, label::ELLIPSIS, wrap,
};
use kg_shaping::{ShapingConfig, build_frequency_graph, build_knowledge_graph, build_path_graph};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn text_strategy() -> impl Strategy<Value = String> {
	prop::collection::vec(prop::char::range('a', 'f'), 0..40).prop_map(|c| c.into_iter().collect())
}

fn visible_len(label: &str) -> usize {
	label.chars().filter(|c| *c != '\n' && *c != ELLIPSIS).count()
}

fn freq_payload_strategy() -> impl Strategy<Value = FreqGraphPayload> {
	(
		prop::collection::vec(text_strategy(), 0..6),
		prop::collection::vec((text_strategy(), "[0-9]{4}"), 0..8),
	)
		.prop_map(|(keywords, papers)| FreqGraphPayload {
			key_nodes: keywords
				.into_iter()
				.map(|name| RawKeywordEntity { name: Some(name) })
				.collect(),
			paper_nodes: papers
				.into_iter()
				.map(|(name, date)| RawPaperEntity {
					name: Some(name),
					date: Some(date),
				})
				.collect(),
		})
}

fn path_node_strategy() -> impl Strategy<Value = RawPathNode> {
	// Small alphabet so names collide across paths.
	(
		prop::collection::vec(prop::char::range('a', 'c'), 1..30),
		prop::sample::select(vec!["keyword", "title", "center"]),
	)
		.prop_map(|(name, label)| RawPathNode {
			name: Some(name.into_iter().collect()),
			label: Some(label.to_string()),
			uri: None,
		})
}

fn path_payload_strategy() -> impl Strategy<Value = PathPayload> {
	(
		text_strategy(),
		prop::collection::vec(prop::collection::vec(path_node_strategy(), 0..5), 0..6),
	)
		.prop_map(|(query, paths)| PathPayload {
			query_name: Some(query),
			query_uri: None,
			paths,
			error: None,
		})
}

/// `Int(n)` and `Text("n")` render to the same id.
fn raw_id_strategy(max: i64) -> impl Strategy<Value = RawId> {
	prop_oneof![
		(0..max).prop_map(RawId::Int),
		(0..max).prop_map(|n| RawId::Text(n.to_string())),
	]
}

fn knowledge_payload_strategy() -> impl Strategy<Value = KnowledgeGraphPayload> {
	let node = (
		raw_id_strategy(6),
		text_strategy(),
		prop::collection::vec(
			prop::sample::select(vec!["Keyword", "Title", "keyword", "Institution"]),
			0..3,
		),
	)
		.prop_map(|(id, name, labels)| RawKgNode {
			id: Some(id),
			name: Some(name),
			labels: labels.into_iter().map(String::from).collect(),
		});
	// Link ends range past the node ids, so some links dangle.
	let link = (raw_id_strategy(9), raw_id_strategy(9), prop::option::of("[A-Z_]{1,8}"))
		.prop_map(|(source, target, kind)| RawKgLink {
			source: Some(source),
			target: Some(target),
			kind,
		});
	(
		prop::collection::vec(node, 0..10),
		prop::collection::vec(link, 0..15),
	)
		.prop_map(|(nodes, links)| KnowledgeGraphPayload { nodes, links })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Wrapped labels respect the budget
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn wrap_respects_budget(s in text_strategy(), lines in 0usize..5, width in 0usize..10) {
		let out = wrap(&s, lines, width);
		prop_assert!(visible_len(&out) <= lines * width, "{:?} -> {:?}", s, out);
		prop_assert!(out.lines().count() <= lines.max(1));
		prop_assert!(out.lines().all(|l| l.trim_end_matches(ELLIPSIS).chars().count() <= width));
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Text within budget survives intact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn wrap_within_budget_is_lossless(
		(lines, width, s) in (1usize..5, 1usize..10).prop_flat_map(|(lines, width)| {
			(
				Just(lines),
				Just(width),
				prop::collection::vec(prop::char::range('a', 'f'), 0..=lines * width)
					.prop_map(|c| c.into_iter().collect::<String>()),
			)
		})
	) {
		let out = wrap(&s, lines, width);
		prop_assert!(!out.contains(ELLIPSIS));
		prop_assert_eq!(out.replace('\n', ""), s);
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Frequency graphs are structurally valid
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn frequency_graph_is_consistent(payload in freq_payload_strategy()) {
		let model = build_frequency_graph(&payload, &ShapingConfig::default()).unwrap();
		prop_assert!(model.check().is_ok());

		let (k, p) = (payload.key_nodes.len(), payload.paper_nodes.len());
		prop_assert_eq!(model.nodes.len(), k + p);
		prop_assert_eq!(model.edges.len(), p.saturating_sub(1) + k * p);
		prop_assert_eq!(model.edges.iter().filter(|e| e.directed).count(), p.saturating_sub(1));
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Path graphs are structurally valid and deduplicated
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn path_graph_is_consistent(payload in path_payload_strategy()) {
		let model = build_path_graph(&payload, &ShapingConfig::default()).unwrap();
		prop_assert!(model.check().is_ok());

		let labels: HashSet<_> = model.nodes.iter().map(|n| n.display_label.as_str()).collect();
		prop_assert_eq!(labels.len(), model.nodes.len());

		let walked: usize = payload.paths.iter().map(Vec::len).sum();
		prop_assert_eq!(model.edges.len(), walked);
		prop_assert!(model.edges.iter().all(|e| e.directed));
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Knowledge graphs deduplicate ids and drop dangling links
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn knowledge_graph_is_consistent(payload in knowledge_payload_strategy()) {
		let model = build_knowledge_graph(&payload, &ShapingConfig::default()).unwrap();
		prop_assert!(model.check().is_ok());

		let ids: HashSet<_> = model.nodes.iter().map(|n| n.id.as_str()).collect();
		prop_assert_eq!(ids.len(), model.nodes.len());

		let raw_ids: HashSet<_> = payload
			.nodes
			.iter()
			.filter_map(|n| n.id.as_ref().map(RawId::to_string))
			.collect();
		prop_assert_eq!(model.nodes.len(), raw_ids.len());

		let kept = payload
			.links
			.iter()
			.filter(|l| {
				[&l.source, &l.target]
					.into_iter()
					.all(|end| matches!(end, Some(id) if raw_ids.contains(&id.to_string())))
			})
			.count();
		prop_assert_eq!(model.edges.len(), kept);
		prop_assert!(model.nodes.iter().all(|n| n.category < model.categories.len()));
	}
}

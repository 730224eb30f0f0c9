//! Common test utilities for building editors, flows, and clocks.
use ahash::AHashMap;
use chrono::{TimeZone, Utc};
use nagare::prelude::*;

/// A clock pinned to a known instant, so exported timestamps are exact.
#[allow(dead_code)]
pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap())
}

/// The timestamp `fixed_clock` produces on the wire.
#[allow(dead_code)]
pub const FIXED_TIMESTAMP: &str = "2024-05-17T12:30:45.000Z";

/// Creates an editor holding `count` text nodes chained head to tail:
/// `n0 -> n1 -> ... -> n(count-1)`. The result always validates.
#[allow(dead_code)]
pub fn editor_with_chain(count: usize) -> (FlowEditor, Vec<NodeId>) {
    let mut editor = FlowEditor::new();
    let ids: Vec<NodeId> = (0..count)
        .map(|i| editor.add_node(NodeKind::Text, Position::new(i as f64 * 220.0, 100.0)))
        .collect();
    for pair in ids.windows(2) {
        editor
            .on_connect_attempt(ProposedEdge::between(pair[0].clone(), pair[1].clone()))
            .expect("chained nodes exist");
    }
    (editor, ids)
}

/// Creates an editor holding `count` text nodes with no edges.
#[allow(dead_code)]
pub fn editor_with_isolated_nodes(count: usize) -> (FlowEditor, Vec<NodeId>) {
    let mut editor = FlowEditor::new();
    let ids = (0..count)
        .map(|i| editor.add_node(NodeKind::Text, Position::new(i as f64 * 220.0, 100.0)))
        .collect();
    (editor, ids)
}

/// A single-entry content patch.
#[allow(dead_code)]
pub fn patch(key: &str, value: &str) -> AHashMap<String, String> {
    let mut map = AHashMap::new();
    map.insert(key.to_string(), value.to_string());
    map
}

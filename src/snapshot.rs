//! The flow serializer: point-in-time export artifacts and their codecs.

use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::graph::{Edge, GraphStore, Node};

/// Source of the timestamp stamped onto snapshots. Injected rather than read
/// from ambient system time so exports are deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock. What production callers pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A fixed clock for tests and reproducible exports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// An immutable, exportable copy of a flow graph.
///
/// The nodes and edges are deep copies, so later mutation of the graph the
/// snapshot was taken from never changes an already-produced snapshot. The
/// timestamp is an ISO-8601 string with millisecond precision and a `Z`
/// suffix, the shape the original editor persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub timestamp: String,
}

/// Copies the graph into a [`FlowSnapshot`] stamped with the clock's current
/// time.
///
/// Callers are responsible for sequencing: run [`validate`](crate::validation::validate)
/// first and only serialize on success. [`FlowEditor::request_save`](crate::editor::FlowEditor::request_save)
/// does exactly that.
pub fn serialize(graph: &GraphStore, clock: &impl Clock) -> FlowSnapshot {
    FlowSnapshot {
        nodes: graph.nodes().cloned().collect(),
        edges: graph.edges().to_vec(),
        timestamp: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

impl FlowSnapshot {
    /// Renders the snapshot as pretty-printed JSON in the persisted wire
    /// shape (`{nodes, edges, timestamp}`, camelCase endpoint keys).
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Parses a snapshot from its JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    /// Encodes the snapshot as a compact binary artifact.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Decodes a snapshot from a binary artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns (data, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    /// Rebuilds a fresh [`GraphStore`] from the snapshot, preserving ids,
    /// kinds, positions, content, and connections.
    ///
    /// Rejects snapshots that violate the store's invariants: duplicate node
    /// ids, duplicate edge ids, or edges whose endpoints are not in the node
    /// set.
    pub fn hydrate(&self) -> Result<GraphStore, SnapshotError> {
        if let Some(id) = self.nodes.iter().map(|n| &n.id).duplicates().next() {
            return Err(SnapshotError::DuplicateNodeId { node_id: id.clone() });
        }
        if let Some(id) = self.edges.iter().map(|e| &e.id).duplicates().next() {
            return Err(SnapshotError::DuplicateEdgeId { edge_id: id.clone() });
        }

        let mut graph = GraphStore::new();
        for node in &self.nodes {
            graph.insert_node(node.clone());
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !graph.contains_node(&endpoint.node_id) {
                    return Err(SnapshotError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.node_id.clone(),
                    });
                }
            }
            graph.insert_edge(edge.clone());
        }
        Ok(graph)
    }
}

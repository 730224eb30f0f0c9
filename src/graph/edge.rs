use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Opaque edge identifier, generated by the `GraphStore`.
pub type EdgeId = String;

/// Well-known handle identifiers. Handles are carried as plain strings so
/// future node kinds can expose additional named connection points without a
/// data model change.
pub struct Handle;

impl Handle {
    /// The outgoing connection point on a node's source side.
    pub const SOURCE: &'static str = "source";
    /// The incoming connection point on a node's target side.
    pub const TARGET: &'static str = "target";
}

/// One end of an edge: a node plus the handle on that node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub node_id: NodeId,
    pub handle: String,
}

impl Endpoint {
    pub fn new(node_id: impl Into<NodeId>, handle: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            handle: handle.into(),
        }
    }

    /// Endpoint on a node's `"source"` handle.
    pub fn source(node_id: impl Into<NodeId>) -> Self {
        Self::new(node_id, Handle::SOURCE)
    }

    /// Endpoint on a node's `"target"` handle.
    pub fn target(node_id: impl Into<NodeId>) -> Self {
        Self::new(node_id, Handle::TARGET)
    }
}

/// A connection the rendering surface asks to create, before it has an id or
/// has passed the connection rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProposedEdge {
    pub source: Endpoint,
    pub target: Endpoint,
}

impl ProposedEdge {
    pub fn new(source: Endpoint, target: Endpoint) -> Self {
        Self { source, target }
    }

    /// A proposal between the default `"source"` and `"target"` handles of
    /// two nodes, the only handle pair the current node kinds expose.
    pub fn between(source_node: impl Into<NodeId>, target_node: impl Into<NodeId>) -> Self {
        Self {
            source: Endpoint::source(source_node),
            target: Endpoint::target(target_node),
        }
    }
}

/// A directed connection stored in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: Endpoint,
    pub target: Endpoint,
}

impl Edge {
    /// Whether either end of this edge touches the given node.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source.node_id == node_id || self.target.node_id == node_id
    }

    /// Whether this edge connects exactly the proposed pair of endpoints.
    pub fn matches(&self, proposed: &ProposedEdge) -> bool {
        self.source == proposed.source && self.target == proposed.target
    }
}

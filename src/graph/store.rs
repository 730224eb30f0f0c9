use ahash::AHashMap;

use super::edge::{Edge, EdgeId, ProposedEdge};
use super::node::{Node, NodeId, NodeKind, Position};
use super::rules;
use crate::error::{ConnectionRejection, GraphError};

/// The canonical, mutable state of a flow graph: every node and edge the
/// editor currently shows.
///
/// The store is the single source of truth. Every mutation is synchronous and
/// immediately visible to subsequent reads; components that need to know
/// whether a node exists query the store at the moment of use rather than
/// holding a copy.
///
/// Nodes are kept in a map for id lookups plus an insertion-order list so the
/// rendering surface sees a stable ordering. Edges keep their connection
/// order.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: AHashMap<NodeId, Node>,
    node_order: Vec<NodeId>,
    edges: Vec<Edge>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node with a fresh unique id and returns the id.
    ///
    /// Ids are generated internally, so this cannot fail: the counter skips
    /// over any id already present (re-hydrated graphs may carry foreign ids).
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        position: Position,
        initial_content: AHashMap<String, String>,
    ) -> NodeId {
        let id = loop {
            let candidate = format!("node-{}", self.next_node_id);
            self.next_node_id += 1;
            if !self.nodes.contains_key(&candidate) {
                break candidate;
            }
        };
        self.insert_node(Node {
            id: id.clone(),
            kind,
            position,
            content: initial_content,
        });
        id
    }

    /// Removes a node and every edge touching it. A no-op if the id does not
    /// exist, so a stale delete gesture is harmless.
    pub fn remove_node(&mut self, node_id: &str) {
        if self.nodes.remove(node_id).is_none() {
            return;
        }
        self.node_order.retain(|id| id != node_id);
        self.edges.retain(|edge| !edge.touches(node_id));
    }

    /// Merges `patch` into the node's content mapping, overwriting existing
    /// keys and inserting new ones.
    pub fn update_node_content(
        &mut self,
        node_id: &str,
        patch: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), GraphError> {
        let node = self.node_mut(node_id)?;
        for (key, value) in patch {
            node.content.insert(key, value);
        }
        Ok(())
    }

    /// Replaces the node's position.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), GraphError> {
        self.node_mut(node_id)?.position = position;
        Ok(())
    }

    /// Creates an edge for the proposal if the connection rules allow it.
    ///
    /// Connecting an identical `(source endpoint, target endpoint)` pair
    /// twice is idempotent: the existing edge's id is returned and nothing is
    /// appended. The key is the full endpoint pair, so connecting the same
    /// two nodes through a different handle pair creates a distinct edge.
    pub fn connect(&mut self, proposed: ProposedEdge) -> Result<EdgeId, ConnectionRejection> {
        rules::check(self, &proposed)?;

        if let Some(existing) = self.edges.iter().find(|edge| edge.matches(&proposed)) {
            return Ok(existing.id.clone());
        }

        let id = loop {
            let candidate = format!("edge-{}", self.next_edge_id);
            self.next_edge_id += 1;
            if !self.edges.iter().any(|edge| edge.id == candidate) {
                break candidate;
            }
        };
        self.edges.push(Edge {
            id: id.clone(),
            source: proposed.source,
            target: proposed.target,
        });
        Ok(id)
    }

    /// Removes an edge by id. A no-op if absent.
    pub fn remove_edge(&mut self, edge_id: &str) {
        self.edges.retain(|edge| edge.id != edge_id);
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Edges in connection order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts a node that already carries an id. Used by re-hydration;
    /// the caller guarantees the id is not already present.
    pub(crate) fn insert_node(&mut self, node: Node) {
        self.node_order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
    }

    /// Appends an edge that already carries an id. Used by re-hydration.
    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(node_id).ok_or_else(|| GraphError::NodeNotFound {
            node_id: node_id.to_string(),
        })
    }
}

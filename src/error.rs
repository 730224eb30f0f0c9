use thiserror::Error;

/// Errors returned by `GraphStore` mutations that require an existing node.
///
/// Deletions are deliberately not here: removing an absent node or edge is a
/// no-op, so callers driven by UI gestures never have to special-case a
/// double delete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node '{node_id}' not found in the graph")]
    NodeNotFound { node_id: String },
}

/// Reasons the connection rules decline a proposed edge.
///
/// A rejection never mutates the graph; the caller simply does not create the
/// edge and editing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionRejection {
    #[error("cannot connect from '{node_id}': the source node does not exist")]
    MissingSource { node_id: String },

    #[error("cannot connect to '{node_id}': the target node does not exist")]
    MissingTarget { node_id: String },
}

/// Save-time structural violations detected by the validation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "more than one node has empty target handles: each node except one must have an incoming connection (offending nodes: {})",
        offending_node_ids.join(", ")
    )]
    MultipleRoots { offending_node_ids: Vec<String> },
}

impl ValidationError {
    /// Stable machine-readable code for the violation, independent of the
    /// human-facing `Display` message.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::MultipleRoots { .. } => "multiple-roots",
        }
    }

    /// Ids of the nodes that caused the violation, for the caller to highlight.
    pub fn offending_node_ids(&self) -> &[String] {
        match self {
            ValidationError::MultipleRoots { offending_node_ids } => offending_node_ids,
        }
    }
}

/// Errors from encoding, decoding, or re-hydrating a `FlowSnapshot`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("failed to decode snapshot: {0}")]
    Decode(String),

    #[error("snapshot contains duplicate node id '{node_id}'")]
    DuplicateNodeId { node_id: String },

    #[error("snapshot contains duplicate edge id '{edge_id}'")]
    DuplicateEdgeId { edge_id: String },

    #[error("edge '{edge_id}' references node '{node_id}', which is not in the snapshot")]
    DanglingEdge { edge_id: String, node_id: String },
}

//! Connection rules: the pure predicate deciding whether a proposed edge may
//! be created at all.
//!
//! The rules here are intentionally permissive. Fan-out from a source handle,
//! fan-in to a target handle, and even self-loops are all accepted; the
//! save-time validation engine imposes the stricter global shape (a single
//! entry point). Keeping the two layers separate means a user can wire nodes
//! in any order and only hears about structural problems when saving.

use super::edge::ProposedEdge;
use super::store::GraphStore;
use crate::error::ConnectionRejection;

/// Checks a proposed edge against the current graph, returning the rejection
/// reason if it may not be created.
pub fn check(graph: &GraphStore, proposed: &ProposedEdge) -> Result<(), ConnectionRejection> {
    if !graph.contains_node(&proposed.source.node_id) {
        return Err(ConnectionRejection::MissingSource {
            node_id: proposed.source.node_id.clone(),
        });
    }
    if !graph.contains_node(&proposed.target.node_id) {
        return Err(ConnectionRejection::MissingTarget {
            node_id: proposed.target.node_id.clone(),
        });
    }
    Ok(())
}

/// Boolean form of [`check`], for callers that only need a yes/no answer
/// (e.g. live connection previews).
pub fn can_connect(graph: &GraphStore, proposed: &ProposedEdge) -> bool {
    check(graph, proposed).is_ok()
}

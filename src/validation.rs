//! Save-time structural validation of a flow graph.
//!
//! A well-formed flow has a single, unambiguous entry point: every node
//! except one must be the target of at least one edge. This is a structural
//! check, not a reachability check. A node counts as rooted as soon as it has
//! any incoming edge, even a self-loop, and nothing verifies that it is
//! reachable from the entry point. That keeps the check O(nodes + edges) and
//! matches the product rule exactly.

use ahash::AHashSet;

use crate::error::ValidationError;
use crate::graph::GraphStore;

/// Checks that the graph is a well-formed flow.
///
/// Graphs with zero or one node trivially pass. Otherwise, every node except
/// exactly one must have at least one incoming edge; the nodes without one
/// are the root candidates, and more than one root candidate fails with
/// [`ValidationError::MultipleRoots`] listing them in insertion order.
///
/// Pure over the current store state, recomputed from scratch on every call.
/// Callable at any time, not just on save, so the shell can drive live
/// validity indicators from the same function.
pub fn validate(graph: &GraphStore) -> Result<(), ValidationError> {
    if graph.node_count() <= 1 {
        return Ok(());
    }

    let has_incoming: AHashSet<&str> = graph
        .edges()
        .iter()
        .map(|edge| edge.target.node_id.as_str())
        .collect();

    let root_candidates: Vec<String> = graph
        .nodes()
        .filter(|node| !has_incoming.contains(node.id.as_str()))
        .map(|node| node.id.clone())
        .collect();

    if root_candidates.len() > 1 {
        return Err(ValidationError::MultipleRoots {
            offending_node_ids: root_candidates,
        });
    }
    Ok(())
}

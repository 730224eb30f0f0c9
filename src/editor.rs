//! The editor facade: every UI gesture as a named command.
//!
//! The rendering surface, palette, and save button never touch the graph
//! store directly. They dispatch commands into a [`FlowEditor`], which owns
//! the store and the selection and keeps the two consistent. Each command is
//! synchronous; the caller re-renders from [`FlowEditor::graph`] afterwards.

use ahash::AHashMap;

use crate::error::{ConnectionRejection, GraphError, ValidationError};
use crate::graph::{EdgeId, GraphStore, NodeId, NodeKind, Position, ProposedEdge};
use crate::selection::{ActivePanel, SelectionController};
use crate::snapshot::{self, Clock, FlowSnapshot};
use crate::validation;

#[derive(Debug, Clone, Default)]
pub struct FlowEditor {
    graph: GraphStore,
    selection: SelectionController,
}

impl FlowEditor {
    /// An editor over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// An editor over an existing graph, e.g. one re-hydrated from a
    /// [`FlowSnapshot`](crate::snapshot::FlowSnapshot).
    pub fn with_graph(graph: GraphStore) -> Self {
        Self {
            graph,
            selection: SelectionController::new(),
        }
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn active_panel(&self) -> ActivePanel {
        self.selection.active_panel()
    }

    /// Palette command: drop a new node of the given kind onto the canvas
    /// with the kind's default content. Fire-and-forget for the palette; the
    /// id is returned for callers that want it.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> NodeId {
        self.graph.add_node(kind, position, kind.default_content())
    }

    /// Removes a node, cascading removal of its edges and healing the
    /// selection if it pointed at the removed node.
    pub fn remove_node(&mut self, node_id: &str) {
        self.graph.remove_node(node_id);
        self.selection.sync(&self.graph);
    }

    pub fn remove_edge(&mut self, edge_id: &str) {
        self.graph.remove_edge(edge_id);
    }

    /// A node was clicked on the canvas. Clicks on ids the store does not
    /// know (a race with a completed delete) are ignored, so the selection
    /// never points at a phantom node.
    pub fn on_node_click(&mut self, node_id: &str) {
        if self.graph.contains_node(node_id) {
            self.selection.click_node(node_id);
        }
    }

    /// The canvas background was clicked.
    pub fn on_pane_click(&mut self) {
        self.selection.click_background();
    }

    /// The settings view's close control was used.
    pub fn close_settings(&mut self) {
        self.selection.close();
    }

    /// A node drag finished at a new position.
    pub fn on_node_drag_end(
        &mut self,
        node_id: &str,
        position: Position,
    ) -> Result<(), GraphError> {
        self.graph.move_node(node_id, position)
    }

    /// The rendering surface proposed a new connection.
    pub fn on_connect_attempt(
        &mut self,
        proposed: ProposedEdge,
    ) -> Result<EdgeId, ConnectionRejection> {
        self.graph.connect(proposed)
    }

    /// The settings view edited the selected node's content.
    pub fn on_node_content_edit(
        &mut self,
        node_id: &str,
        patch: AHashMap<String, String>,
    ) -> Result<(), GraphError> {
        self.graph.update_node_content(node_id, patch)
    }

    /// The save button was pressed: validate, and on success produce the
    /// export snapshot. On failure the error carries the reason code and the
    /// offending node ids for the shell to present; the graph is untouched
    /// either way and editing continues.
    pub fn request_save(&self, clock: &impl Clock) -> Result<FlowSnapshot, ValidationError> {
        validation::validate(&self.graph)?;
        Ok(snapshot::serialize(&self.graph, clock))
    }
}

//! Selection state: which node, if any, the side panel is editing.

use crate::graph::{GraphStore, NodeId};

/// The side panel the editor shell should show, derived purely from the
/// selection state. There is no separate flag to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    /// No node selected: show the palette of addable node kinds.
    Palette,
    /// A node is selected: show its settings view.
    Settings,
}

/// Tracks at most one selected node.
///
/// Two states: no selection, or exactly one selected node id. Clicking a node
/// while another is selected re-selects directly, with no intermediate
/// deselect. The controller never holds node data, only the id; it
/// self-corrects via [`sync`](SelectionController::sync) when the selected
/// node disappears from the store, so the settings view can never reference a
/// stale node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<NodeId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A node was clicked.
    pub fn click_node(&mut self, node_id: impl Into<NodeId>) {
        self.selected = Some(node_id.into());
    }

    /// The canvas background was clicked.
    pub fn click_background(&mut self) {
        self.selected = None;
    }

    /// The settings view was explicitly closed.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Clears the selection if the selected node no longer exists in the
    /// store. Called after any mutation that may remove nodes.
    pub fn sync(&mut self, graph: &GraphStore) {
        if let Some(id) = &self.selected {
            if !graph.contains_node(id) {
                self.selected = None;
            }
        }
    }

    pub fn selected_node_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn active_panel(&self) -> ActivePanel {
        if self.selected.is_some() {
            ActivePanel::Settings
        } else {
            ActivePanel::Palette
        }
    }
}

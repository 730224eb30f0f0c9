//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the nagare crate so consumers
//! can bring the whole editing surface into scope with a single import.
//!
//! # Example
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! let mut editor = FlowEditor::new();
//! let greeting = editor.add_node(NodeKind::Text, Position::new(40.0, 80.0));
//! let followup = editor.add_node(NodeKind::Text, Position::new(320.0, 80.0));
//! editor
//!     .on_connect_attempt(ProposedEdge::between(greeting, followup))
//!     .expect("both nodes exist");
//!
//! let snapshot = editor.request_save(&SystemClock).expect("single root");
//! assert_eq!(snapshot.nodes.len(), 2);
//! ```

// Editing surface
pub use crate::editor::FlowEditor;
pub use crate::selection::{ActivePanel, SelectionController};

// Graph data model and store
pub use crate::graph::{
    Edge, EdgeId, Endpoint, GraphStore, Handle, Node, NodeId, NodeKind, Position, ProposedEdge,
};

// Validation and export
pub use crate::snapshot::{Clock, FixedClock, FlowSnapshot, SystemClock};
pub use crate::validation::validate;

// Error types
pub use crate::error::{ConnectionRejection, GraphError, SnapshotError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

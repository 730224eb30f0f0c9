//! # Nagare - Flow Graph State and Validation Engine
//!
//! **Nagare** is the headless core of a visual editor for linear and
//! branching conversational flows. It owns the in-memory model of message
//! nodes and directed edges, the rules governing how edges may connect, the
//! selection-driven editing state, and the save-time validation that enforces
//! a well-formed flow: when more than one node exists, exactly one node may
//! lack an incoming connection.
//!
//! Rendering, drag/zoom, palettes, and toasts live outside this crate. A
//! rendering surface feeds gestures into a [`FlowEditor`](editor::FlowEditor)
//! as named commands and re-renders from the [`GraphStore`](graph::GraphStore)
//! it owns; on save, the editor either hands back an immutable
//! [`FlowSnapshot`](snapshot::FlowSnapshot) or a structured validation
//! failure for the shell to present.
//!
//! ## Core Workflow
//!
//! 1. **Create an editor**: [`FlowEditor::new`](editor::FlowEditor::new) for
//!    an empty canvas, or [`FlowEditor::with_graph`](editor::FlowEditor::with_graph)
//!    over a re-hydrated snapshot.
//! 2. **Dispatch gestures**: `add_node`, `on_connect_attempt`,
//!    `on_node_click`, `on_node_drag_end`, `on_node_content_edit`, and so on.
//!    Every command is synchronous and immediately visible.
//! 3. **Save**: `request_save` validates the flow shape and, on success,
//!    serializes a deep-copied snapshot stamped by an injected clock.
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::prelude::*;
//! use ahash::AHashMap;
//!
//! fn main() -> Result<()> {
//!     let mut editor = FlowEditor::new();
//!
//!     // Place two message nodes and connect them.
//!     let welcome = editor.add_node(NodeKind::Text, Position::new(60.0, 120.0));
//!     let reply = editor.add_node(NodeKind::Text, Position::new(340.0, 120.0));
//!     editor.on_connect_attempt(ProposedEdge::between(welcome.clone(), reply.clone()))?;
//!
//!     // Edit the welcome message through the settings view.
//!     editor.on_node_click(&welcome);
//!     assert_eq!(editor.active_panel(), ActivePanel::Settings);
//!     let mut patch = AHashMap::new();
//!     patch.insert("text".to_string(), "Hello there!".to_string());
//!     editor.on_node_content_edit(&welcome, patch)?;
//!
//!     // Save: the flow has a single entry point, so this succeeds.
//!     let snapshot = editor.request_save(&SystemClock)?;
//!     println!("exported {}", snapshot.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod selection;
pub mod snapshot;
pub mod validation;

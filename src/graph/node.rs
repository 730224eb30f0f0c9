use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Opaque node identifier, generated by the `GraphStore` and never reused.
pub type NodeId = String;

/// A point on the editor canvas. Owned exclusively by its node and changed
/// only through `GraphStore::move_node`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed set of node kinds. Future kinds are additive; logic must never
/// depend on anything beyond this flat tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// A text message node.
    Text,
}

impl NodeKind {
    /// The content a freshly created node of this kind starts with.
    pub fn default_content(self) -> AHashMap<String, String> {
        match self {
            NodeKind::Text => {
                let mut content = AHashMap::new();
                content.insert("text".to_string(), "New Message".to_string());
                content
            }
        }
    }
}

/// A placed unit in the flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub position: Position,
    /// Generic key-value payload, e.g. `{"text": "..."}` for `NodeKind::Text`.
    pub content: AHashMap<String, String>,
}

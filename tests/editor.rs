//! End-to-end tests driving the editor through its gesture commands.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_build_edit_and_save_a_flow() {
    let mut editor = FlowEditor::new();

    // Palette: place two message nodes.
    let welcome = editor.add_node(NodeKind::Text, Position::new(60.0, 120.0));
    let reply = editor.add_node(NodeKind::Text, Position::new(340.0, 120.0));

    // Canvas: connect them and reposition the reply.
    editor
        .on_connect_attempt(ProposedEdge::between(welcome.clone(), reply.clone()))
        .unwrap();
    editor.on_node_drag_end(&reply, Position::new(400.0, 150.0)).unwrap();

    // Settings view: edit the welcome text.
    editor.on_node_click(&welcome);
    editor.on_node_content_edit(&welcome, patch("text", "Hello there!")).unwrap();

    let snapshot = editor.request_save(&fixed_clock()).unwrap();
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.edges.len(), 1);

    let saved_welcome = snapshot.nodes.iter().find(|n| n.id == welcome).unwrap();
    assert_eq!(saved_welcome.content.get("text").map(String::as_str), Some("Hello there!"));
    let saved_reply = snapshot.nodes.iter().find(|n| n.id == reply).unwrap();
    assert_eq!(saved_reply.position, Position::new(400.0, 150.0));
}

#[test]
fn test_save_is_blocked_on_multiple_roots() {
    let (editor, ids) = editor_with_isolated_nodes(3);

    let err = editor.request_save(&fixed_clock()).unwrap_err();
    assert_eq!(err.reason(), "multiple-roots");
    assert_eq!(err.offending_node_ids(), &ids[..]);

    // The graph is untouched and editing continues after the failed save.
    assert_eq!(editor.graph().node_count(), 3);
}

#[test]
fn test_save_succeeds_after_user_correction() {
    let (mut editor, ids) = editor_with_isolated_nodes(3);
    assert!(editor.request_save(&fixed_clock()).is_err());

    editor
        .on_connect_attempt(ProposedEdge::between(ids[0].clone(), ids[1].clone()))
        .unwrap();
    editor
        .on_connect_attempt(ProposedEdge::between(ids[1].clone(), ids[2].clone()))
        .unwrap();

    assert!(editor.request_save(&fixed_clock()).is_ok());
}

#[test]
fn test_rejected_connect_leaves_graph_unchanged() {
    let (mut editor, ids) = editor_with_chain(2);

    let result = editor.on_connect_attempt(ProposedEdge::between(ids[1].clone(), "node-404"));
    assert!(matches!(result, Err(ConnectionRejection::MissingTarget { .. })));

    assert_eq!(editor.graph().edge_count(), 1);
    assert!(editor.request_save(&fixed_clock()).is_ok());
}

#[test]
fn test_editor_over_rehydrated_graph() {
    let (source_editor, ids) = editor_with_chain(2);
    let exported = source_editor.request_save(&fixed_clock()).unwrap();

    let mut editor = FlowEditor::with_graph(exported.hydrate().unwrap());
    editor.on_node_click(&ids[0]);
    assert_eq!(editor.active_panel(), ActivePanel::Settings);

    // Extend the restored flow and save again.
    let tail = editor.add_node(NodeKind::Text, Position::new(620.0, 120.0));
    editor
        .on_connect_attempt(ProposedEdge::between(ids[1].clone(), tail))
        .unwrap();
    let snapshot = editor.request_save(&fixed_clock()).unwrap();
    assert_eq!(snapshot.nodes.len(), 3);
    assert_eq!(snapshot.edges.len(), 2);
}

#[test]
fn test_content_edit_on_removed_node_reports_not_found() {
    let (mut editor, ids) = editor_with_chain(2);
    editor.remove_node(&ids[0]);

    let result = editor.on_node_content_edit(&ids[0], patch("text", "ghost"));
    match result {
        Err(GraphError::NodeNotFound { node_id }) => assert_eq!(node_id, ids[0]),
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
}

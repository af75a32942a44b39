//! End-to-end tests: document loading, round-trips and a full
//! edit-then-present walkthrough.
mod common;

use common::*;
use pretty_assertions::assert_eq;
use tenkai::prelude::*;

#[test]
fn test_load_rejects_missing_title() {
    let json = r#"{ "meta": { "title": "   " }, "nodes": [], "edges": [] }"#;
    match FlowConfig::from_json(json) {
        Err(ConfigError::MissingTitle) => {}
        other => panic!("expected MissingTitle, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_malformed_json() {
    let json = r#"{ "meta": { "title": "Broken" }, "nodes": "not-an-array", "edges": [] }"#;
    match FlowConfig::from_json(json) {
        Err(ConfigError::JsonParse(_)) => {}
        other => panic!("expected JsonParse, got {:?}", other),
    }
}

#[test]
fn test_minimal_document_gets_editor_defaults() {
    let json = r#"{
        "meta": { "title": "Minimal" },
        "nodes": [
            { "id": "a", "type": "processStep", "position": { "x": 0, "y": 0 },
              "revealAtStep": 1, "data": { "title": "A" } },
            { "id": "b", "type": "hint", "position": { "x": 0, "y": 100 },
              "revealAtStep": 2, "data": { "content": "look here" } }
        ],
        "edges": [ { "id": "e1", "source": "a", "target": "b" } ]
    }"#;

    let graph = FlowGraph::from_config(FlowConfig::from_json(json).unwrap());
    let edge = &graph.edges[0];
    assert_eq!(edge.source_handle, HandlePosition::Bottom);
    assert_eq!(edge.target_handle, HandlePosition::Top);
    assert_eq!(edge.style, EdgeStyle::default());
    assert_eq!(edge.reveal_at_step, None);
}

#[test]
fn test_config_round_trip_through_session() {
    let mut session = EditorSession::new(chain_config());
    let exported = session.config();

    session.load_config(exported.clone());
    assert_eq!(session.config(), exported);
}

#[test]
fn test_json_round_trip_is_stable() {
    let session = EditorSession::new(chain_config());
    let exported = session.config();

    let json = exported.to_json().unwrap();
    let reloaded = FlowConfig::from_json(&json).unwrap();
    assert_eq!(reloaded, exported);
}

#[test]
fn test_snapshot_round_trip() {
    let session = EditorSession::new(gap_config());
    let graph = session.graph().clone();

    let snapshot = FlowSnapshot::capture(graph.clone());
    let bytes = snapshot.to_bytes().unwrap();
    let restored = FlowSnapshot::from_bytes(&bytes).unwrap().restore();

    assert_eq!(restored, graph);
    // The restored graph exports the same document.
    assert_eq!(restored.to_config(), session.config());
}

#[test]
fn test_document_preserves_node_payloads() {
    let json = r#"{
        "meta": { "title": "Payloads", "subtitle": "all three variants" },
        "nodes": [
            { "id": "p", "type": "processStep", "position": { "x": 0, "y": 0 },
              "revealAtStep": 1, "data": { "title": "Prep", "description": "mise en place" } },
            { "id": "h", "type": "hint", "position": { "x": 200, "y": 0 },
              "revealAtStep": 1, "data": { "content": "let it rest", "isCode": true } },
            { "id": "i", "type": "image", "position": { "x": 400, "y": 0 },
              "revealAtStep": 2, "data": { "src": "plating.png", "caption": "Plating", "width": 240 } }
        ],
        "edges": [],
        "settings": { "autoFocus": true, "animationDuration": 400 }
    }"#;

    let config = FlowConfig::from_json(json).unwrap();
    let mut session = EditorSession::new(config);
    let exported = session.config();

    match &exported.nodes[1].payload {
        NodePayload::Hint { content, is_code } => {
            assert_eq!(content, "let it rest");
            assert_eq!(*is_code, Some(true));
        }
        other => panic!("unexpected payload {:?}", other),
    }
    match &exported.nodes[2].payload {
        NodePayload::Image { width, height, .. } => {
            assert_eq!(*width, Some(240.0));
            assert_eq!(*height, None);
        }
        other => panic!("unexpected payload {:?}", other),
    }
    assert_eq!(exported.settings.unwrap().animation_duration, Some(400));

    // And all of it survives a second pass.
    session.load_config(exported.clone());
    assert_eq!(session.config(), exported);
}

#[test]
fn test_edit_then_present_walkthrough() {
    let mut session = EditorSession::new(empty_config());

    // Build a three-stage flow with a hint on the middle stage.
    let ingest = session
        .add_node(NodeTemplate::ProcessStep, Position::new(0.0, 0.0))
        .unwrap();
    let transform = session
        .add_node(NodeTemplate::ProcessStep, Position::new(0.0, 140.0))
        .unwrap();
    let publish = session
        .add_node(NodeTemplate::ProcessStep, Position::new(0.0, 280.0))
        .unwrap();
    session.connect(&ingest, &transform, None, None).unwrap();
    session.connect(&transform, &publish, None, None).unwrap();

    let hint = session
        .add_node(NodeTemplate::Hint, Position::new(260.0, 140.0))
        .unwrap();
    session.update_node_step(&hint, 2);
    session
        .connect(
            &transform,
            &hint,
            Some(HandlePosition::Right),
            Some(HandlePosition::Left),
        )
        .unwrap();

    assert_eq!(session.total_steps(), 3);

    // Present and walk every step.
    session.enter_presentation();
    assert_eq!(session.view().nodes.len(), 1);

    session.next();
    let view = session.view();
    assert_eq!(view.nodes.len(), 3); // transform + hint reveal together
    assert_eq!(view.edges.len(), 2);

    session.next();
    let view = session.view();
    assert_eq!(view.nodes.len(), 4);
    assert_eq!(view.edges.len(), 3);
    assert!(session.is_last_step());

    // Back to editing; prune the hint and present again.
    session.exit_presentation();
    assert!(session.delete_node(&hint));
    assert_eq!(session.graph().edges.len(), 2);

    session.enter_presentation();
    session.go_to_end();
    let view = session.view();
    assert_eq!(view.nodes.len(), 3);
    assert_eq!(view.edges.len(), 2);
}

#[test]
fn test_normalize_through_session_after_deletions() {
    let mut session = EditorSession::new(empty_config());
    for step in [1_u32, 3, 7] {
        let id = session
            .add_node(NodeTemplate::ProcessStep, Position::default())
            .unwrap();
        session.update_node_step(&id, step);
    }

    let outcome = session.normalize_steps().unwrap();
    assert_eq!(outcome.old_max, 7);
    assert_eq!(outcome.new_max, 3);
    assert_eq!(session.total_steps(), 3);

    let steps: Vec<u32> = session
        .graph()
        .nodes
        .iter()
        .map(|n| n.reveal_at_step)
        .collect();
    assert_eq!(steps, vec![1, 2, 3]);
}

//! Tests for step assignment, normalization and batch reassignment.
mod common;

use common::*;
use tenkai::prelude::*;

#[test]
fn test_auto_increment_from_empty_graph() {
    let mut assigner = StepAssigner::new(AssignMode::AutoIncrement);
    let mut nodes: Vec<Node> = vec![];

    let first = assigner.assign(&nodes);
    assert_eq!(first, 1);
    nodes.push(process_node("a", first));

    let second = assigner.assign(&nodes);
    assert_eq!(second, 2);
}

#[test]
fn test_auto_increment_skips_past_sparse_max() {
    let mut assigner = StepAssigner::new(AssignMode::AutoIncrement);
    assert_eq!(assigner.assign(&sparse_nodes()), 8);
}

#[test]
fn test_always_one_ignores_graph_state() {
    let mut assigner = StepAssigner::new(AssignMode::AlwaysOne);
    assert_eq!(assigner.assign(&[]), 1);
    assert_eq!(assigner.assign(&sparse_nodes()), 1);
}

#[test]
fn test_same_as_last_replays_previous_assignment() {
    let mut assigner = StepAssigner::new(AssignMode::AutoIncrement);
    let nodes = sparse_nodes(); // max step 7
    assert_eq!(assigner.assign(&nodes), 8);

    assigner.set_mode(AssignMode::SameAsLast);
    assert_eq!(assigner.assign(&nodes), 8);
    assert_eq!(assigner.assign(&nodes), 8);
}

#[test]
fn test_same_as_last_ignores_manual_step_edits() {
    let mut assigner = StepAssigner::new(AssignMode::SameAsLast);
    let mut nodes = vec![process_node("a", 4)];

    // First assignment falls back to auto-increment.
    let step = assigner.assign(&nodes);
    assert_eq!(step, 5);
    nodes.push(process_node("b", step));

    // The user manually renumbers the node; the policy keeps replaying its
    // own last assignment.
    nodes[1].reveal_at_step = 2;
    assert_eq!(assigner.assign(&nodes), 5);
}

#[test]
fn test_normalize_compacts_sparse_steps() {
    let mut nodes = sparse_nodes();
    let outcome = normalize_steps(&mut nodes);

    assert_eq!(outcome.old_max, 7);
    assert_eq!(outcome.new_max, 3);
    assert!(!outcome.is_noop());
    let steps: Vec<u32> = nodes.iter().map(|n| n.reveal_at_step).collect();
    assert_eq!(steps, vec![1, 2, 3]);
}

#[test]
fn test_normalize_preserves_shared_steps() {
    let mut nodes = vec![
        process_node("a", 2),
        process_node("b", 2),
        process_node("c", 9),
    ];
    let outcome = normalize_steps(&mut nodes);

    assert_eq!(outcome.old_max, 9);
    assert_eq!(outcome.new_max, 2);
    let steps: Vec<u32> = nodes.iter().map(|n| n.reveal_at_step).collect();
    assert_eq!(steps, vec![1, 1, 2]);
}

#[test]
fn test_normalize_is_idempotent() {
    let mut once = sparse_nodes();
    normalize_steps(&mut once);

    let mut twice = once.clone();
    let outcome = normalize_steps(&mut twice);

    assert!(outcome.is_noop());
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_dense_steps_is_noop() {
    let mut nodes = vec![process_node("a", 1), process_node("b", 2)];
    let outcome = normalize_steps(&mut nodes);
    assert!(outcome.is_noop());
    assert_eq!(outcome.old_max, 2);
    assert_eq!(outcome.new_max, 2);
}

#[test]
fn test_normalize_empty_is_noop() {
    let mut nodes: Vec<Node> = vec![];
    let outcome = normalize_steps(&mut nodes);
    assert!(outcome.is_noop());
}

#[test]
fn test_batch_set_step_overwrites_listed_nodes_only() {
    let mut nodes = sparse_nodes();
    set_step_for_nodes(&mut nodes, &["a", "c", "ghost"], 4);

    let steps: Vec<u32> = nodes.iter().map(|n| n.reveal_at_step).collect();
    assert_eq!(steps, vec![4, 3, 4]);
}

#[test]
fn test_batch_set_step_floors_at_one() {
    let mut nodes = vec![process_node("a", 5)];
    set_step_for_nodes(&mut nodes, &["a"], 0);
    assert_eq!(nodes[0].reveal_at_step, 1);
}

#[test]
fn test_assign_mode_wire_names() {
    assert_eq!(
        serde_json::to_string(&AssignMode::AutoIncrement).unwrap(),
        "\"auto-increment\""
    );
    assert_eq!(
        serde_json::to_string(&AssignMode::SameAsLast).unwrap(),
        "\"same-as-last\""
    );
    assert_eq!(
        serde_json::to_string(&AssignMode::AlwaysOne).unwrap(),
        "\"always-1\""
    );

    let parsed: AssignMode = serde_json::from_str("\"always-1\"").unwrap();
    assert_eq!(parsed, AssignMode::AlwaysOne);
}

#[test]
fn test_assign_mode_default_is_auto_increment() {
    assert_eq!(AssignMode::default(), AssignMode::AutoIncrement);
}

//! Common test utilities for building flow documents and graphs.
use tenkai::prelude::*;

/// Creates a model node with a `ProcessStep` payload.
#[allow(dead_code)]
pub fn process_node(id: &str, step: u32) -> Node {
    Node {
        id: id.to_string(),
        position: Position::default(),
        reveal_at_step: step,
        kind: NodeKind::ProcessStep {
            title: format!("Step {}", id),
            description: None,
        },
    }
}

/// Creates a model edge with default handles and styling.
#[allow(dead_code)]
pub fn plain_edge(source: &str, target: &str) -> Edge {
    Edge {
        id: format!("e-{}-{}", source, target),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: HandlePosition::DEFAULT_SOURCE,
        target_handle: HandlePosition::DEFAULT_TARGET,
        reveal_at_step: None,
        style: EdgeStyle::default(),
    }
}

/// Creates a document node with a `ProcessStep` payload.
#[allow(dead_code)]
pub fn process_node_config(id: &str, step: u32) -> FlowNodeConfig {
    FlowNodeConfig {
        id: id.to_string(),
        position: Position::default(),
        reveal_at_step: step,
        payload: NodePayload::ProcessStep {
            title: format!("Step {}", id),
            description: None,
        },
    }
}

/// Creates a document edge with every optional field left out.
#[allow(dead_code)]
pub fn plain_edge_config(source: &str, target: &str) -> FlowEdgeConfig {
    FlowEdgeConfig {
        id: format!("e-{}-{}", source, target),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        target_handle: None,
        reveal_at_step: None,
        marker_start: None,
        marker_end: None,
        line_style: None,
        animation: None,
        stroke_color: None,
        stroke_width: None,
    }
}

/// A three-node chain revealed over steps 1, 2, 3 and connected
/// `a -> b -> c`.
#[allow(dead_code)]
pub fn chain_config() -> FlowConfig {
    FlowConfig {
        meta: FlowMeta {
            title: "Chain".to_string(),
            subtitle: None,
            version: None,
        },
        nodes: vec![
            process_node_config("a", 1),
            process_node_config("b", 2),
            process_node_config("c", 3),
        ],
        edges: vec![plain_edge_config("a", "b"), plain_edge_config("b", "c")],
        settings: None,
    }
}

/// Node A (step 1) connected to node B (step 3), with no intermediate node.
#[allow(dead_code)]
pub fn gap_config() -> FlowConfig {
    FlowConfig {
        meta: FlowMeta {
            title: "Gap".to_string(),
            subtitle: None,
            version: None,
        },
        nodes: vec![process_node_config("a", 1), process_node_config("b", 3)],
        edges: vec![plain_edge_config("a", "b")],
        settings: None,
    }
}

/// An empty flow for exercising editing from scratch.
#[allow(dead_code)]
pub fn empty_config() -> FlowConfig {
    FlowConfig {
        meta: FlowMeta {
            title: "Scratch".to_string(),
            subtitle: None,
            version: None,
        },
        nodes: vec![],
        edges: vec![],
        settings: None,
    }
}

/// Model nodes with the sparse reveal steps {1, 3, 7}.
#[allow(dead_code)]
pub fn sparse_nodes() -> Vec<Node> {
    vec![
        process_node("a", 1),
        process_node("b", 3),
        process_node("c", 7),
    ]
}

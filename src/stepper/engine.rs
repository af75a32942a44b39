use ahash::AHashSet;

use super::StepView;
use crate::flow::{Edge, Node};

/// Total step count of a flow: the highest node reveal step, floor 1.
///
/// An empty graph, or one whose only node reveals at step 1, has exactly
/// one step.
pub fn total_steps(nodes: &[Node]) -> u32 {
    nodes
        .iter()
        .map(|n| n.reveal_at_step)
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Node ids whose reveal step equals `step` exactly, in node order.
///
/// The renderer uses this to apply entrance highlighting and to decide
/// whether a step transition warrants a reframe.
pub fn newly_revealed_at<'a>(nodes: &'a [Node], step: u32) -> Vec<&'a str> {
    nodes
        .iter()
        .filter(|n| n.reveal_at_step == step)
        .map(|n| n.id.as_str())
        .collect()
}

/// Computes the visible subgraph at `step`.
///
/// A node is visible iff its reveal step is <= `step`, so the visible node
/// set only grows as the step advances. An edge is visible iff both its
/// endpoints are visible and any explicit edge reveal override is also
/// <= `step`; no edge is ever returned with a hidden endpoint.
///
/// The visible-id set is rebuilt from the full node slice on every call,
/// never from a previously filtered view.
pub fn visible_at<'a>(nodes: &'a [Node], edges: &'a [Edge], step: u32) -> StepView<'a> {
    let visible_ids: AHashSet<&str> = nodes
        .iter()
        .filter(|n| n.reveal_at_step <= step)
        .map(|n| n.id.as_str())
        .collect();

    let visible_nodes: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.reveal_at_step <= step)
        .collect();

    let visible_edges: Vec<&Edge> = edges
        .iter()
        .filter(|e| {
            if !visible_ids.contains(e.source.as_str()) || !visible_ids.contains(e.target.as_str())
            {
                return false;
            }
            e.reveal_at_step.map_or(true, |reveal| reveal <= step)
        })
        .collect();

    StepView {
        nodes: visible_nodes,
        edges: visible_edges,
        newly_revealed: newly_revealed_at(nodes, step),
    }
}

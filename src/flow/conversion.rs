use super::definition::{Edge, EdgeStyle, FlowGraph, HandlePosition, Node, NodeKind};
use crate::document::{FlowConfig, FlowEdgeConfig, FlowNodeConfig, NodePayload};
use crate::error::ConversionError;

/// A trait for custom host formats that can be converted into a [`FlowGraph`].
///
/// This is the extension point for hosts whose serialized shape differs from
/// the canonical [`FlowConfig`] document, such as an editor runtime that
/// keeps the reveal step inside each node's data bag. Implement it on your
/// own structs to feed the session and stepper from that format.
///
/// # Example
///
/// ```rust,no_run
/// use tenkai::prelude::*;
/// use tenkai::error::ConversionError;
///
/// struct LegacyNode { id: String, step: u32, label: String }
/// struct LegacyFlow { title: String, nodes: Vec<LegacyNode> }
///
/// impl IntoFlowGraph for LegacyFlow {
///     fn into_flow_graph(self) -> std::result::Result<FlowGraph, ConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| Node {
///                 id: n.id,
///                 position: Position::default(),
///                 reveal_at_step: n.step.max(1),
///                 kind: NodeKind::ProcessStep { title: n.label, description: None },
///             })
///             .collect();
///
///         Ok(FlowGraph {
///             meta: FlowMeta { title: self.title, subtitle: None, version: None },
///             nodes,
///             edges: vec![],
///             settings: FlowSettings::default(),
///         })
///     }
/// }
/// ```
pub trait IntoFlowGraph {
    /// Consumes the object and converts it into a canonical flow graph.
    fn into_flow_graph(self) -> Result<FlowGraph, ConversionError>;
}

impl IntoFlowGraph for FlowConfig {
    fn into_flow_graph(self) -> Result<FlowGraph, ConversionError> {
        Ok(FlowGraph::from_config(self))
    }
}

impl FlowGraph {
    /// Builds the in-memory graph from a document, resolving omitted edge
    /// handles and style fields to the editor defaults.
    pub fn from_config(config: FlowConfig) -> Self {
        let nodes = config.nodes.into_iter().map(node_from_config).collect();
        let edges = config.edges.into_iter().map(edge_from_config).collect();
        Self {
            meta: config.meta,
            nodes,
            edges,
            settings: config.settings.unwrap_or_default(),
        }
    }

    /// Serializes the graph back into the document shape.
    ///
    /// Resolved defaults are written out explicitly, so exporting, reloading
    /// and exporting again yields an identical document.
    pub fn to_config(&self) -> FlowConfig {
        FlowConfig {
            meta: self.meta.clone(),
            nodes: self.nodes.iter().map(node_to_config).collect(),
            edges: self.edges.iter().map(edge_to_config).collect(),
            settings: Some(self.settings),
        }
    }
}

fn node_from_config(node: FlowNodeConfig) -> Node {
    let kind = match node.payload {
        NodePayload::ProcessStep { title, description } => {
            NodeKind::ProcessStep { title, description }
        }
        NodePayload::Hint { content, is_code } => NodeKind::Hint { content, is_code },
        NodePayload::Image {
            src,
            alt,
            caption,
            width,
            height,
        } => NodeKind::Image {
            src,
            alt,
            caption,
            width,
            height,
        },
    };
    Node {
        id: node.id,
        position: node.position,
        reveal_at_step: node.reveal_at_step.max(1),
        kind,
    }
}

fn node_to_config(node: &Node) -> FlowNodeConfig {
    let payload = match &node.kind {
        NodeKind::ProcessStep { title, description } => NodePayload::ProcessStep {
            title: title.clone(),
            description: description.clone(),
        },
        NodeKind::Hint { content, is_code } => NodePayload::Hint {
            content: content.clone(),
            is_code: *is_code,
        },
        NodeKind::Image {
            src,
            alt,
            caption,
            width,
            height,
        } => NodePayload::Image {
            src: src.clone(),
            alt: alt.clone(),
            caption: caption.clone(),
            width: *width,
            height: *height,
        },
    };
    FlowNodeConfig {
        id: node.id.clone(),
        position: node.position,
        reveal_at_step: node.reveal_at_step,
        payload,
    }
}

fn edge_from_config(edge: FlowEdgeConfig) -> Edge {
    let defaults = EdgeStyle::default();
    Edge {
        id: edge.id,
        source: edge.source,
        target: edge.target,
        source_handle: edge.source_handle.unwrap_or(HandlePosition::DEFAULT_SOURCE),
        target_handle: edge.target_handle.unwrap_or(HandlePosition::DEFAULT_TARGET),
        reveal_at_step: edge.reveal_at_step,
        style: EdgeStyle {
            line_style: edge.line_style.unwrap_or(defaults.line_style),
            marker_start: edge.marker_start.unwrap_or(defaults.marker_start),
            marker_end: edge.marker_end.unwrap_or(defaults.marker_end),
            animation: edge.animation.unwrap_or(defaults.animation),
            stroke_color: edge.stroke_color.unwrap_or(defaults.stroke_color),
            stroke_width: edge.stroke_width.unwrap_or(defaults.stroke_width),
        },
    }
}

fn edge_to_config(edge: &Edge) -> FlowEdgeConfig {
    FlowEdgeConfig {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        source_handle: Some(edge.source_handle),
        target_handle: Some(edge.target_handle),
        reveal_at_step: edge.reveal_at_step,
        marker_start: Some(edge.style.marker_start),
        marker_end: Some(edge.style.marker_end),
        line_style: Some(edge.style.line_style),
        animation: Some(edge.style.animation),
        stroke_color: Some(edge.style.stroke_color.clone()),
        stroke_width: Some(edge.style.stroke_width),
    }
}

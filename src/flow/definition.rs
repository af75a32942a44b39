use serde::{Deserialize, Serialize};

/// Presentation metadata shown by the host editor's header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowMeta {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Viewer-facing playback settings carried alongside the graph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSettings {
    #[serde(default)]
    pub auto_focus: Option<bool>,
    #[serde(default)]
    pub animation_duration: Option<u32>,
}

/// A 2D canvas position. The coordinate space belongs to the renderer.
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

/// Which side of a node an edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl HandlePosition {
    /// Default attachment for the source side of a new edge.
    pub const DEFAULT_SOURCE: Self = Self::Bottom;
    /// Default attachment for the target side of a new edge.
    pub const DEFAULT_TARGET: Self = Self::Top;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    #[default]
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    None,
    Arrow,
    ArrowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeAnimation {
    None,
    Flow,
}

/// Resolved visual styling for an edge. Fields left out of the document
/// resolve to these defaults on load.
///
/// Serialization here is the plain derived shape used by binary snapshots;
/// the camelCase document shape lives in [`crate::document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub line_style: LineStyle,
    pub marker_start: MarkerKind,
    pub marker_end: MarkerKind,
    pub animation: EdgeAnimation,
    pub stroke_color: String,
    pub stroke_width: u32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            line_style: LineStyle::Dashed,
            marker_start: MarkerKind::None,
            marker_end: MarkerKind::ArrowClosed,
            animation: EdgeAnimation::Flow,
            stroke_color: "#94a3b8".to_string(),
            stroke_width: 2,
        }
    }
}

/// The variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    ProcessStep {
        title: String,
        description: Option<String>,
    },
    Hint {
        content: String,
        is_code: Option<bool>,
    },
    Image {
        src: String,
        alt: Option<String>,
        caption: Option<String>,
        width: Option<f64>,
        height: Option<f64>,
    },
}

impl NodeKind {
    /// The document-level `type` tag for this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::ProcessStep { .. } => "processStep",
            NodeKind::Hint { .. } => "hint",
            NodeKind::Image { .. } => "image",
        }
    }
}

/// A single node in the flow.
///
/// `reveal_at_step` is always >= 1; a node is never visible before its own
/// reveal step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Position,
    pub reveal_at_step: u32,
    pub kind: NodeKind,
}

/// A directed connection between two nodes.
///
/// `reveal_at_step` is an optional override; absent, the edge inherits
/// visibility purely from its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: HandlePosition,
    pub target_handle: HandlePosition,
    pub reveal_at_step: Option<u32>,
    pub style: EdgeStyle,
}

/// The complete in-memory flow: metadata, nodes, edges and settings.
///
/// This is plain data. Mutation policy (gating, id assignment, cascade
/// deletion) lives in [`EditorSession`](crate::session::EditorSession);
/// derived values (visible subgraph, total steps) live in
/// [`stepper`](crate::stepper) and are recomputed from the current node and
/// edge lists on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub meta: FlowMeta,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub settings: FlowSettings,
}

impl FlowGraph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Whether an edge with the given (source, target) ordered pair exists.
    pub fn has_edge_between(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }
}

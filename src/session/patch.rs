use crate::flow::{EdgeAnimation, HandlePosition, LineStyle, MarkerKind};

/// Which palette entry a new node comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTemplate {
    ProcessStep,
    Hint,
    Image,
}

impl NodeTemplate {
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeTemplate::ProcessStep => "processStep",
            NodeTemplate::Hint => "hint",
            NodeTemplate::Image => "image",
        }
    }
}

/// Partial update for a node's variant payload.
///
/// `Some` fields are merged into the node's data; the variant must match
/// the node's own, otherwise the update is a no-op. The reveal step has its
/// own entry point, [`EditorSession::update_node_step`](crate::session::EditorSession::update_node_step).
#[derive(Debug, Clone)]
pub enum NodePatch {
    ProcessStep {
        title: Option<String>,
        description: Option<String>,
    },
    Hint {
        content: Option<String>,
        is_code: Option<bool>,
    },
    Image {
        src: Option<String>,
        alt: Option<String>,
        caption: Option<String>,
        width: Option<f64>,
        height: Option<f64>,
    },
}

/// Partial update for an edge's handles, style and reveal override.
#[derive(Debug, Clone, Default)]
pub struct EdgePatch {
    pub source_handle: Option<HandlePosition>,
    pub target_handle: Option<HandlePosition>,
    pub reveal_at_step: Option<u32>,
    pub line_style: Option<LineStyle>,
    pub marker_start: Option<MarkerKind>,
    pub marker_end: Option<MarkerKind>,
    pub animation: Option<EdgeAnimation>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<u32>,
}

/// Partial update for the flow metadata.
#[derive(Debug, Clone, Default)]
pub struct MetaPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub version: Option<String>,
}

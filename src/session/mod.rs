//! The editor/presentation controller.
//!
//! [`EditorSession`] owns the graph, the mode, the step cursor, the step
//! assigner and the clipboard. All graph mutation goes through it so that
//! the gating rule holds: while presenting, every editing entry point is a
//! silent no-op. Derived values (visible subgraph, total steps) are
//! recomputed from the live graph on every query.

mod clipboard;
mod patch;

pub use clipboard::Clipboard;
pub use patch::{EdgePatch, MetaPatch, NodePatch, NodeTemplate};

use crate::document::FlowConfig;
use crate::flow::{
    Edge, EdgeStyle, FlowGraph, FlowSettings, HandlePosition, Node, NodeKind, Position,
};
use crate::policy::{self, AssignMode, NormalizeOutcome, StepAssigner};
use crate::stepper::{self, StepCursor, StepView};

const REFRAME_PADDING: f32 = 0.15;
const PRESENTATION_MAX_ZOOM: f32 = 1.0;
const DEFAULT_ANIMATION_MS: u32 = 600;

/// Whether the session is being edited or played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editor,
    Presentation,
}

/// Which nodes a reframe should bring into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReframeScope {
    /// Frame every node, visible or not. Used on entering presentation so
    /// the viewport stays stable across the whole run instead of
    /// re-centering on every step.
    AllNodes,
    /// Frame only the listed node ids.
    Nodes(Vec<String>),
}

/// A viewport-refit request for the rendering collaborator.
///
/// The session only queues these; actual timing and debouncing belong to
/// the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReframeRequest {
    pub scope: ReframeScope,
    pub padding: f32,
    pub duration_ms: u32,
    pub max_zoom: Option<f32>,
}

/// Owns a flow and orchestrates editing and playback over it.
pub struct EditorSession {
    graph: FlowGraph,
    mode: Mode,
    cursor: StepCursor,
    assigner: StepAssigner,
    clipboard: Clipboard,
    pending_reframes: Vec<ReframeRequest>,
    id_seq: u64,
}

impl EditorSession {
    /// Creates a session in editor mode from a loaded document.
    pub fn new(config: FlowConfig) -> Self {
        Self {
            graph: FlowGraph::from_config(config),
            mode: Mode::Editor,
            cursor: StepCursor::new(),
            assigner: StepAssigner::default(),
            clipboard: Clipboard::default(),
            pending_reframes: Vec::new(),
            id_seq: 0,
        }
    }

    // --- Mode ---

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editor_mode(&self) -> bool {
        self.mode == Mode::Editor
    }

    /// Switches to presentation mode, resetting the cursor to step 1 and
    /// queueing a reframe over all nodes.
    pub fn enter_presentation(&mut self) {
        self.mode = Mode::Presentation;
        self.cursor.reset();
        self.push_reframe(ReframeScope::AllNodes, Some(PRESENTATION_MAX_ZOOM));
    }

    /// Switches back to editor mode. The cursor is left as-is; it is
    /// re-initialized on the next [`enter_presentation`](Self::enter_presentation).
    pub fn exit_presentation(&mut self) {
        self.mode = Mode::Editor;
    }

    // --- Queries ---

    pub fn current_step(&self) -> u32 {
        self.cursor.current()
    }

    pub fn total_steps(&self) -> u32 {
        stepper::total_steps(&self.graph.nodes)
    }

    /// Highest reveal step in the graph, floor 1. Drives the editor's step
    /// badges and step picker.
    pub fn max_step(&self) -> u32 {
        self.total_steps()
    }

    pub fn is_first_step(&self) -> bool {
        self.cursor.is_first()
    }

    pub fn is_last_step(&self) -> bool {
        self.cursor.is_last(self.total_steps())
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// What the renderer should draw right now: the visible subgraph at the
    /// current step while presenting, the full unfiltered graph while
    /// editing.
    pub fn view(&self) -> StepView<'_> {
        match self.mode {
            Mode::Presentation => stepper::visible_at(
                &self.graph.nodes,
                &self.graph.edges,
                self.cursor.current(),
            ),
            Mode::Editor => StepView {
                nodes: self.graph.nodes.iter().collect(),
                edges: self.graph.edges.iter().collect(),
                newly_revealed: Vec::new(),
            },
        }
    }

    /// Takes every reframe request queued since the last drain.
    pub fn drain_reframe_requests(&mut self) -> Vec<ReframeRequest> {
        std::mem::take(&mut self.pending_reframes)
    }

    // --- Navigation (presentation mode only) ---

    pub fn next(&mut self) {
        if self.mode != Mode::Presentation {
            return;
        }
        let before = self.cursor.current();
        let total = self.total_steps();
        self.cursor.next(total);
        if self.cursor.current() > before {
            self.queue_step_reframe();
        }
    }

    pub fn previous(&mut self) {
        if self.mode != Mode::Presentation {
            return;
        }
        self.cursor.previous();
    }

    pub fn reset(&mut self) {
        if self.mode != Mode::Presentation {
            return;
        }
        self.cursor.reset();
    }

    pub fn go_to_step(&mut self, step: u32) {
        if self.mode != Mode::Presentation {
            return;
        }
        let before = self.cursor.current();
        let total = self.total_steps();
        self.cursor.go_to(step, total);
        if self.cursor.current() > before {
            self.queue_step_reframe();
        }
    }

    pub fn go_to_end(&mut self) {
        if self.mode != Mode::Presentation {
            return;
        }
        let before = self.cursor.current();
        let total = self.total_steps();
        self.cursor.go_to_end(total);
        if self.cursor.current() > before {
            self.queue_step_reframe();
        }
    }

    // --- Graph mutations (editor mode only; silent no-ops otherwise) ---

    /// Adds a node from the palette with placeholder content, assigning its
    /// reveal step through the configured policy. Returns the new id, or
    /// `None` while presenting.
    pub fn add_node(&mut self, template: NodeTemplate, position: Position) -> Option<String> {
        if !self.is_editor_mode() {
            return None;
        }
        let reveal_at_step = self.assigner.assign(&self.graph.nodes);
        let id = self.fresh_id(template.type_name());
        let kind = match template {
            NodeTemplate::ProcessStep => NodeKind::ProcessStep {
                title: "New Step".to_string(),
                description: Some("Description here".to_string()),
            },
            NodeTemplate::Hint => NodeKind::Hint {
                content: "Add your hint text here".to_string(),
                is_code: Some(false),
            },
            NodeTemplate::Image => NodeKind::Image {
                src: String::new(),
                alt: None,
                caption: Some("Image caption".to_string()),
                width: Some(200.0),
                height: None,
            },
        };
        self.graph.nodes.push(Node {
            id: id.clone(),
            position,
            reveal_at_step,
            kind,
        });
        self.push_reframe(ReframeScope::Nodes(vec![id.clone()]), None);
        Some(id)
    }

    /// Merges `Some` fields of the patch into the node's payload. Unknown
    /// id or mismatched variant is a no-op.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        let Some(node) = self.graph.node_mut(id) else {
            return false;
        };
        match (&mut node.kind, patch) {
            (
                NodeKind::ProcessStep { title, description },
                NodePatch::ProcessStep {
                    title: new_title,
                    description: new_description,
                },
            ) => {
                if let Some(t) = new_title {
                    *title = t;
                }
                if let Some(d) = new_description {
                    *description = Some(d);
                }
                true
            }
            (
                NodeKind::Hint { content, is_code },
                NodePatch::Hint {
                    content: new_content,
                    is_code: new_is_code,
                },
            ) => {
                if let Some(c) = new_content {
                    *content = c;
                }
                if let Some(code) = new_is_code {
                    *is_code = Some(code);
                }
                true
            }
            (
                NodeKind::Image {
                    src,
                    alt,
                    caption,
                    width,
                    height,
                },
                NodePatch::Image {
                    src: new_src,
                    alt: new_alt,
                    caption: new_caption,
                    width: new_width,
                    height: new_height,
                },
            ) => {
                if let Some(s) = new_src {
                    *src = s;
                }
                if let Some(a) = new_alt {
                    *alt = Some(a);
                }
                if let Some(c) = new_caption {
                    *caption = Some(c);
                }
                if let Some(w) = new_width {
                    *width = Some(w);
                }
                if let Some(h) = new_height {
                    *height = Some(h);
                }
                true
            }
            _ => false,
        }
    }

    /// Sets a node's reveal step directly (the step-badge path), floor 1.
    pub fn update_node_step(&mut self, id: &str, step: u32) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        let Some(node) = self.graph.node_mut(id) else {
            return false;
        };
        node.reveal_at_step = step.max(1);
        true
    }

    /// Removes the node and every edge referencing it in the same call, so
    /// no intermediate state with a dangling edge is ever observable.
    pub fn delete_node(&mut self, id: &str) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        let before = self.graph.nodes.len();
        self.graph.nodes.retain(|n| n.id != id);
        if self.graph.nodes.len() == before {
            return false;
        }
        self.graph.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    /// Connects two nodes with default handles and styling. Rejects
    /// self-loops, duplicate (source, target) pairs and unknown endpoints
    /// by returning `None`.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<HandlePosition>,
        target_handle: Option<HandlePosition>,
    ) -> Option<String> {
        if !self.is_editor_mode() {
            return None;
        }
        if source == target {
            return None;
        }
        if self.graph.has_edge_between(source, target) {
            return None;
        }
        if !self.graph.contains_node(source) || !self.graph.contains_node(target) {
            return None;
        }
        let id = format!("e-{}-{}", source, target);
        self.graph.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            source_handle: source_handle.unwrap_or(HandlePosition::DEFAULT_SOURCE),
            target_handle: target_handle.unwrap_or(HandlePosition::DEFAULT_TARGET),
            reveal_at_step: None,
            style: EdgeStyle::default(),
        });
        Some(id)
    }

    /// Merges `Some` fields of the patch into the edge. Unknown id is a
    /// no-op.
    pub fn update_edge(&mut self, id: &str, patch: EdgePatch) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        let Some(edge) = self.graph.edge_mut(id) else {
            return false;
        };
        if let Some(h) = patch.source_handle {
            edge.source_handle = h;
        }
        if let Some(h) = patch.target_handle {
            edge.target_handle = h;
        }
        if let Some(step) = patch.reveal_at_step {
            edge.reveal_at_step = Some(step.max(1));
        }
        if let Some(style) = patch.line_style {
            edge.style.line_style = style;
        }
        if let Some(marker) = patch.marker_start {
            edge.style.marker_start = marker;
        }
        if let Some(marker) = patch.marker_end {
            edge.style.marker_end = marker;
        }
        if let Some(animation) = patch.animation {
            edge.style.animation = animation;
        }
        if let Some(color) = patch.stroke_color {
            edge.style.stroke_color = color;
        }
        if let Some(width) = patch.stroke_width {
            edge.style.stroke_width = width;
        }
        true
    }

    pub fn delete_edge(&mut self, id: &str) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        let before = self.graph.edges.len();
        self.graph.edges.retain(|e| e.id != id);
        self.graph.edges.len() != before
    }

    /// Bulk position update from the layout collaborator. Positions only;
    /// no other node fields are touched.
    pub fn apply_positions(&mut self, positions: &[(String, Position)]) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        for (id, position) in positions {
            if let Some(node) = self.graph.node_mut(id) {
                node.position = *position;
            }
        }
        true
    }

    /// Partial-merge update of the flow metadata.
    pub fn update_meta(&mut self, patch: MetaPatch) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        if let Some(title) = patch.title {
            self.graph.meta.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            self.graph.meta.subtitle = Some(subtitle);
        }
        if let Some(version) = patch.version {
            self.graph.meta.version = Some(version);
        }
        true
    }

    pub fn set_settings(&mut self, settings: FlowSettings) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        self.graph.settings = settings;
        true
    }

    // --- Step policy ---

    pub fn assign_mode(&self) -> AssignMode {
        self.assigner.mode()
    }

    pub fn set_assign_mode(&mut self, mode: AssignMode) {
        self.assigner.set_mode(mode);
    }

    /// Compacts sparse reveal steps into a dense `1..=N` sequence. Returns
    /// `None` while presenting.
    pub fn normalize_steps(&mut self) -> Option<NormalizeOutcome> {
        if !self.is_editor_mode() {
            return None;
        }
        Some(policy::normalize_steps(&mut self.graph.nodes))
    }

    /// Overwrites the reveal step for every listed node id (multi-select
    /// "set step").
    pub fn set_step_for_nodes(&mut self, ids: &[&str], step: u32) -> bool {
        if !self.is_editor_mode() {
            return false;
        }
        policy::set_step_for_nodes(&mut self.graph.nodes, ids, step);
        true
    }

    // --- Clipboard ---

    /// Copies the listed nodes into the session clipboard. Returns how many
    /// were copied.
    pub fn copy_nodes(&mut self, ids: &[&str]) -> usize {
        if !self.is_editor_mode() {
            return 0;
        }
        let copied: Vec<Node> = self
            .graph
            .nodes
            .iter()
            .filter(|n| ids.contains(&n.id.as_str()))
            .cloned()
            .collect();
        let count = copied.len();
        self.clipboard.store(copied);
        count
    }

    /// Pastes the clipboard contents at an offset from their original
    /// positions, cloning each node under a fresh id. Returns the new ids.
    pub fn paste(&mut self, offset: Position) -> Vec<String> {
        if !self.is_editor_mode() {
            return Vec::new();
        }
        let templates: Vec<Node> = self.clipboard.nodes().to_vec();
        let mut pasted = Vec::with_capacity(templates.len());
        for node in templates {
            let id = self.fresh_copy_id(node.kind.type_name());
            self.graph.nodes.push(Node {
                id: id.clone(),
                position: Position::new(node.position.x + offset.x, node.position.y + offset.y),
                reveal_at_step: node.reveal_at_step,
                kind: node.kind,
            });
            pasted.push(id);
        }
        pasted
    }

    // --- Document ---

    /// Replaces the whole flow from a document. Not a merge. The cursor is
    /// clamped into the new step range.
    ///
    /// Structural validation happens in [`FlowConfig::from_json`]; an
    /// in-memory document is trusted.
    pub fn load_config(&mut self, config: FlowConfig) {
        self.graph = FlowGraph::from_config(config);
        let total = self.total_steps();
        let current = self.cursor.current();
        self.cursor.go_to(current, total);
    }

    /// Serializes the current flow back into the document shape.
    pub fn config(&self) -> FlowConfig {
        self.graph.to_config()
    }

    // --- Internals ---

    fn animation_ms(&self) -> u32 {
        self.graph
            .settings
            .animation_duration
            .unwrap_or(DEFAULT_ANIMATION_MS)
    }

    fn push_reframe(&mut self, scope: ReframeScope, max_zoom: Option<f32>) {
        let duration_ms = self.animation_ms();
        self.pending_reframes.push(ReframeRequest {
            scope,
            padding: REFRAME_PADDING,
            duration_ms,
            max_zoom,
        });
    }

    /// Queues a reframe over the nodes revealed exactly at the current
    /// step, if any.
    fn queue_step_reframe(&mut self) {
        let revealed: Vec<String> =
            stepper::newly_revealed_at(&self.graph.nodes, self.cursor.current())
                .into_iter()
                .map(str::to_string)
                .collect();
        if !revealed.is_empty() {
            self.push_reframe(ReframeScope::Nodes(revealed), None);
        }
    }

    fn fresh_id(&mut self, type_name: &str) -> String {
        loop {
            self.id_seq += 1;
            let id = format!("{}-{}", type_name, self.id_seq);
            if !self.graph.contains_node(&id) {
                return id;
            }
        }
    }

    fn fresh_copy_id(&mut self, type_name: &str) -> String {
        loop {
            self.id_seq += 1;
            let id = format!("{}-{}-copy", type_name, self.id_seq);
            if !self.graph.contains_node(&id) {
                return id;
            }
        }
    }
}

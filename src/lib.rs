//! # Tenkai - Step-Gated Flow Presentation Engine
//!
//! **Tenkai** is the editing and playback core for step-gated process
//! diagrams: node-and-edge flows where every node carries a reveal step,
//! and a presentation advances through those steps revealing the graph
//! incrementally. The crate owns the hard parts - computing the visible
//! subgraph at an arbitrary step, keeping step annotations consistent as
//! the graph is edited, and gating mutation while a presentation runs -
//! and leaves rendering, autosave scheduling and automatic layout to the
//! host.
//!
//! ## Core Workflow
//!
//! 1.  **Load a document**: Parse a [`FlowConfig`](document::FlowConfig)
//!     from JSON (or convert your own format via the
//!     [`IntoFlowGraph`](flow::IntoFlowGraph) trait).
//! 2.  **Open a session**: An [`EditorSession`](session::EditorSession)
//!     owns the graph, the editor/presentation mode, the step cursor and
//!     the step-assignment policy.
//! 3.  **Edit**: Add, update, connect and delete nodes and edges; new
//!     nodes receive reveal steps from the configured
//!     [`AssignMode`](policy::AssignMode).
//! 4.  **Present**: Enter presentation mode and navigate; each query
//!     returns the visible subgraph for the current step, and the session
//!     queues viewport reframe requests for the renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use tenkai::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "meta": { "title": "Deployment Pipeline" },
//!         "nodes": [
//!             { "id": "build", "type": "processStep", "position": { "x": 0.0, "y": 0.0 },
//!               "revealAtStep": 1, "data": { "title": "Build" } },
//!             { "id": "test", "type": "processStep", "position": { "x": 0.0, "y": 140.0 },
//!               "revealAtStep": 2, "data": { "title": "Test" } },
//!             { "id": "ship", "type": "processStep", "position": { "x": 0.0, "y": 280.0 },
//!               "revealAtStep": 3, "data": { "title": "Ship" } }
//!         ],
//!         "edges": [
//!             { "id": "e-build-test", "source": "build", "target": "test" },
//!             { "id": "e-test-ship", "source": "test", "target": "ship" }
//!         ]
//!     }"#;
//!
//!     let config = FlowConfig::from_json(json)?;
//!     let mut session = EditorSession::new(config);
//!
//!     // Edit: hang a hint off the build node, revealed one step after the
//!     // current maximum (auto-increment is the default policy).
//!     let hint = session
//!         .add_node(NodeTemplate::Hint, Position::new(200.0, 0.0))
//!         .expect("editor mode accepts mutations");
//!     session.connect("build", &hint, None, None);
//!
//!     // Present: step through and read back the visible subgraph.
//!     session.enter_presentation();
//!     assert_eq!(session.current_step(), 1);
//!     assert_eq!(session.view().nodes.len(), 1); // only "build" so far
//!
//!     session.next();
//!     let view = session.view();
//!     assert_eq!(view.nodes.len(), 2);
//!     assert_eq!(view.edges.len(), 1); // build -> test, both ends visible
//!
//!     session.go_to_end();
//!     assert!(session.is_last_step());
//!     assert_eq!(session.view().nodes.len(), 4);
//!
//!     // Mutations are silent no-ops while presenting.
//!     assert!(session.add_node(NodeTemplate::Image, Position::default()).is_none());
//!
//!     // Hand the renderer its queued reframe requests.
//!     let reframes = session.drain_reframe_requests();
//!     assert!(!reframes.is_empty());
//!
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod flow;
pub mod policy;
pub mod prelude;
pub mod session;
pub mod stepper;

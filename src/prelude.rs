//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the tenkai
//! crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use tenkai::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a flow document and start a session
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let config = FlowConfig::from_json(&json)?;
//! let mut session = EditorSession::new(config);
//!
//! // Play it back
//! session.enter_presentation();
//! while !session.is_last_step() {
//!     session.next();
//! }
//! println!("Finished after {} steps", session.total_steps());
//! # Ok(())
//! # }
//! ```

// Session and mode control
pub use crate::session::{
    Clipboard, EditorSession, EdgePatch, MetaPatch, Mode, NodePatch, NodeTemplate, ReframeRequest,
    ReframeScope,
};

// Step engine
pub use crate::stepper::{StepCursor, StepView, newly_revealed_at, total_steps, visible_at};

// Step assignment policy
pub use crate::policy::{
    AssignMode, NormalizeOutcome, StepAssigner, normalize_steps, set_step_for_nodes,
};

// Graph model
pub use crate::flow::{
    Edge, EdgeAnimation, EdgeStyle, FlowGraph, FlowMeta, FlowSettings, FlowSnapshot,
    HandlePosition, IntoFlowGraph, LineStyle, MarkerKind, Node, NodeKind, Position,
};

// Document types
pub use crate::document::{FlowConfig, FlowEdgeConfig, FlowNodeConfig, NodePayload};

// Error types
pub use crate::error::{ConfigError, ConversionError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//! The presentation stepper: pure visibility derivation plus the step
//! cursor.
//!
//! Everything here recomputes from the node and edge slices it is handed;
//! nothing is cached across mutations. Callers that mutate the graph get
//! correct visibility on the very next call.

mod engine;

pub use engine::{newly_revealed_at, total_steps, visible_at};

use crate::flow::{Edge, Node};

/// The filtered (nodes, edges) pair for one step, plus the ids revealed
/// exactly at that step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
    pub newly_revealed: Vec<&'a str>,
}

/// The current position in the presentation sequence.
///
/// All transitions clamp to `[1, total]`; stepping past either boundary is
/// a no-op rather than an error, which is what lets the host disable its
/// navigation buttons off `is_first`/`is_last` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    current: u32,
}

impl Default for StepCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl StepCursor {
    pub fn new() -> Self {
        Self { current: 1 }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn next(&mut self, total: u32) {
        self.current = (self.current + 1).min(total.max(1));
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn go_to(&mut self, step: u32, total: u32) {
        self.current = step.clamp(1, total.max(1));
    }

    pub fn go_to_end(&mut self, total: u32) {
        self.current = total.max(1);
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self, total: u32) -> bool {
        self.current >= total.max(1)
    }
}

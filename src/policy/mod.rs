//! Step assignment and renumbering: what step a new node receives, and how
//! sparse step numbers are compacted back into a dense sequence.

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::flow::Node;

/// How the step for a newly created node is chosen.
///
/// The selected mode is persisted by the host outside the flow document,
/// which is why it serializes with the editor's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignMode {
    /// New node reveals one step after the current maximum.
    #[default]
    AutoIncrement,
    /// New node repeats the step most recently assigned by the policy.
    SameAsLast,
    /// New node always reveals at step 1.
    #[serde(rename = "always-1")]
    AlwaysOne,
}

/// Assigns reveal steps to new nodes according to the configured mode.
///
/// `SameAsLast` replays the assigner's own last assignment rather than
/// re-deriving from the graph; a manual edit of that node's step afterwards
/// is deliberately not followed.
#[derive(Debug, Clone, Default)]
pub struct StepAssigner {
    mode: AssignMode,
    last_assigned: Option<u32>,
}

impl StepAssigner {
    pub fn new(mode: AssignMode) -> Self {
        Self {
            mode,
            last_assigned: None,
        }
    }

    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AssignMode) {
        self.mode = mode;
    }

    /// The step most recently handed out, if any.
    pub fn last_assigned(&self) -> Option<u32> {
        self.last_assigned
    }

    /// Picks the step for a node about to be added to `nodes`.
    ///
    /// Computed from the node snapshot at call time; every call records its
    /// result as the new `last_assigned`.
    pub fn assign(&mut self, nodes: &[Node]) -> u32 {
        let step = match self.mode {
            AssignMode::AutoIncrement => next_step(nodes),
            AssignMode::SameAsLast => self.last_assigned.unwrap_or_else(|| next_step(nodes)),
            AssignMode::AlwaysOne => 1,
        };
        self.last_assigned = Some(step);
        step
    }
}

/// Max existing reveal step plus one; 1 for an empty graph.
fn next_step(nodes: &[Node]) -> u32 {
    nodes.iter().map(|n| n.reveal_at_step).max().unwrap_or(0) + 1
}

/// What a normalization pass did, for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub old_max: u32,
    pub new_max: u32,
}

impl NormalizeOutcome {
    /// True when the steps were already dense from 1.
    pub fn is_noop(&self) -> bool {
        self.old_max == self.new_max
    }
}

/// Compacts the distinct reveal steps into a dense `1..=N` sequence,
/// preserving relative order. Steps `{1, 3, 7}` become `{1, 2, 3}`.
pub fn normalize_steps(nodes: &mut [Node]) -> NormalizeOutcome {
    let old_max = nodes
        .iter()
        .map(|n| n.reveal_at_step)
        .max()
        .unwrap_or(1)
        .max(1);

    let ranks: AHashMap<u32, u32> = nodes
        .iter()
        .map(|n| n.reveal_at_step)
        .sorted()
        .dedup()
        .enumerate()
        .map(|(rank, step)| (step, rank as u32 + 1))
        .collect();

    for node in nodes.iter_mut() {
        node.reveal_at_step = ranks[&node.reveal_at_step];
    }

    NormalizeOutcome {
        old_max,
        new_max: ranks.len().max(1) as u32,
    }
}

/// Overwrites the reveal step of every listed node id, floor 1.
///
/// Unknown ids are skipped. The caller is expected to offer `1..=max+1` as
/// the valid choices, with `max + 1` meaning "create a new step".
pub fn set_step_for_nodes(nodes: &mut [Node], ids: &[&str], step: u32) {
    let step = step.max(1);
    let targets: AHashSet<&str> = ids.iter().copied().collect();
    for node in nodes
        .iter_mut()
        .filter(|n| targets.contains(n.id.as_str()))
    {
        node.reveal_at_step = step;
    }
}

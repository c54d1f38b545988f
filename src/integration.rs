//! Pure core integration functions.
//!
//! Drives a [`DragStateMachine`] with parsed gesture steps and records what the
//! host would observe after each one. Testable without any I/O.

use crate::model::SwipeCommitted;
use crate::script::GestureStep;
use crate::state::DragStateMachine;
use serde::Serialize;
use tracing::trace;

/// What the host observes after one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayRecord {
    /// 1-based step number.
    pub step: usize,
    /// Step kind, as tagged in the script.
    pub op: &'static str,
    /// Phase after the step.
    pub phase: &'static str,
    /// Offset after the step.
    pub offset: i32,
    /// Settle target chosen by a release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i32>,
    /// Commit fired by this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<SwipeCommitted>,
}

/// Apply one step and record the outcome.
pub fn apply_step(machine: &mut DragStateMachine, step: &GestureStep, number: usize) -> ReplayRecord {
    let mut target = None;
    let mut committed = None;

    match *step {
        GestureStep::Reset { width } => machine.reset_layout(width),
        GestureStep::Begin => machine.begin_drag(),
        GestureStep::Drag { dx, left } => {
            let proposed = left.unwrap_or_else(|| machine.offset().saturating_add(dx));
            machine.apply_drag_delta(dx, proposed);
        }
        GestureStep::Release { velocity } => target = Some(machine.release(velocity)),
        GestureStep::Tick => committed = machine.tick_settle().committed,
        GestureStep::Settle => committed = machine.settle().committed,
        GestureStep::SwipeBack => machine.swipe_back(),
    }

    trace!(number, op = step.name(), offset = machine.offset(), "Step applied");
    ReplayRecord {
        step: number,
        op: step.name(),
        phase: machine.phase().as_str(),
        offset: machine.offset(),
        target,
        committed,
    }
}

/// Apply every step in order.
pub fn replay(machine: &mut DragStateMachine, steps: &[GestureStep]) -> Vec<ReplayRecord> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| apply_step(machine, step, index + 1))
        .collect()
}

/// Every commit in a replay, in order.
pub fn commits(records: &[ReplayRecord]) -> Vec<SwipeCommitted> {
    records.iter().filter_map(|record| record.committed).collect()
}

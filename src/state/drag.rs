//! Drag/threshold/settle state machine.
//!
//! Turns a stream of horizontal drag deltas into a clamped offset, maintains the
//! threshold latches of restricted sides, and chooses the settle target on release.
//! Commit events are returned from [`DragStateMachine::tick_settle`] rather than
//! delivered through callbacks.

use crate::model::swipe_config::{DRAG_RANGE_FRACTION, THRESHOLD_FRACTION};
use crate::model::{SettleMotion, Side, SwipeCommitted, SwipeConfig};
use tracing::{debug, trace};

/// Why the element is settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOrigin {
    /// The user released a drag.
    Release,
    /// The host asked for the element to come back to rest.
    SwipeBack,
}

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is active; the offset follows the drag deltas.
    Dragging,
    /// Animating toward `target`.
    Settling {
        /// Offset the settle ends at.
        target: i32,
        /// What started the settle.
        origin: SettleOrigin,
    },
}

impl DragPhase {
    /// Lowercase phase name for logs and replay records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DragPhase::Idle => "idle",
            DragPhase::Dragging => "dragging",
            DragPhase::Settling { .. } => "settling",
        }
    }
}

/// Result of one settle tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleStep {
    /// Offset to render.
    pub offset: i32,
    /// Whether the settle has finished.
    pub done: bool,
    /// Commit fired by finishing this settle, if any.
    pub committed: Option<SwipeCommitted>,
}

/// Host-native rounding: `floor(x + 0.5)`, so halves round toward positive infinity.
pub(crate) fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Drag bound derived from a measured container width.
pub fn drag_range_for_width(container_width: i32) -> i32 {
    (f64::from(container_width.max(0)) * DRAG_RANGE_FRACTION).round() as i32
}

/// State machine for one draggable element.
///
/// # Invariants
/// - `offset` is within `[-horizontal_drag_range, horizontal_drag_range]`.
/// - At most one threshold latch is set.
/// - `horizontal_drag_range` changes only on the first layout after a reset.
#[derive(Debug, Clone)]
pub struct DragStateMachine {
    config: SwipeConfig,
    motion: SettleMotion,
    horizontal_drag_range: i32,
    offset: i32,
    previous_offset: i32,
    passed_left_threshold: bool,
    passed_right_threshold: bool,
    first_layout: bool,
    phase: DragPhase,
}

impl DragStateMachine {
    /// Create a machine with the default settle motion. No drag range until the first layout.
    pub fn new(config: SwipeConfig) -> Self {
        Self::with_motion(config, SettleMotion::default())
    }

    /// Create a machine with an explicit settle motion.
    pub fn with_motion(config: SwipeConfig, motion: SettleMotion) -> Self {
        Self {
            config,
            motion,
            horizontal_drag_range: 0,
            offset: 0,
            previous_offset: 0,
            passed_left_threshold: false,
            passed_right_threshold: false,
            first_layout: true,
            phase: DragPhase::Idle,
        }
    }

    // ===== Accessors =====

    /// Swipe configuration fixed at construction.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Settle motion used by `tick_settle`.
    pub fn motion(&self) -> &SettleMotion {
        &self.motion
    }

    /// Current horizontal offset; `0` is rest.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Offset seen by the last threshold update.
    pub fn previous_offset(&self) -> i32 {
        self.previous_offset
    }

    /// Bound on `|offset|`, fixed at the first layout after a reset.
    pub fn horizontal_drag_range(&self) -> i32 {
        self.horizontal_drag_range
    }

    /// Current gesture phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a restricted left drag crossed its threshold.
    pub fn passed_left_threshold(&self) -> bool {
        self.passed_left_threshold
    }

    /// Whether a restricted right drag crossed its threshold.
    pub fn passed_right_threshold(&self) -> bool {
        self.passed_right_threshold
    }

    /// Whether the next layout pass will recompute the drag range.
    pub fn is_first_layout(&self) -> bool {
        self.first_layout
    }

    /// Target of the settle in progress.
    pub fn settle_target(&self) -> Option<i32> {
        match self.phase {
            DragPhase::Settling { target, .. } => Some(target),
            _ => None,
        }
    }

    // ===== Lifecycle =====

    /// Invalidate all drag history. The drag range is kept until the next layout.
    pub fn reset(&mut self) {
        debug!(offset = self.offset, phase = self.phase.as_str(), "Resetting drag state");
        self.first_layout = true;
        self.previous_offset = 0;
        self.offset = 0;
        self.passed_left_threshold = false;
        self.passed_right_threshold = false;
        self.phase = DragPhase::Idle;
    }

    /// Layout pass. Recomputes the drag range only on the first layout after a reset.
    ///
    /// Returns whether the range was recomputed.
    pub fn layout(&mut self, container_width: i32) -> bool {
        if !self.first_layout {
            return false;
        }

        self.horizontal_drag_range = drag_range_for_width(container_width);
        self.first_layout = false;
        debug!(
            container_width,
            horizontal_drag_range = self.horizontal_drag_range,
            "Drag range computed"
        );
        true
    }

    /// Reset and lay out against a new container width.
    pub fn reset_layout(&mut self, container_width: i32) {
        self.reset();
        self.layout(container_width);
    }

    // ===== Gesture =====

    /// Capture the element for dragging. Interrupts a settle in progress without firing.
    pub fn begin_drag(&mut self) {
        match self.phase {
            DragPhase::Dragging => {}
            DragPhase::Settling { target, .. } => {
                debug!(offset = self.offset, target, "Settle interrupted by new drag");
                self.phase = DragPhase::Dragging;
            }
            DragPhase::Idle => {
                debug!(offset = self.offset, "Drag started");
                self.phase = DragPhase::Dragging;
            }
        }
    }

    /// Apply one drag step and return the offset to render.
    ///
    /// `proposed_left` is the host's unclamped new position; its sign selects which
    /// side's range scales `raw_delta`. Ignored outside a drag.
    pub fn apply_drag_delta(&mut self, raw_delta: i32, proposed_left: i32) -> i32 {
        if self.phase != DragPhase::Dragging {
            trace!(raw_delta, phase = self.phase.as_str(), "Drag delta outside drag ignored");
            return self.offset;
        }

        let range = if proposed_left < 0 {
            self.config.left_range()
        } else {
            self.config.right_range()
        };
        let step = round_half_up(range * raw_delta as f32);
        let bound = self.horizontal_drag_range;
        let new_offset = self.offset.saturating_add(step).clamp(-bound, bound);

        trace!(raw_delta, proposed_left, step, new_offset, "Drag step");
        self.move_to(new_offset);
        self.offset
    }

    /// End the drag and choose the settle target from the release velocity.
    ///
    /// Outside a drag this is a no-op returning the pending target or the current offset.
    pub fn release(&mut self, velocity: f32) -> i32 {
        if self.phase != DragPhase::Dragging {
            return self.settle_target().unwrap_or(self.offset);
        }

        let toward = if velocity < 0.0 {
            Some(Side::Left)
        } else if velocity > 0.0 {
            Some(Side::Right)
        } else {
            None
        };
        // Only a fling toward a free side dismisses; everything else returns to rest.
        let target = match toward {
            Some(side) if self.config.is_free(side) => side.sign() * self.horizontal_drag_range,
            _ => 0,
        };

        debug!(velocity, offset = self.offset, target, "Drag released");
        self.phase = DragPhase::Settling {
            target,
            origin: SettleOrigin::Release,
        };
        target
    }

    /// Animate back to rest from wherever the element is. Never commits.
    pub fn swipe_back(&mut self) {
        debug!(offset = self.offset, phase = self.phase.as_str(), "Swipe back requested");
        self.phase = DragPhase::Settling {
            target: 0,
            origin: SettleOrigin::SwipeBack,
        };
    }

    /// Advance a settle by one frame.
    pub fn tick_settle(&mut self) -> SettleStep {
        let DragPhase::Settling { target, origin } = self.phase else {
            return SettleStep {
                offset: self.offset,
                done: true,
                committed: None,
            };
        };

        if self.offset != target {
            let next = self.motion.step(self.offset, target);
            self.move_to(next);
        }

        if self.offset != target {
            return SettleStep {
                offset: self.offset,
                done: false,
                committed: None,
            };
        }

        self.phase = DragPhase::Idle;
        let committed = self.on_settled(origin);
        SettleStep {
            offset: self.offset,
            done: true,
            committed,
        }
    }

    /// Tick until the settle finishes. Returns the final step.
    pub fn settle(&mut self) -> SettleStep {
        loop {
            let step = self.tick_settle();
            if step.done {
                return step;
            }
        }
    }

    // ===== Internals =====

    fn move_to(&mut self, new_offset: i32) {
        if new_offset == self.offset {
            return;
        }
        self.offset = new_offset;
        self.update_thresholds(new_offset);
    }

    fn update_thresholds(&mut self, new_offset: i32) {
        let range = self.horizontal_drag_range as f32;

        if new_offset > 0 {
            let right = self.config.right_range();
            if right != 1.0 && new_offset > round_half_up(range * right * THRESHOLD_FRACTION) {
                if !self.passed_right_threshold {
                    debug!(offset = new_offset, "Right threshold passed");
                }
                self.passed_right_threshold = true;
                self.passed_left_threshold = false;
            }
        } else if new_offset < 0 {
            let left = self.config.left_range();
            // Compared unrounded, unlike the right side.
            if left != 1.0 && (new_offset as f32) < -range * left * THRESHOLD_FRACTION {
                if !self.passed_left_threshold {
                    debug!(offset = new_offset, "Left threshold passed");
                }
                self.passed_left_threshold = true;
                self.passed_right_threshold = false;
            }
        }

        self.previous_offset = new_offset;
    }

    fn on_settled(&mut self, origin: SettleOrigin) -> Option<SwipeCommitted> {
        let range = self.horizontal_drag_range;

        if origin == SettleOrigin::SwipeBack {
            self.passed_left_threshold = false;
            self.passed_right_threshold = false;
            debug!(offset = self.offset, "Swipe back settled");
            return None;
        }

        let committed = if range != 0 && self.offset == -range {
            Some(SwipeCommitted::dismissed(Side::Left))
        } else if range != 0 && self.offset == range {
            Some(SwipeCommitted::dismissed(Side::Right))
        } else if self.offset == 0 {
            self.take_restricted_commit()
        } else {
            None
        };

        match committed {
            Some(event) => debug!(side = %event.side, kind = ?event.kind, "Swipe committed"),
            None => debug!(offset = self.offset, "Settled without commit"),
        }
        committed
    }

    fn take_restricted_commit(&mut self) -> Option<SwipeCommitted> {
        if !self.config.is_free(Side::Left) && self.passed_left_threshold {
            self.passed_left_threshold = false;
            return Some(SwipeCommitted::restricted(Side::Left));
        }
        if !self.config.is_free(Side::Right) && self.passed_right_threshold {
            self.passed_right_threshold = false;
            return Some(SwipeCommitted::restricted(Side::Right));
        }
        None
    }
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;

//! Host container lifecycle around one drag state machine.
//!
//! Maps the host framework hooks (attach, detach, size change, measure,
//! layout, touch routing) onto the state machine's reset and capture rules.

use crate::model::{SettleMotion, SwipeConfig, SwipeError};
use crate::state::capture::{CaptureGate, ChildId};
use crate::state::drag::DragStateMachine;
use crate::state::parent_lock::{InterceptRequest, ParentInterceptPolicy, TouchPhase};
use tracing::debug;

/// One swipeable container: its state machine, capture gate and intercept policy.
#[derive(Debug, Clone)]
pub struct SwipeableContainer {
    machine: DragStateMachine,
    gate: CaptureGate,
    intercept: ParentInterceptPolicy,
}

impl SwipeableContainer {
    /// Container with no child; call `attach`, `measure` and `layout` before gestures.
    pub fn new(config: SwipeConfig, motion: SettleMotion, touch_slop: i32) -> Self {
        Self {
            machine: DragStateMachine::with_motion(config, motion),
            gate: CaptureGate::new(),
            intercept: ParentInterceptPolicy::new(touch_slop),
        }
    }

    /// The drag state machine.
    pub fn machine(&self) -> &DragStateMachine {
        &self.machine
    }

    /// The drag state machine, for driving gestures.
    pub fn machine_mut(&mut self) -> &mut DragStateMachine {
        &mut self.machine
    }

    /// The child registered by the last measurement.
    pub fn child(&self) -> Option<ChildId> {
        self.gate.child()
    }

    /// Container attached to its window.
    pub fn attach(&mut self) {
        self.machine.reset();
    }

    /// Container detached from its window.
    pub fn detach(&mut self) {
        self.machine.reset();
    }

    /// Container resized. Only a height change invalidates drag history.
    ///
    /// Returns whether the state was reset.
    pub fn size_changed(&mut self, width: i32, height: i32, old_width: i32, old_height: i32) -> bool {
        if height == old_height {
            return false;
        }

        debug!(width, height, old_width, old_height, "Container height changed");
        self.machine.reset();
        true
    }

    /// Measurement pass.
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::PreconditionViolation` when more than one child is present.
    pub fn measure(&mut self, children: &[ChildId]) -> Result<(), SwipeError> {
        self.gate.measure(children).map(|_| ())
    }

    /// Layout pass with the measured width. Returns whether the drag range was recomputed.
    pub fn layout(&mut self, width: i32) -> bool {
        self.machine.layout(width)
    }

    /// Offer a gesture on `candidate`. Starts a drag when it is the registered child.
    pub fn try_capture(&mut self, candidate: ChildId) -> bool {
        if !self.gate.try_capture(candidate) {
            return false;
        }

        self.machine.begin_drag();
        true
    }

    /// Parent intercept request after a routed touch event.
    pub fn on_touch(&self, phase: TouchPhase) -> Option<InterceptRequest> {
        self.intercept.evaluate(self.machine.offset(), phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Side, SwipeCommitted};
    use crate::state::drag::DragPhase;

    fn container(direction: Side, range: f32) -> SwipeableContainer {
        let config = SwipeConfig::new(direction, range).unwrap();
        let mut container = SwipeableContainer::new(config, SettleMotion::default(), 8);
        container.attach();
        container.measure(&[ChildId::new(1)]).unwrap();
        container.layout(375);
        container
    }

    #[test]
    fn first_layout_sets_drag_range() {
        let c = container(Side::Left, 1.0);
        assert_eq!(c.machine().horizontal_drag_range(), 300);
    }

    #[test]
    fn width_only_resize_keeps_state() {
        let mut c = container(Side::Right, 1.0);
        assert!(c.try_capture(ChildId::new(1)));
        c.machine_mut().apply_drag_delta(40, 40);

        assert!(!c.size_changed(500, 80, 375, 80));
        assert_eq!(c.machine().offset(), 40);
        assert!(!c.layout(500), "no reset, no new range");
        assert_eq!(c.machine().horizontal_drag_range(), 300);
    }

    #[test]
    fn height_change_resets_and_next_layout_recomputes() {
        let mut c = container(Side::Right, 1.0);
        c.try_capture(ChildId::new(1));
        c.machine_mut().apply_drag_delta(40, 40);

        assert!(c.size_changed(500, 120, 375, 80));
        assert_eq!(c.machine().offset(), 0);
        assert_eq!(c.machine().phase(), DragPhase::Idle);
        assert!(c.layout(500));
        assert_eq!(c.machine().horizontal_drag_range(), 400);
    }

    #[test]
    fn reattach_resets() {
        let mut c = container(Side::Left, 0.5);
        c.try_capture(ChildId::new(1));
        c.machine_mut().apply_drag_delta(-240, -240);
        assert!(c.machine().passed_left_threshold());

        c.detach();
        c.attach();
        assert!(!c.machine().passed_left_threshold());
        assert!(c.machine().is_first_layout());
    }

    #[test]
    fn capture_rejects_unknown_child() {
        let mut c = container(Side::Left, 1.0);
        assert!(!c.try_capture(ChildId::new(2)));
        assert_eq!(c.machine().phase(), DragPhase::Idle);
    }

    #[test]
    fn measuring_two_children_fails() {
        let mut c = container(Side::Left, 1.0);
        let result = c.measure(&[ChildId::new(1), ChildId::new(2)]);
        assert!(matches!(result, Err(SwipeError::PreconditionViolation { .. })));
    }

    #[test]
    fn touch_requests_follow_offset() {
        let mut c = container(Side::Right, 1.0);
        c.try_capture(ChildId::new(1));
        assert_eq!(c.on_touch(TouchPhase::Down), None);

        c.machine_mut().apply_drag_delta(20, 20);
        assert_eq!(c.on_touch(TouchPhase::Move), Some(InterceptRequest::Disallow));

        c.machine_mut().release(1.0);
        let step = c.machine_mut().settle();
        assert_eq!(step.committed, Some(SwipeCommitted::dismissed(Side::Right)));
        assert_eq!(c.on_touch(TouchPhase::Up), Some(InterceptRequest::Disallow));

        c.machine_mut().swipe_back();
        c.machine_mut().settle();
        assert_eq!(c.on_touch(TouchPhase::Up), Some(InterceptRequest::Allow));
    }
}

//! Capture gate: which child may be dragged.

use crate::model::SwipeError;
use std::fmt;
use tracing::warn;

/// Host-assigned identity of a child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(u64);

impl ChildId {
    /// Wrap a host-assigned identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "child#{}", self.0)
    }
}

/// Decides per gesture whether a child is captured.
///
/// The container holds at most one draggable child, and that child is always
/// capturable.
#[derive(Debug, Clone, Default)]
pub struct CaptureGate {
    child: Option<ChildId>,
}

impl CaptureGate {
    /// Gate with no registered child; nothing is capturable until `measure`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the container's children during measurement.
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::PreconditionViolation` when more than one child is present.
    pub fn measure(&mut self, children: &[ChildId]) -> Result<Option<ChildId>, SwipeError> {
        if children.len() > 1 {
            warn!(count = children.len(), "Swipeable container measured with several children");
            return Err(SwipeError::PreconditionViolation {
                reason: format!(
                    "a swipeable container holds exactly one child, found {}",
                    children.len()
                ),
            });
        }

        self.child = children.first().copied();
        Ok(self.child)
    }

    /// The registered child.
    pub fn child(&self) -> Option<ChildId> {
        self.child
    }

    /// Whether `candidate` may be captured for dragging.
    pub fn try_capture(&self, candidate: ChildId) -> bool {
        self.child == Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_child_is_always_capturable() {
        let mut gate = CaptureGate::new();
        let child = ChildId::new(7);
        assert_eq!(gate.measure(&[child]).unwrap(), Some(child));
        assert!(gate.try_capture(child));
        assert!(gate.try_capture(child), "capture is not consumed");
    }

    #[test]
    fn other_elements_are_not_captured() {
        let mut gate = CaptureGate::new();
        gate.measure(&[ChildId::new(1)]).unwrap();
        assert!(!gate.try_capture(ChildId::new(2)));
    }

    #[test]
    fn nothing_is_captured_before_measurement() {
        let gate = CaptureGate::new();
        assert!(!gate.try_capture(ChildId::new(1)));
    }

    #[test]
    fn several_children_violate_precondition() {
        let mut gate = CaptureGate::new();
        let err = gate
            .measure(&[ChildId::new(1), ChildId::new(2)])
            .unwrap_err();
        assert!(matches!(err, SwipeError::PreconditionViolation { .. }));
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn remeasure_replaces_child() {
        let mut gate = CaptureGate::new();
        gate.measure(&[ChildId::new(1)]).unwrap();
        gate.measure(&[ChildId::new(9)]).unwrap();
        assert!(gate.try_capture(ChildId::new(9)));
        assert!(!gate.try_capture(ChildId::new(1)));
    }
}

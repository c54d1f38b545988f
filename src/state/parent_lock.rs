//! Parent touch-intercept policy.
//!
//! Once the child has moved further than the touch slop the gesture belongs to
//! it, so the host must stop ancestors (scrolling lists, pagers) from stealing
//! the stream. When the gesture ends close to rest they may intercept again.

/// Default touch slop in pixels.
pub const DEFAULT_TOUCH_SLOP: i32 = 8;

/// Raw touch phase as routed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down.
    Down,
    /// Finger moved.
    Move,
    /// Finger lifted.
    Up,
    /// Gesture taken away by the system.
    Cancel,
}

impl TouchPhase {
    /// Whether the gesture ends with this phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, TouchPhase::Up | TouchPhase::Cancel)
    }
}

/// What the host should tell the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptRequest {
    /// Parent must not intercept touches.
    Disallow,
    /// Parent may intercept touches again.
    Allow,
}

/// Decides when the parent must stop intercepting the child's touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentInterceptPolicy {
    touch_slop: i32,
}

impl Default for ParentInterceptPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}

impl ParentInterceptPolicy {
    /// Policy with the given slop in pixels. Negative values count as 0.
    pub fn new(touch_slop: i32) -> Self {
        Self {
            touch_slop: touch_slop.max(0),
        }
    }

    /// Slop in pixels.
    pub fn touch_slop(&self) -> i32 {
        self.touch_slop
    }

    /// Request for the parent after a touch event, given the child's offset.
    pub fn evaluate(&self, offset: i32, phase: TouchPhase) -> Option<InterceptRequest> {
        if offset.unsigned_abs() > self.touch_slop as u32 {
            Some(InterceptRequest::Disallow)
        } else if phase.is_terminal() {
            Some(InterceptRequest::Allow)
        } else {
            None
        }
    }
}

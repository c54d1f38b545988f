//! Swipe state machine (pure).
//!
//! All state transitions are synchronous methods testable without a host.

pub mod capture;
pub mod container;
pub mod drag;
pub mod parent_lock;

// Re-export for convenience
pub use capture::{CaptureGate, ChildId};
pub use container::SwipeableContainer;
pub use drag::{DragPhase, DragStateMachine, SettleOrigin, SettleStep};
pub use parent_lock::{InterceptRequest, ParentInterceptPolicy, TouchPhase};

//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod event;
pub mod side;
pub mod swipe_config;

// Re-export for convenience
pub use error::{AppError, InputError, ScriptError, SwipeError};
pub use event::{CommitKind, SwipeCommitted};
pub use side::Side;
pub use swipe_config::{SettleMotion, SwipeConfig};

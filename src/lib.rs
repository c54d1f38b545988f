//! Swipeable
//!
//! Drag-to-dismiss state machine for a single horizontally swipeable element,
//! plus a replay binary that drives it from JSONL gesture scripts.
//!
//! The state machine in [`state`] is pure; [`source`], [`config`] and
//! [`logging`] form the impure shell used by the binary.

pub mod config;
pub mod logging;
pub mod model;
pub mod script;
pub mod source;
pub mod state;

// Script replay
pub mod integration;

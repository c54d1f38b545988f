//! JSONL gesture script parser.
//!
//! Each non-blank line is one step, tagged by `op`:
//!
//! ```text
//! {"op":"reset","width":375}
//! {"op":"begin"}
//! {"op":"drag","dx":-40}
//! {"op":"release","velocity":0.0}
//! {"op":"settle"}
//! ```

use crate::model::ScriptError;
use serde::{Deserialize, Serialize};

/// One host event in a gesture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GestureStep {
    /// Fresh layout against a container width.
    Reset {
        /// Container width in pixels.
        width: i32,
    },
    /// Capture the element.
    Begin,
    /// One drag sample. `left` is the host's proposed position; defaults to `offset + dx`.
    Drag {
        /// Raw horizontal delta.
        dx: i32,
        /// Proposed position.
        #[serde(default)]
        left: Option<i32>,
    },
    /// End of the drag with the final horizontal velocity.
    Release {
        /// Horizontal velocity; the sign picks the fling direction.
        velocity: f32,
    },
    /// One settle frame.
    Tick,
    /// Settle frames until done.
    Settle,
    /// Programmatic return to rest.
    SwipeBack,
}

impl GestureStep {
    /// The `op` tag of this step.
    pub fn name(&self) -> &'static str {
        match self {
            GestureStep::Reset { .. } => "reset",
            GestureStep::Begin => "begin",
            GestureStep::Drag { .. } => "drag",
            GestureStep::Release { .. } => "release",
            GestureStep::Tick => "tick",
            GestureStep::Settle => "settle",
            GestureStep::SwipeBack => "swipe_back",
        }
    }
}

/// Parse one script line.
///
/// # Errors
///
/// Returns `ScriptError::InvalidJson` carrying `line_number` when the line is not a step.
pub fn parse_step(line: &str, line_number: usize) -> Result<GestureStep, ScriptError> {
    serde_json::from_str(line).map_err(|e| ScriptError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })
}

/// Parse a whole script, skipping blank lines. Stops at the first bad line.
///
/// # Errors
///
/// Returns the `ScriptError` of the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<GestureStep>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_step(line, index + 1))
        .collect()
}

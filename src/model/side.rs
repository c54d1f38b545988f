//! Horizontal side of the rest position.

use crate::model::error::SwipeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute value selecting the left side.
pub const SWIPE_LEFT: i32 = 0;
/// Attribute value selecting the right side.
pub const SWIPE_RIGHT: i32 = 1;

/// One side of the rest position.
///
/// Used both as the configured swipe direction (the single side that may be
/// dismissed) and as the side reported by a commit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Negative offsets.
    Left,
    /// Positive offsets.
    Right,
}

impl Side {
    /// Sign of offsets on this side (`-1` or `1`).
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Lowercase name, as used in config files and replay output.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for Side {
    type Error = SwipeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            SWIPE_LEFT => Ok(Side::Left),
            SWIPE_RIGHT => Ok(Side::Right),
            other => Err(SwipeError::InvalidConfiguration {
                reason: format!("direction must be {SWIPE_LEFT} (left) or {SWIPE_RIGHT} (right), got {other}"),
            }),
        }
    }
}

impl FromStr for Side {
    type Err = SwipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(SwipeError::InvalidConfiguration {
                reason: format!("direction must be \"left\" or \"right\", got {other:?}"),
            }),
        }
    }
}

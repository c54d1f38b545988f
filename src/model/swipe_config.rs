//! Validated swipe configuration.
//!
//! Smart constructors reject out-of-domain parameters so a state machine can
//! never be built from a bad configuration.

use crate::model::error::SwipeError;
use crate::model::Side;

/// Range value that makes a side freely draggable and dismissible.
pub const FREE_RANGE: f32 = 1.0;

/// Fraction of the container width that bounds horizontal dragging.
pub const DRAG_RANGE_FRACTION: f64 = 0.8;

/// Fraction of a side's effective range that sets its threshold latch.
pub const THRESHOLD_FRACTION: f32 = 0.75;

/// Immutable swipe configuration.
///
/// Exactly one side receives the configured range. The other side is inert
/// (range `0.0`): drag input toward it produces no movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    direction: Side,
    swipe_range: f32,
}

impl SwipeConfig {
    /// Smart constructor: validates the range is within `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::InvalidConfiguration` for a range outside `[0, 1]` or NaN.
    pub fn new(direction: Side, swipe_range: f32) -> Result<Self, SwipeError> {
        if !(0.0..=1.0).contains(&swipe_range) {
            return Err(SwipeError::InvalidConfiguration {
                reason: format!("swipe range {swipe_range} is outside [0, 1]"),
            });
        }

        Ok(Self {
            direction,
            swipe_range,
        })
    }

    /// Build from the raw attribute pair of the host (`0` = left, `1` = right).
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::InvalidConfiguration` for an unknown direction value or a bad range.
    pub fn from_attributes(direction: i32, swipe_range: f32) -> Result<Self, SwipeError> {
        Self::new(Side::try_from(direction)?, swipe_range)
    }

    /// The side that receives the configured range.
    pub fn direction(&self) -> Side {
        self.direction
    }

    /// The configured range.
    pub fn swipe_range(&self) -> f32 {
        self.swipe_range
    }

    /// Effective range for one side.
    pub fn range_for(&self, side: Side) -> f32 {
        if side == self.direction {
            self.swipe_range
        } else {
            0.0
        }
    }

    /// Range applied to drags proposed left of rest.
    pub fn left_range(&self) -> f32 {
        self.range_for(Side::Left)
    }

    /// Range applied to drags proposed right of rest.
    pub fn right_range(&self) -> f32 {
        self.range_for(Side::Right)
    }

    /// Whether drags toward `side` are free (dismiss by release velocity).
    pub fn is_free(&self, side: Side) -> bool {
        self.range_for(side) == FREE_RANGE
    }
}

/// Per-tick motion used while settling toward a target.
///
/// Each tick covers `remaining * (1 - smoothing)` pixels, clamped to
/// `[min_step, max_step]`, and never overshoots the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleMotion {
    smoothing: f32,
    min_step: i32,
    max_step: i32,
}

impl Default for SettleMotion {
    fn default() -> Self {
        Self {
            smoothing: 0.6,
            min_step: 4,
            max_step: 120,
        }
    }
}

impl SettleMotion {
    /// Smart constructor.
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::InvalidConfiguration` if smoothing is outside `[0, 1)`,
    /// `min_step` is not positive, or `max_step < min_step`.
    pub fn new(smoothing: f32, min_step: i32, max_step: i32) -> Result<Self, SwipeError> {
        if !(0.0..1.0).contains(&smoothing) {
            return Err(SwipeError::InvalidConfiguration {
                reason: format!("settle smoothing {smoothing} is outside [0, 1)"),
            });
        }
        if min_step < 1 {
            return Err(SwipeError::InvalidConfiguration {
                reason: format!("settle min step must be at least 1, got {min_step}"),
            });
        }
        if max_step < min_step {
            return Err(SwipeError::InvalidConfiguration {
                reason: format!("settle max step {max_step} is below min step {min_step}"),
            });
        }

        Ok(Self {
            smoothing,
            min_step,
            max_step,
        })
    }

    /// Fraction of the remaining distance kept after each tick.
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Smallest step in pixels.
    pub fn min_step(&self) -> i32 {
        self.min_step
    }

    /// Largest step in pixels.
    pub fn max_step(&self) -> i32 {
        self.max_step
    }

    /// Next offset on the way from `current` to `target`.
    pub fn step(&self, current: i32, target: i32) -> i32 {
        let remaining = target - current;
        if remaining == 0 {
            return current;
        }

        let distance = remaining.unsigned_abs() as f32;
        let step = (distance * (1.0 - self.smoothing)).ceil() as i32;
        let step = step.clamp(self.min_step, self.max_step);

        if step as u32 >= remaining.unsigned_abs() {
            target
        } else {
            current + step * remaining.signum()
        }
    }
}

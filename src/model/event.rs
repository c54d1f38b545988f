//! Events surfaced to the host.

use crate::model::Side;
use serde::Serialize;

/// How a swipe was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitKind {
    /// The element settled at the full drag range on a free side.
    Dismissed,
    /// A restricted side crossed its threshold and the element returned to rest.
    Restricted,
}

/// A swipe was committed. Fired once per completed gesture that dismisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwipeCommitted {
    /// Side the element was swiped toward.
    pub side: Side,
    /// Full dismissal or restricted commit.
    pub kind: CommitKind,
}

impl SwipeCommitted {
    /// Settled at the full drag range on `side`.
    pub fn dismissed(side: Side) -> Self {
        Self {
            side,
            kind: CommitKind::Dismissed,
        }
    }

    /// Crossed the threshold on `side` and came back to rest.
    pub fn restricted(side: Side) -> Self {
        Self {
            side,
            kind: CommitKind::Restricted,
        }
    }
}

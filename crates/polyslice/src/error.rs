//! Error type shared by hull construction, slicing, and triangulation.

use std::fmt;

/// Why a hull, slice, or triangulation could not be produced.
///
/// Slicing failures are per fragment: the slicer logs them, records them in
/// its report, and moves on to the next fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum SliceError {
    /// Fewer than 3 usable points, or the scan popped below 2 hull points.
    DegenerateHull { reason: String },
    /// The cut crossed the hull boundary in more than 2 distinct places.
    AmbiguousIntersection { found: usize },
    /// The cut did not cross the hull in exactly 2 places, even after extension.
    NoIntersection { found: usize },
    TriangulationFailure { reason: String },
}

impl SliceError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateHull {
            reason: reason.into(),
        }
    }

    pub(crate) fn triangulation(reason: impl Into<String>) -> Self {
        Self::TriangulationFailure {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateHull { reason } => write!(f, "degenerate hull: {reason}"),
            Self::AmbiguousIntersection { found } => write!(
                f,
                "cut line crosses the hull in {found} distinct places (expected 2)"
            ),
            Self::NoIntersection { found } => write!(
                f,
                "cut line crosses the hull in {found} place(s) after extension (expected 2)"
            ),
            Self::TriangulationFailure { reason } => write!(f, "triangulation failed: {reason}"),
        }
    }
}

impl std::error::Error for SliceError {}

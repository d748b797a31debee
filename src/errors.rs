//! Computation errors

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt::Display;

/// All the ways an arc computation can fail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArcError {
    /// (DegeneratePoints) The three points are collinear or coincident,
    /// so no unique finite circle passes through them
    DegeneratePoints(Point2<Real>, Point2<Real>, Point2<Real>),
    /// (AmbiguousArc) Start and end coincide on the circle with no
    /// distinguishing pass-through direction
    AmbiguousArc,
    /// (InvalidPointCount) A division-point count of zero was requested
    InvalidPointCount,
    /// (InvalidSpacing) The requested segment length is not a positive finite number
    InvalidSpacing(Real),
    /// (SpacingExceedsArc) The requested segment length is longer than the arc,
    /// so not even one division point fits
    SpacingExceedsArc { spacing: Real, arc_length: Real },
}

impl Display for ArcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArcError::DegeneratePoints(p1, p2, p3) => write!(
                f,
                "(DegeneratePoints) No unique circle through collinear points: {}, {}, {}",
                p1, p2, p3
            ),
            ArcError::AmbiguousArc => write!(
                f,
                "(AmbiguousArc) Start and end coincide with no distinguishing pass-through direction"
            ),
            ArcError::InvalidPointCount => {
                write!(f, "(InvalidPointCount) Division-point count must be at least 1")
            },
            ArcError::InvalidSpacing(spacing) => write!(
                f,
                "(InvalidSpacing) Segment length must be a positive finite number, got {}",
                spacing
            ),
            ArcError::SpacingExceedsArc { spacing, arc_length } => write!(
                f,
                "(SpacingExceedsArc) Segment length {} exceeds arc length {} - cannot place even one division point",
                spacing, arc_length
            ),
        }
    }
}

//! Arc resolution: which of the two arcs, and which way around

use crate::circle::Circle;
use crate::errors::ArcError;
use crate::float_types::{Real, TAU, tolerance};
use nalgebra::Point2;

/// Rotational direction of travel along a circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Clockwise (negative sweep)
    Cw,
    /// Counterclockwise (positive sweep)
    Ccw,
}

/// A directed circular arc.
///
/// `sweep` is the signed angular extent traveled from `start_angle`; its sign
/// agrees with `direction` (Ccw ⇒ positive, Cw ⇒ negative) and its magnitude
/// lies in `(0, 2π]`, reaching `2π` only for the full-circle case where the
/// arc's endpoints coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub circle: Circle,
    pub start_angle: Real,
    pub sweep: Real,
    pub direction: Direction,
}

impl Arc {
    /// **Mathematical Foundation: Direction Disambiguation**
    ///
    /// Resolves the arc of `circle` that passes through `p1`, `p2`, `p3` in
    /// that order. The three points determine not just an angular span but a
    /// rotational direction, and the two must be derived from the *order* of
    /// the points: the geometrically shorter of the two candidate arcs does
    /// not always correspond to the shorter angular span.
    ///
    /// With polar angles `θ1`, `θmid`, `θ3` about the center, reduce
    ///
    /// ```text
    /// d1 = (θmid − θ1) mod 2π
    /// d2 = (θ3  − θ1) mod 2π
    /// ```
    ///
    /// into `[0, 2π)`. Traveling counterclockwise from `θ1`, `d1` and `d2`
    /// are the angular distances at which the pass-through and end points are
    /// met; `d1 < d2` means the pass-through is encountered first, so the arc
    /// runs counterclockwise, otherwise clockwise. The raw sweep `θ3 − θ1`
    /// is then shifted by `±2π` so its sign matches the direction.
    ///
    /// # Errors
    ///
    /// - `d2 ≈ 0` with `d1 ≈ 0`: all three points share an angle, so no
    ///   pass-through distinguishes a direction ⇒ [`ArcError::AmbiguousArc`].
    /// - `d1 ≈ d2` (nonzero): the pass-through is angularly coincident with
    ///   the end point, leaving the direction undefined ⇒
    ///   [`ArcError::AmbiguousArc`] rather than a guessed default.
    ///
    /// `d2 ≈ 0` with a distinguishing mid angle is the full-circle case:
    /// the ordering rule yields clockwise and a sweep of `−2π`, never a
    /// silent zero-length arc.
    pub fn through_points(
        circle: Circle,
        p1: Point2<Real>,
        p2: Point2<Real>,
        p3: Point2<Real>,
    ) -> Result<Self, ArcError> {
        let theta1 = circle.angle_of(p1);
        let theta_mid = circle.angle_of(p2);
        let theta3 = circle.angle_of(p3);

        let d1 = (theta_mid - theta1).rem_euclid(TAU);
        let d2 = (theta3 - theta1).rem_euclid(TAU);

        // Angular coincidence can land on either side of the 2π seam.
        let eps = tolerance();
        let coincident = |d: Real| d < eps || TAU - d < eps;

        if coincident(d2) && coincident(d1) {
            return Err(ArcError::AmbiguousArc);
        }
        if !coincident(d2) && (d1 - d2).abs() < eps {
            return Err(ArcError::AmbiguousArc);
        }

        let direction = if d1 < d2 { Direction::Ccw } else { Direction::Cw };

        let mut sweep = theta3 - theta1;
        match direction {
            Direction::Ccw => {
                if sweep <= 0.0 {
                    sweep += TAU;
                }
            },
            Direction::Cw => {
                if sweep >= 0.0 {
                    sweep -= TAU;
                }
            },
        }

        Ok(Self { circle, start_angle: theta1, sweep, direction })
    }

    /// Arc length, `|radius × sweep|`.
    #[inline]
    pub fn length(&self) -> Real {
        (self.circle.radius * self.sweep).abs()
    }

    /// Angle at which the arc ends, `start_angle + sweep`.
    #[inline]
    pub fn end_angle(&self) -> Real {
        self.start_angle + self.sweep
    }

    /// Evaluates the arc at parameter `t` in `[0, 1]`; `t = 0` is the start
    /// point, `t = 1` the end point.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        self.circle.point_at_angle(self.start_angle + t * self.sweep)
    }

    /// Approximates the arc as a polyline of `segments` chords
    /// (`segments + 1` vertices, endpoints included), suitable for plotting.
    pub fn to_polyline(&self, segments: usize) -> Vec<Point2<Real>> {
        (0..=segments)
            .map(|i| self.point_at(i as Real / segments as Real))
            .collect()
    }
}

//! Circle fitting through three points

use crate::errors::ArcError;
use crate::float_types::{Real, tolerance};
use nalgebra::Point2;

/// A circle in the XY plane.
///
/// Immutable once computed; `radius` is always positive for circles produced
/// by [`Circle::from_three_points`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<Real>,
    pub radius: Real,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point2<Real>, radius: Real) -> Self {
        Self { center, radius }
    }

    /// **Mathematical Foundation: Circle Through Three Points**
    ///
    /// Fits the unique circle passing through `p1`, `p2`, `p3` using the
    /// perpendicular-bisector method. Subtracting the circle equation
    /// `(x−cx)² + (y−cy)² = r²` at pairs of points eliminates `r²` and the
    /// quadratic terms, leaving a 2×2 linear system in the center:
    ///
    /// ```text
    /// (x1−x2)·cx + (y1−y2)·cy = (x1²+y1² − x2²−y2²)/2
    /// (x2−x3)·cx + (y2−y3)·cy = (x2²+y2² − x3²−y3²)/2
    /// ```
    ///
    /// solved by Cramer's rule. The system's determinant
    /// `(x1−x2)(y2−y3) − (x2−x3)(y1−y2)` is twice the signed area of the
    /// triangle `p1 p2 p3`; it vanishes exactly when the points are collinear
    /// (or coincident), in which case no unique finite circle exists and
    /// [`ArcError::DegeneratePoints`] is returned.
    ///
    /// Pure and deterministic: failure is reported, never approximated.
    pub fn from_three_points(
        p1: Point2<Real>,
        p2: Point2<Real>,
        p3: Point2<Real>,
    ) -> Result<Self, ArcError> {
        let temp = p2.x * p2.x + p2.y * p2.y;
        let bc = (p1.x * p1.x + p1.y * p1.y - temp) / 2.0;
        let cd = (temp - p3.x * p3.x - p3.y * p3.y) / 2.0;
        let det = (p1.x - p2.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p2.y);

        if det.abs() < tolerance() {
            return Err(ArcError::DegeneratePoints(p1, p2, p3));
        }

        let cx = (bc * (p2.y - p3.y) - cd * (p1.y - p2.y)) / det;
        let cy = ((p1.x - p2.x) * cd - (p2.x - p3.x) * bc) / det;
        let center = Point2::new(cx, cy);
        let radius = (center - p1).norm();

        Ok(Self { center, radius })
    }

    /// Evaluates the circle at polar angle `theta` (radians, measured from
    /// the positive X axis about the center).
    #[inline]
    pub fn point_at_angle(&self, theta: Real) -> Point2<Real> {
        Point2::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y + self.radius * theta.sin(),
        )
    }

    /// Polar angle of `point` about the center, in `(-π, π]`.
    #[inline]
    pub fn angle_of(&self, point: Point2<Real>) -> Real {
        (point.y - self.center.y).atan2(point.x - self.center.x)
    }

    #[inline]
    pub fn circumference(&self) -> Real {
        crate::float_types::TAU * self.radius
    }

    /// Whether `point` lies on the circle boundary within `eps`.
    #[inline]
    pub fn contains_on_boundary(&self, point: Point2<Real>, eps: Real) -> bool {
        ((point - self.center).norm() - self.radius).abs() <= eps
    }
}

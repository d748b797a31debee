use arcdiv::errors::ArcError;
use arcdiv::float_types::{PI, Real};
use arcdiv::circle::Circle;
use nalgebra::Point2;

const TOL: Real = 1e-9;

#[test]
fn fit_unit_circle_from_chord_points() {
    let p1 = Point2::new(0.0, 0.0);
    let p2 = Point2::new(1.0, 1.0);
    let p3 = Point2::new(2.0, 0.0);
    let circle = Circle::from_three_points(p1, p2, p3).unwrap();
    assert!((circle.center.x - 1.0).abs() < TOL, "cx={}", circle.center.x);
    assert!(circle.center.y.abs() < TOL, "cy={}", circle.center.y);
    assert!((circle.radius - 1.0).abs() < TOL, "r={}", circle.radius);
}

#[test]
fn fit_places_all_three_points_on_boundary() {
    // Millimeter-scale coordinates well away from the origin.
    let triples = [
        [
            Point2::new(12.5, -3.2),
            Point2::new(47.9, 88.1),
            Point2::new(-60.0, 22.7),
        ],
        [
            Point2::new(0.0, 100.0),
            Point2::new(0.1, 0.0),
            Point2::new(55.5, 55.5),
        ],
        [
            Point2::new(-1.0, -1.0),
            Point2::new(-2.0, 5.0),
            Point2::new(3.0, 0.5),
        ],
    ];
    for [p1, p2, p3] in triples {
        let circle = Circle::from_three_points(p1, p2, p3).unwrap();
        for p in [p1, p2, p3] {
            let distance = (p - circle.center).norm();
            let relative = (distance - circle.radius).abs() / circle.radius;
            assert!(relative < 1e-9, "point {} off circle by {}", p, relative);
        }
    }
}

#[test]
fn collinear_points_are_degenerate() {
    let result = Circle::from_three_points(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    );
    assert!(matches!(result, Err(ArcError::DegeneratePoints(_, _, _))));

    // Horizontal line
    let result = Circle::from_three_points(
        Point2::new(-5.0, 2.0),
        Point2::new(0.0, 2.0),
        Point2::new(9.0, 2.0),
    );
    assert!(matches!(result, Err(ArcError::DegeneratePoints(_, _, _))));
}

#[test]
fn coincident_points_are_degenerate() {
    let p = Point2::new(3.0, 4.0);
    let result = Circle::from_three_points(p, p, p);
    assert!(matches!(result, Err(ArcError::DegeneratePoints(_, _, _))));

    // Two coincident, one apart
    let result = Circle::from_three_points(p, p, Point2::new(7.0, -1.0));
    assert!(matches!(result, Err(ArcError::DegeneratePoints(_, _, _))));
}

#[test]
fn angle_and_evaluation_roundtrip() {
    let circle = Circle::new(Point2::new(2.0, -1.0), 3.0);
    for theta in [0.0, PI / 6.0, PI / 2.0, 3.0 * PI / 4.0, -2.5] {
        let p = circle.point_at_angle(theta);
        assert!((circle.angle_of(p) - theta).abs() < TOL);
        assert!(circle.contains_on_boundary(p, TOL));
    }
}

#[test]
fn circumference_matches_radius() {
    let circle = Circle::new(Point2::new(0.0, 0.0), 2.0);
    assert!((circle.circumference() - 4.0 * PI).abs() < TOL);
}

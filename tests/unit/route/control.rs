use super::*;

const ORIGIN: Point = Point::new(0.0, 0.0);

#[test]
fn top_clamps_above_anchor() {
    assert_eq!(
        control_point(ORIGIN, Point::new(0.0, 100.0), RectSide::Top, 50.0),
        Point::new(0.0, -50.0)
    );
    assert_eq!(
        control_point(ORIGIN, Point::new(0.0, 20.0), RectSide::Top, 50.0),
        Point::new(0.0, -50.0)
    );
}

#[test]
fn top_uses_midpoint_when_other_is_far_above() {
    assert_eq!(
        control_point(ORIGIN, Point::new(30.0, -300.0), RectSide::Top, 50.0),
        Point::new(0.0, -150.0)
    );
}

#[test]
fn bottom_clamps_below_anchor() {
    assert_eq!(
        control_point(ORIGIN, Point::new(0.0, -100.0), RectSide::Bottom, 40.0),
        Point::new(0.0, 40.0)
    );
    assert_eq!(
        control_point(ORIGIN, Point::new(0.0, 200.0), RectSide::Bottom, 40.0),
        Point::new(0.0, 100.0)
    );
}

#[test]
fn left_and_right_move_horizontally() {
    assert_eq!(
        control_point(Point::new(10.0, 5.0), Point::new(500.0, 0.0), RectSide::Left, 20.0),
        Point::new(-10.0, 5.0)
    );
    assert_eq!(
        control_point(Point::new(10.0, 5.0), Point::new(-500.0, 0.0), RectSide::Left, 20.0),
        Point::new(-245.0, 5.0)
    );
    assert_eq!(
        control_point(Point::new(10.0, 5.0), Point::new(-500.0, 0.0), RectSide::Right, 20.0),
        Point::new(30.0, 5.0)
    );
    assert_eq!(
        control_point(Point::new(10.0, 5.0), Point::new(500.0, 0.0), RectSide::Right, 20.0),
        Point::new(255.0, 5.0)
    );
}

#[test]
fn zero_stretch_means_default() {
    assert_eq!(
        control_point(ORIGIN, ORIGIN, RectSide::Right, 0.0),
        Point::new(DEFAULT_CONTROL_POINT_STRETCH, 0.0)
    );
}

#[test]
fn handle_is_at_least_stretch_away_along_outward_axis() {
    let target = Point::new(3.0, 4.0);
    for side in RectSide::ALL {
        for other in [
            Point::new(-80.0, 0.0),
            Point::new(80.0, 0.0),
            Point::new(0.0, -80.0),
            Point::new(0.0, 80.0),
        ] {
            let cp = control_point(target, other, side, 25.0);
            let along = (cp - target).dot(side.outward());
            assert!(along >= 25.0, "{side:?} {other:?} -> {cp:?}");
            assert_eq!((cp - target).cross(side.outward()), 0.0);
        }
    }
}

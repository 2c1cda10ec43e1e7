use crate::foundation::core::{Point, RectSide};

/// Stretch used when none is configured.
pub const DEFAULT_CONTROL_POINT_STRETCH: f64 = 50.0;

/// Bezier handle for the anchor `target` attached on `side`.
///
/// The handle stays on the side's outward axis through `target`. It moves
/// toward the midpoint between `target` and `other`, but never closer than
/// `min_distance` to `target` in the outward direction. A `min_distance` of
/// zero means [`DEFAULT_CONTROL_POINT_STRETCH`].
pub fn control_point(target: Point, other: Point, side: RectSide, min_distance: f64) -> Point {
    let min_distance = if min_distance == 0.0 {
        DEFAULT_CONTROL_POINT_STRETCH
    } else {
        min_distance
    };
    let mid = target.midpoint(other);
    match side {
        RectSide::Top => Point::new(target.x, mid.y.min(target.y - min_distance)),
        RectSide::Bottom => Point::new(target.x, mid.y.max(target.y + min_distance)),
        RectSide::Left => Point::new(mid.x.min(target.x - min_distance), target.y),
        RectSide::Right => Point::new(mid.x.max(target.x + min_distance), target.y),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/route/control.rs"]
mod tests;

use crate::foundation::core::{Point, Rect, RectSide};

/// Multiplier applied to the configured padding when offsetting anchors.
///
/// Existing consumers depend on the doubled offset.
pub const ANCHOR_PAD_FACTOR: f64 = 2.0;

/// Candidate attachment points, one per side, pushed outward from a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchors {
    /// Midpoint of the top edge, moved up.
    pub top: Point,
    /// Midpoint of the right edge, moved right.
    pub right: Point,
    /// Midpoint of the bottom edge, moved down.
    pub bottom: Point,
    /// Midpoint of the left edge, moved left.
    pub left: Point,
}

impl Anchors {
    /// Anchors for `rect`, each displaced by `ANCHOR_PAD_FACTOR * pad`.
    pub fn around(rect: Rect, pad: f64) -> Self {
        let offset = ANCHOR_PAD_FACTOR * pad;
        let w = rect.x1 - rect.x0;
        let h = rect.y1 - rect.y0;
        let cx = rect.x0 + w / 2.0;
        let cy = rect.y0 + h / 2.0;
        Self {
            top: Point::new(cx, rect.y0 - offset),
            right: Point::new(rect.x0 + w + offset, cy),
            bottom: Point::new(cx, rect.y0 + h + offset),
            left: Point::new(rect.x0 - offset, cy),
        }
    }

    /// Anchor for `side`.
    pub fn get(&self, side: RectSide) -> Point {
        match side {
            RectSide::Top => self.top,
            RectSide::Right => self.right,
            RectSide::Bottom => self.bottom,
            RectSide::Left => self.left,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/route/anchor.rs"]
mod tests;

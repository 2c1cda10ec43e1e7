use kurbo::ParamCurve;

use crate::foundation::core::{BezPath, CubicBez, Point, RectSide};

/// A computed connector: one cubic Bezier segment plus arrowhead angles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowDescriptor {
    /// Curve start (anchor on the start box).
    pub start: Point,
    /// Handle attached to `start`.
    pub control_start: Point,
    /// Handle attached to `end`.
    pub control_end: Point,
    /// Curve end (anchor on the end box).
    pub end: Point,
    /// Outward angle at `start`, in degrees.
    pub start_angle: f64,
    /// Outward angle at `end`, in degrees.
    pub end_angle: f64,
    /// Side of the start box the curve leaves from.
    pub start_side: RectSide,
    /// Side of the end box the curve arrives at.
    pub end_side: RectSide,
}

impl ArrowDescriptor {
    /// The curve as a kurbo cubic segment.
    pub fn to_cubic(&self) -> CubicBez {
        CubicBez::new(self.start, self.control_start, self.control_end, self.end)
    }

    /// The curve as a single-segment path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.curve_to(self.control_start, self.control_end, self.end);
        path
    }

    /// SVG path data (`M .. C ..`) for the curve.
    pub fn to_svg_path(&self) -> String {
        self.to_bez_path().to_svg()
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        self.to_cubic().eval(t.clamp(0.0, 1.0))
    }
}

/// Outward angle in degrees for an anchor on `side`.
///
/// Left is 0, Top 90, Right 180, Bottom 270.
pub fn angle_of(side: RectSide) -> f64 {
    side.angle()
}

#[cfg(test)]
#[path = "../../tests/unit/arrow/descriptor.rs"]
mod tests;

pub use kurbo::{BezPath, CubicBez, Point, Rect, Vec2};

/// One of the four edges of an axis-aligned rectangle.
///
/// Coordinates follow the screen convention: `y` grows downwards, so `Top`
/// faces negative `y`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RectSide {
    /// Edge at the minimum `y`.
    Top,
    /// Edge at the maximum `x`.
    Right,
    /// Edge at the maximum `y`.
    Bottom,
    /// Edge at the minimum `x`.
    Left,
}

impl RectSide {
    /// All sides in canonical search order.
    pub const ALL: [RectSide; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Outward-facing angle in degrees, used to orient arrowhead glyphs.
    pub fn angle(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Top => 90.0,
            Self::Right => 180.0,
            Self::Bottom => 270.0,
        }
    }

    /// Unit vector pointing away from the rectangle through this side.
    pub fn outward(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Top => 0b0001,
            Self::Right => 0b0010,
            Self::Bottom => 0b0100,
            Self::Left => 0b1000,
        }
    }
}

/// Subset of [`RectSide`] values.
///
/// Iteration is always in [`RectSide::ALL`] order regardless of insertion
/// order. An empty set means "no restriction" once passed through
/// [`SideSet::or_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<RectSide>", into = "Vec<RectSide>")]
pub struct SideSet(u8);

impl SideSet {
    /// The empty set.
    pub const EMPTY: SideSet = SideSet(0);
    /// All four sides.
    pub const ALL: SideSet = SideSet(0b1111);

    /// Set holding exactly one side.
    pub fn only(side: RectSide) -> Self {
        Self(side.bit())
    }

    /// Returns a copy of this set with `side` added.
    pub fn with(self, side: RectSide) -> Self {
        Self(self.0 | side.bit())
    }

    /// Whether `side` is a member.
    pub fn contains(self, side: RectSide) -> bool {
        self.0 & side.bit() != 0
    }

    /// Whether the set has no members.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Empty sets widen to [`SideSet::ALL`].
    pub fn or_all(self) -> Self {
        if self.is_empty() { Self::ALL } else { self }
    }

    /// Members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = RectSide> {
        RectSide::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    /// First member in canonical order.
    pub fn first(self) -> Option<RectSide> {
        self.iter().next()
    }
}

impl FromIterator<RectSide> for SideSet {
    fn from_iter<I: IntoIterator<Item = RectSide>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<Vec<RectSide>> for SideSet {
    fn from(value: Vec<RectSide>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SideSet> for Vec<RectSide> {
    fn from(value: SideSet) -> Self {
        value.iter().collect()
    }
}

/// Rectangle from a top-left corner and a size.
///
/// The size is taken as given; it is not normalized when negative. Zero size
/// describes a point.
pub fn rect_from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

/// `rect` expanded by `amount` on every side.
pub fn grow(rect: Rect, amount: f64) -> Rect {
    rect.inflate(amount, amount)
}

/// Strict interior test: points on the boundary are outside.
pub fn contains(point: Point, rect: Rect) -> bool {
    point.x > rect.x0 && point.x < rect.x1 && point.y > rect.y0 && point.y < rect.y1
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

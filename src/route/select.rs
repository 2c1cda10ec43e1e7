use crate::{
    foundation::core::{Point, Rect, RectSide, SideSet, contains, distance, grow},
    route::anchor::Anchors,
};

/// Margin around each rectangle inside which the opposite anchor is rejected.
///
/// Independent of the configured padding; tuned by eye.
pub const KEEP_OUT_MARGIN: f64 = 15.0;

/// How the side search ranks admissible candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideStrategy {
    /// Keep the first candidate that clears both keep-out zones.
    ///
    /// Reproduces the side choices of existing consumers, where the distance
    /// comparison never replaces the initial pick. This matches that output
    /// only while the first pair is admissible: when the Top anchor is
    /// rejected, those consumers still report Top/Top, whereas this moves on
    /// to the next admissible pair (for a box directly below another, Right
    /// instead of Top).
    #[default]
    FirstAdmissible,
    /// Keep the candidate with the shortest anchor-to-anchor distance.
    ///
    /// Ties keep the earlier candidate.
    Shortest,
}

impl SideStrategy {
    /// Whether a candidate at `candidate` distance replaces the current best.
    pub fn prefers(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::FirstAdmissible => false,
            Self::Shortest => candidate < best,
        }
    }
}

/// One end of the search: the box, its anchors and the sides it may use.
#[derive(Clone, Copy, Debug)]
pub struct SearchEnd {
    /// The endpoint rectangle.
    pub rect: Rect,
    /// Anchors computed for `rect`.
    pub anchors: Anchors,
    /// Allowed sides; empty means all.
    pub allowed: SideSet,
}

impl SearchEnd {
    fn keep_out(&self) -> Rect {
        grow(self.rect, KEEP_OUT_MARGIN)
    }

    fn fallback_side(&self) -> RectSide {
        self.allowed.or_all().first().unwrap_or(RectSide::Top)
    }
}

/// Sides and anchor points picked by [`select_sides`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideChoice {
    /// Side the connector leaves the start box from.
    pub start_side: RectSide,
    /// Side the connector enters the end box through.
    pub end_side: RectSide,
    /// Anchor on `start_side`.
    pub start: Point,
    /// Anchor on `end_side`.
    pub end: Point,
}

impl SideChoice {
    fn new(start: &SearchEnd, start_side: RectSide, end: &SearchEnd, end_side: RectSide) -> Self {
        Self {
            start_side,
            end_side,
            start: start.anchors.get(start_side),
            end: end.anchors.get(end_side),
        }
    }
}

/// Picks attachment sides for a connector from `start` to `end`.
///
/// Walks every allowed (start, end) pair in canonical order. A pair is
/// rejected when its start anchor lies strictly inside the end box grown by
/// [`KEEP_OUT_MARGIN`], or its end anchor lies inside the grown start box.
/// Among the rest, `strategy` decides. When every pair is rejected the first
/// allowed side of each end is used.
pub fn select_sides(start: &SearchEnd, end: &SearchEnd, strategy: SideStrategy) -> SideChoice {
    let start_keep_out = start.keep_out();
    let end_keep_out = end.keep_out();
    let start_sides = start.allowed.or_all();
    let end_sides = end.allowed.or_all();

    let best = start_sides
        .iter()
        .flat_map(|s| {
            end_sides
                .iter()
                .map(move |e| SideChoice::new(start, s, end, e))
        })
        .filter(|c| {
            if contains(c.start, end_keep_out) {
                tracing::trace!(
                    start_side = ?c.start_side,
                    end_side = ?c.end_side,
                    "start anchor inside end keep-out"
                );
                return false;
            }
            if contains(c.end, start_keep_out) {
                tracing::trace!(
                    start_side = ?c.start_side,
                    end_side = ?c.end_side,
                    "end anchor inside start keep-out"
                );
                return false;
            }
            true
        })
        .fold(None::<(SideChoice, f64)>, |best, candidate| {
            let d = distance(candidate.start, candidate.end);
            match best {
                Some((_, best_d)) if !strategy.prefers(d, best_d) => best,
                _ => Some((candidate, d)),
            }
        });

    match best {
        Some((choice, _)) => choice,
        None => {
            let choice = SideChoice::new(start, start.fallback_side(), end, end.fallback_side());
            tracing::debug!(
                start_side = ?choice.start_side,
                end_side = ?choice.end_side,
                "every side pair rejected; using fallback"
            );
            choice
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/route/select.rs"]
mod tests;

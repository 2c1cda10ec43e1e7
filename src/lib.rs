//! carrows computes curved connectors between rectangles.
//!
//! Given two boxes (or points, as zero-size boxes) it picks the side of each
//! box the connector attaches to and the two Bezier handles that make the
//! curve leave and enter those sides perpendicularly. The result is a single
//! cubic segment plus an outward angle at each end for orienting arrowheads.
//! Nothing is drawn; front ends render the [`ArrowDescriptor`] themselves.
//!
//! # Pipeline
//!
//! 1. **Anchors**: each box yields four candidate attachment points, one per
//!    side, pushed outward by twice the configured padding ([`Anchors`]).
//! 2. **Side selection**: allowed (start, end) side pairs are filtered by
//!    keep-out zones around the opposite box and ranked by a
//!    [`SideStrategy`] ([`select_sides`]).
//! 3. **Handles**: each chosen anchor gets a control point along its side's
//!    outward axis, at least the configured stretch away ([`control_point`]).
//!
//! # Getting started
//!
//! ```
//! use carrows::{ArrowOpts, RectSide, SideStrategy, compute_box_arrow};
//!
//! let opts = ArrowOpts::builder()
//!     .pad(4.0)
//!     .end_sides([RectSide::Left, RectSide::Top])
//!     .side_strategy(SideStrategy::Shortest)
//!     .build()
//!     .unwrap();
//! let arrow = compute_box_arrow(0.0, 0.0, 120.0, 60.0, 300.0, 40.0, 80.0, 40.0, Some(&opts));
//! assert_eq!(arrow.end_side, RectSide::Left);
//! let _svg = arrow.to_svg_path();
//! ```
//!
//! Every function is pure and allocation-light, so calls may run on any
//! thread concurrently.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod arrow;
mod foundation;
mod route;

pub use arrow::compute::{
    ArrowRequest, Endpoint, arrow_between, compute_arrow, compute_box_arrow,
};
pub use arrow::descriptor::{ArrowDescriptor, angle_of};
pub use arrow::opts::{ArrowOpts, ArrowOptsBuilder};
pub use foundation::core::{
    BezPath, CubicBez, Point, Rect, RectSide, SideSet, Vec2, contains, distance, grow,
    rect_from_xywh,
};
pub use foundation::error::{ArrowError, ArrowResult};
pub use route::anchor::{ANCHOR_PAD_FACTOR, Anchors};
pub use route::control::{DEFAULT_CONTROL_POINT_STRETCH, control_point};
pub use route::select::{
    KEEP_OUT_MARGIN, SearchEnd, SideChoice, SideStrategy, select_sides,
};

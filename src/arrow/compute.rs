use crate::{
    arrow::descriptor::ArrowDescriptor,
    arrow::opts::ArrowOpts,
    foundation::core::{Rect, rect_from_xywh},
    foundation::error::{ArrowError, ArrowResult},
    route::anchor::Anchors,
    route::control::control_point,
    route::select::{SearchEnd, select_sides},
};

/// Connector between two points, treated as zero-size boxes.
///
/// `None` options mean [`ArrowOpts::default`].
///
/// ```
/// let a = carrows::compute_arrow(0.0, 0.0, 100.0, 100.0, None);
/// assert_eq!(a.control_start, carrows::Point::new(0.0, -50.0));
/// assert_eq!(a.control_end, carrows::Point::new(100.0, 50.0));
/// ```
pub fn compute_arrow(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    opts: Option<&ArrowOpts>,
) -> ArrowDescriptor {
    compute_box_arrow(x0, y0, 0.0, 0.0, x1, y1, 0.0, 0.0, opts)
}

/// Connector from box `(x0, y0, w0, h0)` to box `(x1, y1, w1, h1)`.
///
/// Boxes are given by their top-left corner and size.
#[allow(clippy::too_many_arguments)]
pub fn compute_box_arrow(
    x0: f64,
    y0: f64,
    w0: f64,
    h0: f64,
    x1: f64,
    y1: f64,
    w1: f64,
    h1: f64,
    opts: Option<&ArrowOpts>,
) -> ArrowDescriptor {
    let defaults = ArrowOpts::default();
    arrow_between(
        rect_from_xywh(x0, y0, w0, h0),
        rect_from_xywh(x1, y1, w1, h1),
        opts.unwrap_or(&defaults),
    )
}

/// Connector between two rectangles.
///
/// Options are used as given; call [`ArrowOpts::validate`] first when they
/// come from untrusted input.
#[tracing::instrument(level = "trace", skip(opts))]
pub fn arrow_between(start: Rect, end: Rect, opts: &ArrowOpts) -> ArrowDescriptor {
    let from = SearchEnd {
        rect: start,
        anchors: Anchors::around(start, opts.pad_start),
        allowed: opts.allowed_start_sides,
    };
    let to = SearchEnd {
        rect: end,
        anchors: Anchors::around(end, opts.pad_end),
        allowed: opts.allowed_end_sides,
    };
    let choice = select_sides(&from, &to, opts.side_strategy);

    let stretch = opts.effective_stretch();
    ArrowDescriptor {
        start: choice.start,
        control_start: control_point(choice.start, choice.end, choice.start_side, stretch),
        control_end: control_point(choice.end, choice.start, choice.end_side, stretch),
        end: choice.end,
        start_angle: choice.start_side.angle(),
        end_angle: choice.end_side.angle(),
        start_side: choice.start_side,
        end_side: choice.end_side,
    }
}

/// A connector endpoint: a point, or a box when a size is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Box width; zero for a point.
    #[serde(default)]
    pub width: f64,
    /// Box height; zero for a point.
    #[serde(default)]
    pub height: f64,
}

impl Endpoint {
    /// A zero-size endpoint.
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }

    /// A box endpoint.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The endpoint as a rectangle.
    pub fn to_rect(self) -> Rect {
        rect_from_xywh(self.x, self.y, self.width, self.height)
    }

    fn validate(&self, which: &str) -> ArrowResult<()> {
        for (name, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() {
                return Err(ArrowError::validation(format!(
                    "{which}.{name} must be finite"
                )));
            }
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ArrowError::validation(format!(
                    "{which}.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Serializable connector request for front ends that talk JSON.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowRequest {
    /// Where the connector starts.
    pub start: Endpoint,
    /// Where the connector ends.
    pub end: Endpoint,
    /// Options; omitted fields take their defaults.
    #[serde(default)]
    pub opts: ArrowOpts,
}

impl ArrowRequest {
    /// Request with default options.
    pub fn new(start: Endpoint, end: Endpoint) -> Self {
        Self {
            start,
            end,
            opts: ArrowOpts::default(),
        }
    }

    /// Parse a request from JSON and validate it.
    pub fn from_json(s: &str) -> ArrowResult<Self> {
        let req: Self = serde_json::from_str(s)?;
        req.validate()?;
        Ok(req)
    }

    /// Check both endpoints and the options.
    pub fn validate(&self) -> ArrowResult<()> {
        self.start.validate("start")?;
        self.end.validate("end")?;
        self.opts.validate()
    }

    /// Validate, then compute the connector.
    pub fn compute(&self) -> ArrowResult<ArrowDescriptor> {
        self.validate()?;
        Ok(arrow_between(
            self.start.to_rect(),
            self.end.to_rect(),
            &self.opts,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrow/compute.rs"]
mod tests;

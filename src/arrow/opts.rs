use crate::{
    foundation::core::{RectSide, SideSet},
    foundation::error::{ArrowError, ArrowResult},
    route::control::DEFAULT_CONTROL_POINT_STRETCH,
    route::select::SideStrategy,
};

/// Options controlling anchor placement, curve shape and side selection.
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```
/// let opts = carrows::ArrowOpts::from_json(r#"{ "pad_end": 4.0 }"#).unwrap();
/// assert_eq!(opts.pad_end, 4.0);
/// assert_eq!(opts.control_point_stretch, 50.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArrowOpts {
    /// Outward offset of the start anchors (applied doubled).
    pub pad_start: f64,
    /// Outward offset of the end anchors (applied doubled).
    pub pad_end: f64,
    /// Minimum outward distance from anchor to control point. `0` means 50.
    pub control_point_stretch: f64,
    /// Sides the connector may leave from; empty means all.
    pub allowed_start_sides: SideSet,
    /// Sides the connector may arrive at; empty means all.
    pub allowed_end_sides: SideSet,
    /// Ranking of admissible side pairs.
    pub side_strategy: SideStrategy,
}

impl Default for ArrowOpts {
    fn default() -> Self {
        Self {
            pad_start: 0.0,
            pad_end: 0.0,
            control_point_stretch: DEFAULT_CONTROL_POINT_STRETCH,
            allowed_start_sides: SideSet::ALL,
            allowed_end_sides: SideSet::ALL,
            side_strategy: SideStrategy::FirstAdmissible,
        }
    }
}

impl ArrowOpts {
    /// Start a validated options builder from the defaults.
    pub fn builder() -> ArrowOptsBuilder {
        ArrowOptsBuilder {
            opts: Self::default(),
        }
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(s: &str) -> ArrowResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check that paddings and stretch are finite and non-negative.
    pub fn validate(&self) -> ArrowResult<()> {
        for (name, value) in [
            ("pad_start", self.pad_start),
            ("pad_end", self.pad_end),
            ("control_point_stretch", self.control_point_stretch),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ArrowError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Stretch with the zero sentinel resolved.
    pub fn effective_stretch(&self) -> f64 {
        if self.control_point_stretch == 0.0 {
            DEFAULT_CONTROL_POINT_STRETCH
        } else {
            self.control_point_stretch
        }
    }
}

/// Builder for [`ArrowOpts`]; [`ArrowOptsBuilder::build`] validates.
#[derive(Clone, Debug)]
pub struct ArrowOptsBuilder {
    opts: ArrowOpts,
}

impl ArrowOptsBuilder {
    /// Set the start padding.
    pub fn pad_start(mut self, pad: f64) -> Self {
        self.opts.pad_start = pad;
        self
    }

    /// Set the end padding.
    pub fn pad_end(mut self, pad: f64) -> Self {
        self.opts.pad_end = pad;
        self
    }

    /// Set both paddings.
    pub fn pad(self, pad: f64) -> Self {
        self.pad_start(pad).pad_end(pad)
    }

    /// Set the control point stretch.
    pub fn control_point_stretch(mut self, stretch: f64) -> Self {
        self.opts.control_point_stretch = stretch;
        self
    }

    /// Restrict the start sides.
    ///
    /// The order of `sides` is ignored; the search always visits sides in
    /// [`RectSide::ALL`] order, and duplicates collapse.
    pub fn start_sides(mut self, sides: impl IntoIterator<Item = RectSide>) -> Self {
        self.opts.allowed_start_sides = sides.into_iter().collect();
        self
    }

    /// Restrict the end sides.
    ///
    /// The order of `sides` is ignored, as for
    /// [`ArrowOptsBuilder::start_sides`].
    pub fn end_sides(mut self, sides: impl IntoIterator<Item = RectSide>) -> Self {
        self.opts.allowed_end_sides = sides.into_iter().collect();
        self
    }

    /// Choose how admissible side pairs are ranked.
    pub fn side_strategy(mut self, strategy: SideStrategy) -> Self {
        self.opts.side_strategy = strategy;
        self
    }

    /// Validate and return the options.
    pub fn build(self) -> ArrowResult<ArrowOpts> {
        self.opts.validate()?;
        Ok(self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arrow/opts.rs"]
mod tests;

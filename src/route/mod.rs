//! Anchor placement, side selection and control-point math.

pub(crate) mod anchor;
pub(crate) mod control;
pub(crate) mod select;

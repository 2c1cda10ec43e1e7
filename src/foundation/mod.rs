//! Geometry primitives and the error taxonomy shared by every layer.

pub(crate) mod core;
pub(crate) mod error;

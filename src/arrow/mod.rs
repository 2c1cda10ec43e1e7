//! Options, entry points and the output record.

pub(crate) mod compute;
pub(crate) mod descriptor;
pub(crate) mod opts;

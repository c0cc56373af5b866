//! Command implementations

pub(crate) mod common;
pub(crate) mod deploy;

//! Miscellaneous items.

pub mod log;

//! Dataset retrieval modules.

pub mod dataset;

pub use dataset::*;

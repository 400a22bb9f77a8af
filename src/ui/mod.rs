//! Terminal presentation of scan and build results

pub mod display;

pub use display::{display_build_summary, display_descriptors, display_rewrite_summary};

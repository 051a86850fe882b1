//! CLI library components for the nutrition screening tool.

pub mod logging;
pub mod pipeline;
pub mod types;

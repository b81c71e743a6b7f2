//! CLI library components for the sales data cleaner.

pub mod logging;
pub mod pipeline;

//! CLI library components for the salary guide.

pub mod browse;
pub mod config;
pub mod logging;
pub mod render;

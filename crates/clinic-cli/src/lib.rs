//! CLI library components for the clinic tool.

pub mod config;
pub mod logging;
pub mod summary;

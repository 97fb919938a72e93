//! Shared utilities
//!
//! Small helpers used across commands and the pipeline.

pub mod fs;

//! Command implementations

pub mod build;
pub mod clean;
pub mod completions;
mod helpers;
pub mod version;

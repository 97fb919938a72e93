//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::error::{Result, StagehandError};

/// Resolve the workspace root from the global `--workspace` flag, defaulting
/// to the current directory, and verify it exists
pub fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let root = match workspace {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(StagehandError::WorkspaceNotFound {
            path: root.display().to_string(),
        });
    }

    Ok(root)
}

//! Clean command implementation

use std::path::PathBuf;

use crate::config::Manifest;
use crate::error::Result;
use crate::pipeline::{BuildOptions, Orchestrator};

use super::helpers;

/// Remove the build output directory
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let root = helpers::resolve_workspace(workspace)?;
    let manifest = Manifest::load(&root)?;
    let orchestrator = Orchestrator::new(root, manifest, BuildOptions::default());

    let output_dir = orchestrator.output_dir();
    if orchestrator.remove_output_dir()? {
        println!("Removed {}", output_dir.display());
    } else {
        println!("Nothing to clean.");
    }

    Ok(())
}

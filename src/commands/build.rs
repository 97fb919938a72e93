//! Build command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::BuildArgs;
use crate::config::Manifest;
use crate::error::Result;
use crate::pipeline::{BuildOptions, Orchestrator};
use crate::ui::{InteractiveStepReporter, SilentStepReporter, StepReporter};

use super::helpers;

/// Run the full build pipeline
pub fn run(workspace: Option<PathBuf>, verbose: bool, args: BuildArgs) -> Result<()> {
    let root = helpers::resolve_workspace(workspace)?;
    let manifest = Manifest::load(&root)?;

    let orchestrator = Orchestrator::new(
        root,
        manifest,
        BuildOptions {
            verbose,
            skip_install: args.skip_install,
        },
    );

    // Progress bars would interleave with streamed subprocess output
    let mut reporter: Box<dyn StepReporter> = if verbose {
        Box::new(SilentStepReporter)
    } else {
        Box::new(InteractiveStepReporter::new())
    };

    match orchestrator.run(reporter.as_mut()) {
        Ok(()) => {
            println!(
                "{} {}",
                Style::new().bold().green().apply_to("Build complete:"),
                orchestrator.output_dir().display()
            );
            Ok(())
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}

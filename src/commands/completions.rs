//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions for the shell selected on the command line
///
/// Unknown shells never reach this point: `--shell` is a clap value-enum, so
/// parsing rejects them with a usage error.
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "stagehand", &mut std::io::stdout().lock());

    Ok(())
}

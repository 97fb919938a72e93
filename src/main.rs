//! Stagehand - build pipeline orchestrator
//!
//! A command line tool that builds split backend/frontend web projects in one
//! deterministic pass: wipe the output directory, compile the backend into it,
//! install and build the frontend, then stage the frontend's distribution tree
//! under the output directory.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod pipeline;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.workspace, cli.verbose, args),
        Commands::Clean => commands::clean::run(cli.workspace),
        Commands::Version(args) => commands::version::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(output) = e.captured_output() {
            if !output.trim().is_empty() {
                eprintln!("{}", output.trim_end());
            }
        }
        std::process::exit(1);
    }
}

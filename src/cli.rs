//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Stagehand - build pipeline orchestrator
///
/// Build split backend/frontend web projects in one deterministic pass.
#[derive(Parser, Debug)]
#[command(
    name = "stagehand",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build pipeline orchestrator for split backend/frontend projects",
    long_about = "Stagehand wipes the build output directory, compiles the backend binary \
                  into it, installs and builds the frontend, and stages the frontend's \
                  distribution tree under the output directory. Steps run strictly in \
                  sequence and the first failure aborts the run.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  stagehand build\n    \
                  stagehand build --skip-install\n    \
                  stagehand clean\n    \
                  stagehand build -w path/to/project\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/stagehand-build/stagehand"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Stream subprocess output instead of capturing it
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full build pipeline
    Build(BuildArgs),

    /// Remove the build output directory
    Clean,

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Full pipeline (clean, backend, frontend, stage):\n    stagehand build\n\n\
                  Skip the dependency install step:\n    stagehand build --skip-install\n\n\
                  Build a project elsewhere:\n    stagehand build -w path/to/project\n\n\
                  Stream compiler and package manager output:\n    stagehand build -v")]
pub struct BuildArgs {
    /// Skip the frontend dependency install step
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the version command
#[derive(Parser, Debug)]
pub struct VersionArgs {
    /// Emit version information as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    stagehand completions --shell bash > ~/.bash_completion.d/stagehand\n\n\
                  Generate zsh completions:\n    stagehand completions --shell zsh > ~/.zfunc/_stagehand\n\n\
                  Generate fish completions:\n    stagehand completions --shell fish > ~/.config/fish/completions/stagehand.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_build() {
        let cli = Cli::try_parse_from(["stagehand", "build"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert!(!args.skip_install);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_build_skip_install() {
        let cli = Cli::try_parse_from(["stagehand", "build", "--skip-install"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert!(args.skip_install);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_clean() {
        let cli = Cli::try_parse_from(["stagehand", "clean"]).unwrap();
        assert!(matches!(cli.command, Commands::Clean));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["stagehand", "version"]).unwrap();
        match cli.command {
            Commands::Version(args) => {
                assert!(!args.json);
            }
            _ => panic!("Expected Version command"),
        }
    }

    #[test]
    fn test_cli_parsing_version_json() {
        let cli = Cli::try_parse_from(["stagehand", "version", "--json"]).unwrap();
        match cli.command {
            Commands::Version(args) => {
                assert!(args.json);
            }
            _ => panic!("Expected Version command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["stagehand", "-v", "-w", "/tmp/project", "build"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["stagehand", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, Shell::Zsh);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["stagehand", "completions", "--shell", "csh"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["stagehand", "deploy"]).is_err());
    }
}

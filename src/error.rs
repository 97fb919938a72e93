//! Error types and handling for Stagehand
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Stagehand operations
#[derive(Error, Diagnostic, Debug)]
pub enum StagehandError {
    // Output directory errors
    #[error("Failed to remove stale output directory {path}: {reason}")]
    #[diagnostic(
        code(stagehand::output::cleanup_failed),
        help("Check permissions and close programs holding files open under the output directory")
    )]
    CleanupFailed { path: String, reason: String },

    #[error("Failed to create output directory {path}: {reason}")]
    #[diagnostic(
        code(stagehand::output::create_failed),
        help("Check that the workspace directory is writable")
    )]
    DirectoryCreationFailed { path: String, reason: String },

    // Backend errors
    #[error("Backend compile failed with exit code {code}")]
    #[diagnostic(code(stagehand::backend::compile_failed))]
    CompileFailed { code: i32, output: String },

    // Frontend errors
    #[error("Frontend directory not found: {path}")]
    #[diagnostic(
        code(stagehand::frontend::dir_not_found),
        help("Check frontend.dir in stagehand.yaml and that it exists under the workspace")
    )]
    FrontendDirNotFound { path: String },

    #[error("Frontend dependency install failed with exit code {code}")]
    #[diagnostic(code(stagehand::frontend::install_failed))]
    DependencyInstallFailed { code: i32, output: String },

    #[error("Frontend build failed with exit code {code}")]
    #[diagnostic(code(stagehand::frontend::build_failed))]
    FrontendBuildFailed { code: i32, output: String },

    // Artifact staging errors
    #[error("Failed to stage frontend artifacts: {message}")]
    #[diagnostic(
        code(stagehand::artifact::copy_failed),
        help("Check that the frontend build produced its distribution directory")
    )]
    ArtifactCopyFailed { message: String },

    // Tool invocation errors
    #[error("Failed to run '{tool}': {reason}")]
    #[diagnostic(
        code(stagehand::exec::tool_not_found),
        help("Check that the tool is installed and on PATH")
    )]
    ToolNotFound { tool: String, reason: String },

    // Workspace errors
    #[error("Workspace directory not found: {path}")]
    #[diagnostic(code(stagehand::workspace::not_found))]
    WorkspaceNotFound { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(stagehand::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(stagehand::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(stagehand::fs::io_error))]
    IoError { message: String },
}

impl StagehandError {
    /// Captured subprocess output for step failures, if any was recorded.
    ///
    /// Empty under `--verbose`, where the child's streams go straight to the
    /// terminal.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            StagehandError::CompileFailed { output, .. }
            | StagehandError::DependencyInstallFailed { output, .. }
            | StagehandError::FrontendBuildFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StagehandError {
    fn from(err: std::io::Error) -> Self {
        StagehandError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StagehandError>;

//! Scoped subprocess invocation
//!
//! Every tool the pipeline runs goes through [`run_tool`]: spawn with an
//! explicit working directory, block until the child exits, and reap it on
//! every path. The orchestrator never mutates its own working directory.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, StagehandError};

/// How the child's stdout/stderr are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Capture both streams so failures can carry the child's output
    Capture,
    /// Inherit the parent's streams (verbose mode)
    Inherit,
}

/// Result of a completed (reaped) tool invocation
#[derive(Debug)]
pub enum ExecOutcome {
    Success,
    /// Non-zero exit. `output` is empty in [`OutputMode::Inherit`].
    Failed { code: i32, output: String },
}

/// Run a tool to completion in `cwd`
///
/// `Err` only for spawn failures (tool missing from PATH, unreadable, ...);
/// a child that runs and exits non-zero is an `Ok(ExecOutcome::Failed)` so
/// callers can attach their step-specific error.
pub fn run_tool<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    cwd: &Path,
    mode: OutputMode,
) -> Result<ExecOutcome> {
    let mut command = Command::new(program);
    command.args(args).current_dir(cwd);

    match mode {
        OutputMode::Inherit => {
            let status = command.status().map_err(|e| spawn_error(program, &e))?;
            if status.success() {
                Ok(ExecOutcome::Success)
            } else {
                Ok(ExecOutcome::Failed {
                    code: status.code().unwrap_or(-1),
                    output: String::new(),
                })
            }
        }
        OutputMode::Capture => {
            let output = command
                .stdin(Stdio::null())
                .output()
                .map_err(|e| spawn_error(program, &e))?;
            if output.status.success() {
                Ok(ExecOutcome::Success)
            } else {
                Ok(ExecOutcome::Failed {
                    code: output.status.code().unwrap_or(-1),
                    output: combine_streams(&output.stdout, &output.stderr),
                })
            }
        }
    }
}

fn spawn_error(program: &str, err: &std::io::Error) -> StagehandError {
    StagehandError::ToolNotFound {
        tool: program.to_string(),
        reason: err.to_string(),
    }
}

fn combine_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&String::from_utf8_lossy(stderr));
    }
    combined
}

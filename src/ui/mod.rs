//! UI/Progress presentation layer
//!
//! Pipeline progress goes through the StepReporter trait so the command layer
//! can pick a presentation: styled step lines with an indicatif bar for the
//! artifact copy, or a silent implementation for verbose mode (where bars
//! would interleave with streamed subprocess output) and for tests.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for pipeline runs
pub trait StepReporter {
    /// Announce a pipeline step about to run
    fn step(&mut self, action: &str, detail: &str);

    /// Initialize artifact-copy progress with the total file count
    fn begin_copy(&mut self, total_files: u64);

    /// Record one copied file
    fn copy_file(&mut self, file_path: &str);

    /// Finish artifact-copy progress
    fn finish_copy(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive reporter with styled step lines and a copy progress bar
pub struct InteractiveStepReporter {
    copy_pb: Option<ProgressBar>,
}

impl InteractiveStepReporter {
    pub fn new() -> Self {
        Self { copy_pb: None }
    }
}

impl Default for InteractiveStepReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepReporter for InteractiveStepReporter {
    fn step(&mut self, action: &str, detail: &str) {
        println!(
            "{} {}",
            Style::new().bold().cyan().apply_to(action),
            Style::new().dim().apply_to(detail)
        );
    }

    fn begin_copy(&mut self, total_files: u64) {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        self.copy_pb = Some(pb);
    }

    fn copy_file(&mut self, file_path: &str) {
        if let Some(ref pb) = self.copy_pb {
            pb.set_message(truncate_path(file_path, 50));
            pb.inc(1);
        }
    }

    fn finish_copy(&mut self) {
        if let Some(ref pb) = self.copy_pb {
            pb.finish_with_message("done");
        }
    }

    fn abandon(&mut self) {
        if let Some(ref pb) = self.copy_pb {
            pb.abandon();
        }
    }
}

/// Truncate a long path for display, keeping its tail
///
/// Operates on characters, not bytes, so multibyte file names stay intact.
fn truncate_path(path: &str, max_chars: usize) -> String {
    if path.chars().count() <= max_chars {
        return path.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let start = path
        .char_indices()
        .rev()
        .nth(keep.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("...{}", &path[start..])
}

/// Silent reporter for verbose mode and tests
#[derive(Default)]
pub struct SilentStepReporter;

impl StepReporter for SilentStepReporter {
    fn step(&mut self, _action: &str, _detail: &str) {
        // No-op for silent mode
    }

    fn begin_copy(&mut self, _total_files: u64) {
        // No-op for silent mode
    }

    fn copy_file(&mut self, _file_path: &str) {
        // No-op for silent mode
    }

    fn finish_copy(&mut self) {
        // No-op for silent mode
    }

    fn abandon(&mut self) {
        // No-op for silent mode
    }
}

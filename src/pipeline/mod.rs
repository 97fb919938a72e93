//! The build pipeline
//!
//! [`Orchestrator::run`] executes the whole pipeline in strict sequence:
//!
//! 1. remove the output directory if it exists
//! 2. recreate it
//! 3. compile the backend into it
//! 4. check the frontend directory exists
//! 5. install frontend dependencies
//! 6. run the frontend build script
//! 7. copy the frontend distribution tree to `<output_dir>/<static_subdir>`
//!
//! The first failing step aborts the run. There are no retries and no
//! rollback: artifacts written by earlier steps stay on disk.

pub mod exec;

use std::ffi::OsString;
use std::path::PathBuf;

use crate::common;
use crate::config::Manifest;
use crate::error::{Result, StagehandError};
use crate::ui::StepReporter;

use exec::{ExecOutcome, OutputMode};

/// Options affecting how a pipeline run executes
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Stream subprocess output instead of capturing it
    pub verbose: bool,
    /// Skip the frontend dependency install step
    pub skip_install: bool,
}

/// Runs the build pipeline against one workspace
pub struct Orchestrator {
    workspace_root: PathBuf,
    manifest: Manifest,
    options: BuildOptions,
}

impl Orchestrator {
    pub fn new(workspace_root: PathBuf, manifest: Manifest, options: BuildOptions) -> Self {
        Self {
            workspace_root,
            manifest,
            options,
        }
    }

    /// Absolute path of the output directory
    pub fn output_dir(&self) -> PathBuf {
        self.workspace_root.join(&self.manifest.output_dir)
    }

    /// Run the full pipeline
    pub fn run(&self, reporter: &mut dyn StepReporter) -> Result<()> {
        self.prepare_output_dir()?;
        self.compile_backend(reporter)?;
        self.build_frontend(reporter)?;
        self.stage_frontend_dist(reporter)?;
        Ok(())
    }

    /// Remove the output directory if it exists (`stagehand clean`)
    pub fn remove_output_dir(&self) -> Result<bool> {
        let out = self.output_dir();
        if !out.exists() {
            return Ok(false);
        }
        std::fs::remove_dir_all(&out).map_err(|e| StagehandError::CleanupFailed {
            path: out.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(true)
    }

    /// Steps 1+2: guarantee a clean output directory before anything builds
    fn prepare_output_dir(&self) -> Result<()> {
        self.remove_output_dir()?;
        let out = self.output_dir();
        std::fs::create_dir_all(&out).map_err(|e| StagehandError::DirectoryCreationFailed {
            path: out.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Step 3: `<compiler> build -o <output_dir> <extra_args...> <entry>`
    fn compile_backend(&self, reporter: &mut dyn StepReporter) -> Result<()> {
        let backend = &self.manifest.backend;
        reporter.step("Compiling backend", &backend.entry.display().to_string());

        let mut args: Vec<OsString> = vec![
            OsString::from("build"),
            OsString::from("-o"),
            self.output_dir().into_os_string(),
        ];
        args.extend(backend.extra_args.iter().map(OsString::from));
        args.push(backend.entry.clone().into_os_string());

        match exec::run_tool(
            &backend.compiler,
            &args,
            &self.workspace_root,
            self.output_mode(),
        )? {
            ExecOutcome::Success => Ok(()),
            ExecOutcome::Failed { code, output } => {
                Err(StagehandError::CompileFailed { code, output })
            }
        }
    }

    /// Steps 4-6: install and build the frontend in its own directory
    ///
    /// The frontend directory is passed as the subprocess working directory;
    /// the orchestrator's own working directory never changes.
    fn build_frontend(&self, reporter: &mut dyn StepReporter) -> Result<()> {
        let frontend = &self.manifest.frontend;
        let dir = self.workspace_root.join(&frontend.dir);
        if !dir.is_dir() {
            return Err(StagehandError::FrontendDirNotFound {
                path: dir.display().to_string(),
            });
        }

        if !self.options.skip_install {
            reporter.step("Installing frontend dependencies", &frontend.package_manager);
            match exec::run_tool(
                &frontend.package_manager,
                &["install"],
                &dir,
                self.output_mode(),
            )? {
                ExecOutcome::Success => {}
                ExecOutcome::Failed { code, output } => {
                    return Err(StagehandError::DependencyInstallFailed { code, output });
                }
            }
        }

        reporter.step("Building frontend", &frontend.build_script);
        match exec::run_tool(
            &frontend.package_manager,
            &["run", frontend.build_script.as_str()],
            &dir,
            self.output_mode(),
        )? {
            ExecOutcome::Success => Ok(()),
            ExecOutcome::Failed { code, output } => {
                Err(StagehandError::FrontendBuildFailed { code, output })
            }
        }
    }

    /// Step 7: copy the distribution tree to `<output_dir>/<static_subdir>`
    fn stage_frontend_dist(&self, reporter: &mut dyn StepReporter) -> Result<()> {
        let frontend = &self.manifest.frontend;
        let dist = self
            .workspace_root
            .join(&frontend.dir)
            .join(&frontend.dist_dir);
        if !dist.is_dir() {
            return Err(StagehandError::ArtifactCopyFailed {
                message: format!("distribution directory not found: {}", dist.display()),
            });
        }

        let target = self.output_dir().join(&self.manifest.static_subdir);
        reporter.step("Staging frontend artifacts", &target.display().to_string());
        reporter.begin_copy(common::fs::count_files(&dist));

        let mut on_file = |path: &std::path::Path| {
            reporter.copy_file(&path.display().to_string());
        };
        common::fs::copy_dir_recursive(&dist, &target, &mut on_file).map_err(|e| {
            StagehandError::ArtifactCopyFailed {
                message: e.to_string(),
            }
        })?;

        reporter.finish_copy();
        Ok(())
    }

    fn output_mode(&self) -> OutputMode {
        if self.options.verbose {
            OutputMode::Inherit
        } else {
            OutputMode::Capture
        }
    }
}

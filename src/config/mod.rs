//! Build manifest loading (`stagehand.yaml`)
//!
//! The manifest is optional: every field defaults to the conventional layout
//! (`go build -o build/ main.go`, `npm install` / `npm run build` in
//! `frontend/`, distribution tree staged to `build/static`). A missing file
//! means "use the defaults"; an unreadable or malformed file is an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, StagehandError};

/// Manifest file name, looked up at the workspace root
pub const MANIFEST_FILE: &str = "stagehand.yaml";

/// Top-level build manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory, wiped and recreated on every build
    pub output_dir: PathBuf,

    /// Subdirectory of the output directory receiving the frontend copy
    pub static_subdir: PathBuf,

    pub backend: BackendConfig,
    pub frontend: FrontendConfig,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("build"),
            static_subdir: PathBuf::from("static"),
            backend: BackendConfig::default(),
            frontend: FrontendConfig::default(),
        }
    }
}

/// Backend compile step configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Compiler executable, invoked as `<compiler> build -o <output_dir> <entry>`
    pub compiler: String,

    /// Entry source file, relative to the workspace root
    pub entry: PathBuf,

    /// Extra arguments inserted before the entry file
    pub extra_args: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            compiler: "go".to_string(),
            entry: PathBuf::from("main.go"),
            extra_args: Vec::new(),
        }
    }
}

/// Frontend install/build step configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Frontend project directory, relative to the workspace root
    pub dir: PathBuf,

    /// Package manager executable, invoked as `install` then `run <script>`
    pub package_manager: String,

    /// Named build script passed to `run`
    pub build_script: String,

    /// Distribution directory produced by the build, relative to `dir`
    pub dist_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("frontend"),
            package_manager: "npm".to_string(),
            build_script: "build".to_string(),
            dist_dir: PathBuf::from("dist"),
        }
    }
}

impl Manifest {
    /// Load the manifest from the workspace root, falling back to defaults
    /// when no manifest file exists
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| StagehandError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| StagehandError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

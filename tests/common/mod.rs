//! Common test utilities for Stagehand integration tests
//!
//! Pipeline tests run the real binary against stub toolchains: small shell
//! scripts standing in for the backend compiler and the frontend package
//! manager. Every stub appends its name and arguments to `invocations.log`
//! in the workspace, so tests can assert sequencing and short-circuiting.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Entry names directly under a workspace directory, sorted
    pub fn dir_entries(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|entry| entry.expect("Failed to read entry").file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Everything the stub tools logged, or empty if nothing ran
    pub fn invocation_log(&self) -> String {
        std::fs::read_to_string(self.path.join("invocations.log")).unwrap_or_default()
    }

    /// Write an executable stub tool that logs its invocation, then runs `body`
    #[cfg(unix)]
    pub fn stub_tool(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path.join("stubs");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create stubs directory");
        let tool_path = bin_dir.join(name);
        let log_path = self.path.join("invocations.log");

        let script = format!(
            "#!/bin/sh\necho \"{} $@\" >> \"{}\"\n{}\n",
            name,
            log_path.display(),
            body
        );
        std::fs::write(&tool_path, script).expect("Failed to write stub tool");

        let mut perms = std::fs::metadata(&tool_path)
            .expect("Failed to stat stub tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&tool_path, perms).expect("Failed to chmod stub tool");

        tool_path
    }

    /// Stub compiler mimicking `go build -o <dir> <entry>`: drops a fixed
    /// binary into the output directory given as its third argument
    #[cfg(unix)]
    pub fn stub_compiler(&self) -> PathBuf {
        self.stub_tool("fakecc", "printf 'ELF' > \"$3/server\"\nexit 0")
    }

    /// Stub package manager: `install` succeeds, `run <script>` writes a
    /// distribution tree into `dist/` relative to its working directory
    #[cfg(unix)]
    pub fn stub_package_manager(&self) -> PathBuf {
        self.stub_tool(
            "fakepm",
            "if [ \"$1\" = \"run\" ]; then\n  mkdir -p dist/assets\n  printf '<html>' > dist/index.html\n  printf 'app' > dist/assets/app.js\nfi\nexit 0",
        )
    }

    /// Write a manifest pointing the pipeline at the given stub tools
    pub fn write_manifest_for(&self, compiler: &Path, package_manager: &Path) {
        let yaml = format!(
            "backend:\n  compiler: {}\n  entry: main.src\nfrontend:\n  package_manager: {}\n",
            compiler.display(),
            package_manager.display()
        );
        self.write_file("stagehand.yaml", &yaml);
    }

    /// Create the conventional frontend directory
    pub fn create_frontend_dir(&self) {
        self.write_file("frontend/package.json", "{}");
    }
}

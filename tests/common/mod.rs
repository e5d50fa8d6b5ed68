//! Shared testing utilities for dila CLI tests.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the default workspace working directory.
    pub fn workspace_dir(&self) -> PathBuf {
        self.work_dir.join(".agent/dila")
    }

    /// Build a command for invoking the compiled `dila` binary within the
    /// default work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dila").expect("Failed to locate dila binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a file under the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Snapshot the workspace tree as relative-path -> file content.
    ///
    /// Directories appear with an empty marker so layout differences are
    /// visible even for empty directories.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let mut snapshot = BTreeMap::new();
        collect(&self.workspace_dir(), &self.workspace_dir(), &mut snapshot);
        snapshot
    }
}

#[allow(dead_code)]
fn collect(root: &Path, dir: &Path, snapshot: &mut BTreeMap<String, String>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();
        let relative =
            path.strip_prefix(root).expect("entry under root").to_string_lossy().into_owned();
        if path.is_dir() {
            snapshot.insert(format!("{relative}/"), String::new());
            collect(root, &path, snapshot);
        } else {
            let content = fs::read_to_string(&path).expect("Failed to read file");
            snapshot.insert(relative, content);
        }
    }
}

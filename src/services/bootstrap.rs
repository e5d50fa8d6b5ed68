//! Bootstrap config file creation and reload.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{WorkspaceConfig, WorkspaceError};
use crate::services::{directories, fs_atomic};

/// Config subdirectory under the working directory.
pub const CONFIG_DIR: &str = "config";

/// Canonical bootstrap file name.
pub const CONFIG_FILE: &str = "app.yml";

#[derive(Debug, Serialize, Deserialize)]
struct BootstrapFile {
    working_dir: String,
    app_prompt: BaseDirSection,
    app_schema: BaseDirSection,
}

#[derive(Debug, Serialize, Deserialize)]
struct BaseDirSection {
    base_dir: String,
}

/// Writes the default bootstrap config on first initialization and reads it
/// back on reload.
#[derive(Debug, Clone)]
pub struct ConfigBootstrapper {
    working_dir: PathBuf,
}

impl ConfigBootstrapper {
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Canonical path of the bootstrap file for this workspace.
    pub fn bootstrap_path(&self) -> PathBuf {
        self.working_dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Serialize `config` to the bootstrap file unless it already exists.
    ///
    /// Returns `Ok(true)` when the file was created by this call.
    pub fn bootstrap(&self, config: &WorkspaceConfig) -> Result<bool, WorkspaceError> {
        let path = self.bootstrap_path();
        if let Some(parent) = path.parent() {
            directories::ensure_dir(parent)?;
        }

        let document = BootstrapFile {
            working_dir: config.working_dir().to_string_lossy().into_owned(),
            app_prompt: BaseDirSection { base_dir: config.prompt_base_dir().to_string() },
            app_schema: BaseDirSection { base_dir: config.schema_base_dir().to_string() },
        };
        let yaml = serde_yaml::to_string(&document).map_err(|e| {
            WorkspaceError::config(format!("failed to serialize bootstrap config: {e}"))
        })?;

        fs_atomic::write_if_absent(&path, &yaml)
    }

    /// Read the bootstrap file back into a fresh [`WorkspaceConfig`].
    ///
    /// The working directory is preserved from this bootstrapper; only the
    /// base-dir fields are taken from the file.
    pub fn reload(&self) -> Result<WorkspaceConfig, WorkspaceError> {
        let path = self.bootstrap_path();
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                WorkspaceError::ConfigNotFound(path.clone())
            } else {
                WorkspaceError::from_io(&path, e)
            }
        })?;

        let document: BootstrapFile = serde_yaml::from_str(&content).map_err(|e| {
            WorkspaceError::config(format!("invalid bootstrap config {}: {e}", path.display()))
        })?;

        WorkspaceConfig::new(
            self.working_dir.clone(),
            document.app_prompt.base_dir,
            document.app_schema.base_dir,
        )
    }
}

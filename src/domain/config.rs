//! Workspace configuration value object.

use std::path::{Path, PathBuf};

use crate::domain::WorkspaceError;

/// Default prompt template base directory, relative to the working directory.
pub const DEFAULT_PROMPT_BASE_DIR: &str = "prompts";

/// Default schema base directory, relative to the working directory.
pub const DEFAULT_SCHEMA_BASE_DIR: &str = "schema";

/// Immutable workspace configuration.
///
/// Created once at orchestrator construction and replaced wholesale by
/// `reload_config`; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    working_dir: PathBuf,
    prompt_base_dir: String,
    schema_base_dir: String,
}

impl WorkspaceConfig {
    /// Create a configuration, validating every field.
    ///
    /// All fields must be non-empty; no component may be a parent-directory
    /// reference (`..`) or contain a home-expansion token (`~`).
    pub fn new(
        working_dir: PathBuf,
        prompt_base_dir: impl Into<String>,
        schema_base_dir: impl Into<String>,
    ) -> Result<Self, WorkspaceError> {
        let prompt_base_dir = prompt_base_dir.into();
        let schema_base_dir = schema_base_dir.into();

        check_working_dir(&working_dir)?;
        check_base_dir("app_prompt.base_dir", &prompt_base_dir)?;
        check_base_dir("app_schema.base_dir", &schema_base_dir)?;

        Ok(Self { working_dir, prompt_base_dir, schema_base_dir })
    }

    /// Create a configuration with the default base directories.
    pub fn with_defaults(working_dir: PathBuf) -> Result<Self, WorkspaceError> {
        Self::new(working_dir, DEFAULT_PROMPT_BASE_DIR, DEFAULT_SCHEMA_BASE_DIR)
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn prompt_base_dir(&self) -> &str {
        &self.prompt_base_dir
    }

    pub fn schema_base_dir(&self) -> &str {
        &self.schema_base_dir
    }
}

fn check_working_dir(working_dir: &Path) -> Result<(), WorkspaceError> {
    if working_dir.as_os_str().is_empty() {
        return Err(WorkspaceError::config("working_dir must not be empty"));
    }
    let text = working_dir.to_string_lossy();
    if text.contains('~') {
        return Err(WorkspaceError::config(format!(
            "working_dir must not contain a home-expansion token: {text}"
        )));
    }
    if working_dir.components().any(|c| c.as_os_str() == "..") {
        return Err(WorkspaceError::config(format!(
            "working_dir must not contain a parent-directory reference: {text}"
        )));
    }
    Ok(())
}

fn check_base_dir(field: &str, value: &str) -> Result<(), WorkspaceError> {
    if value.is_empty() {
        return Err(WorkspaceError::config(format!("{field} must not be empty")));
    }
    if value.contains('~') {
        return Err(WorkspaceError::config(format!(
            "{field} must not contain a home-expansion token: {value}"
        )));
    }
    if value.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(WorkspaceError::config(format!(
            "{field} must not contain a parent-directory reference: {value}"
        )));
    }
    Ok(())
}

//! Prompt rendering collaborator.
//!
//! The workspace core hands this module a resolved template path; it reads
//! the file and substitutes variables. No directive/layer validation
//! happens here.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use minijinja::Environment;

use crate::domain::WorkspaceError;

/// Render the template at `path` with the given variable map.
pub fn render_template(
    path: &Path,
    variables: &BTreeMap<String, String>,
) -> Result<String, WorkspaceError> {
    let template = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            WorkspaceError::NotFound(path.to_path_buf())
        } else {
            WorkspaceError::from_io(path, e)
        }
    })?;

    let env = Environment::new();
    env.render_str(&template, variables).map_err(|e| {
        WorkspaceError::config(format!("failed to render template {}: {e}", path.display()))
    })
}

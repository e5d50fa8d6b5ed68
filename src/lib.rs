//! dila: turn a directive + layer pair into a generated prompt from a
//! managed workspace.
//!
//! The workspace lives under a working directory (default `.agent/dila`)
//! with a fixed subdirectory layout, a YAML bootstrap config, and embedded
//! prompt/schema templates deployed on first `init`.

pub mod domain;
pub mod render;
pub mod services;
pub mod templates;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub use domain::{
    DirectoryStructureSpec, PathResolver, PathStrategy, PathViolation, StrategyKind,
    WorkspaceConfig, WorkspaceError,
};
pub use services::WorkspaceOrchestrator;

/// Default working directory, relative to the invocation directory.
pub const DEFAULT_WORKING_DIR: &str = ".agent/dila";

/// Initialize a dila workspace rooted at `working_dir`.
///
/// Idempotent: re-running against an initialized workspace changes nothing
/// and preserves user edits to deployed templates and config.
pub fn init(working_dir: &Path) -> Result<(), WorkspaceError> {
    let config = WorkspaceConfig::with_defaults(working_dir.to_path_buf())?;
    WorkspaceOrchestrator::new(config).initialize()
}

/// Generate a prompt for a directive + layer pair.
///
/// Reads the workspace config, resolves the template path through the
/// path-resolution strategy (so hostile directive/layer strings fail with a
/// `Path` error), and renders it with the standard variable map.
pub fn generate_prompt(
    working_dir: &Path,
    directive: &str,
    layer: &str,
    input: Option<&Path>,
    destination: Option<&Path>,
) -> Result<String, WorkspaceError> {
    let mut orchestrator = orchestrator_for(working_dir)?;
    orchestrator.reload_config()?;

    let relative = format!(
        "{}/{}/{}/f_{}.md",
        orchestrator.config().prompt_base_dir(),
        directive,
        layer,
        layer
    );
    let template_path = orchestrator.resolve_path(&relative)?;

    let mut variables = BTreeMap::new();
    match input {
        Some(input) => {
            let text =
                fs::read_to_string(input).map_err(|e| WorkspaceError::from_io(input, e))?;
            variables.insert("input_text".to_string(), text);
            variables.insert("input_text_file".to_string(), input.display().to_string());
        }
        None => {
            variables.insert("input_text".to_string(), String::new());
            variables.insert("input_text_file".to_string(), String::new());
        }
    }
    variables.insert(
        "destination_path".to_string(),
        destination.map(|p| p.display().to_string()).unwrap_or_default(),
    );

    render::render_template(&template_path, &variables)
}

/// Check that the workspace's working directory exists.
pub fn validate_config(working_dir: &Path) -> Result<(), WorkspaceError> {
    orchestrator_for(working_dir)?.validate_config()
}

/// Re-read the bootstrap config and return the resulting configuration.
pub fn reload_config(working_dir: &Path) -> Result<WorkspaceConfig, WorkspaceError> {
    let mut orchestrator = orchestrator_for(working_dir)?;
    orchestrator.reload_config()?;
    Ok(orchestrator.config().clone())
}

fn orchestrator_for(working_dir: &Path) -> Result<WorkspaceOrchestrator, WorkspaceError> {
    let config = WorkspaceConfig::with_defaults(working_dir.to_path_buf())?;
    Ok(WorkspaceOrchestrator::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_then_generate_renders_embedded_template() {
        let dir = TempDir::new().unwrap();
        let ws = dir.path().join("ws");
        init(&ws).unwrap();

        let input = dir.path().join("notes.md");
        fs::write(&input, "build a parser").unwrap();

        let prompt = generate_prompt(
            &ws,
            "to",
            "project",
            Some(&input),
            Some(Path::new("projects/parser.md")),
        )
        .unwrap();
        assert!(prompt.contains("build a parser"));
        assert!(prompt.contains("projects/parser.md"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn generate_requires_initialized_workspace() {
        let dir = TempDir::new().unwrap();
        let err = generate_prompt(&dir.path().join("ws"), "to", "project", None, None)
            .unwrap_err();
        assert!(matches!(err, WorkspaceError::ConfigNotFound(_)));
    }

    #[test]
    fn generate_rejects_traversal_in_directive() {
        let dir = TempDir::new().unwrap();
        let ws = dir.path().join("ws");
        init(&ws).unwrap();

        let err = generate_prompt(&ws, "..", "project", None, None).unwrap_err();
        assert!(matches!(err, WorkspaceError::Path { .. }));
    }

    #[test]
    fn unknown_layer_surfaces_as_not_found() {
        let dir = TempDir::new().unwrap();
        let ws = dir.path().join("ws");
        init(&ws).unwrap();

        let err = generate_prompt(&ws, "to", "epic", None, None).unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound(_)));
    }
}

//! The fixed workspace directory layout.

use crate::domain::paths::rules::{self, PlatformRules};
use crate::domain::{PathViolation, WorkspaceError};

/// Directories created under the working directory, in creation order.
pub const DEFAULT_DIRECTORIES: [&str; 7] =
    ["projects", "issues", "tasks", "temp", "config", "prompts", "schema"];

/// Ordered set of relative directory paths making up a workspace.
///
/// The default set is fixed at compile time; tests may inject a custom set
/// through [`DirectoryStructureSpec::new`], which re-validates every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStructureSpec {
    dirs: Vec<String>,
}

impl DirectoryStructureSpec {
    /// Build a spec from custom entries, validating each against the
    /// platform-agnostic path rules.
    pub fn new<I, S>(dirs: I) -> Result<Self, WorkspaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dirs: Vec<String> = dirs.into_iter().map(Into::into).collect();
        for dir in &dirs {
            check_entry(dir)?;
        }
        Ok(Self { dirs })
    }

    /// Iterate the relative directory paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl Default for DirectoryStructureSpec {
    fn default() -> Self {
        Self { dirs: DEFAULT_DIRECTORIES.iter().map(|d| d.to_string()).collect() }
    }
}

fn check_entry(dir: &str) -> Result<(), WorkspaceError> {
    let table: &PlatformRules = &rules::UNIX_RULES;
    let reason = if dir.is_empty() {
        Some(PathViolation::Empty)
    } else if rules::has_traversal_segment(dir, table) {
        Some(PathViolation::Traversal)
    } else if rules::has_doubled_separator(dir, table) {
        Some(PathViolation::DoubledSeparator)
    } else {
        rules::forbidden_character(dir, table).map(|c| {
            if c.is_control() {
                PathViolation::ControlCharacter
            } else {
                PathViolation::ForbiddenCharacter(c)
            }
        })
    };

    match reason {
        Some(reason) => Err(WorkspaceError::Path { path: dir.to_string(), reason }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_has_seven_directories() {
        let spec = DirectoryStructureSpec::default();
        assert_eq!(spec.len(), 7);
        let dirs: Vec<&str> = spec.iter().collect();
        assert_eq!(dirs, DEFAULT_DIRECTORIES);
    }

    #[test]
    fn custom_spec_preserves_order() {
        let spec = DirectoryStructureSpec::new(["alpha", "beta/nested"]).unwrap();
        let dirs: Vec<&str> = spec.iter().collect();
        assert_eq!(dirs, ["alpha", "beta/nested"]);
    }

    #[test]
    fn custom_spec_rejects_invalid_entries() {
        assert!(DirectoryStructureSpec::new([""]).is_err());
        assert!(DirectoryStructureSpec::new(["../escape"]).is_err());
        assert!(DirectoryStructureSpec::new(["a//b"]).is_err());
        assert!(DirectoryStructureSpec::new(["a\u{0001}b"]).is_err());
    }
}

//! Platform-aware path resolution strategies.
//!
//! One tagged enum covers all platform variants; each variant dispatches
//! into the shared validation tables in [`rules`] instead of duplicating
//! normalize/validate logic per platform.

use std::path::{Path, PathBuf};

use crate::domain::paths::rules::{self, PlatformRules, UNIX_RULES, WINDOWS_RULES};
use crate::domain::{PathViolation, WorkspaceError};

/// Platform variant of a [`PathStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Unix separators and character set; no base containment check.
    Unix,
    /// Windows separators and character set; no base containment check.
    Windows,
    /// Unix-style rules plus base-directory containment enforcement.
    Agnostic,
    /// Rules of the compile target plus base-directory containment.
    Default,
}

/// A path resolution strategy: one absolute base directory plus a platform
/// tag. Stateless beyond the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStrategy {
    kind: StrategyKind,
    base_dir: PathBuf,
}

impl PathStrategy {
    pub fn new(kind: StrategyKind, base_dir: impl Into<PathBuf>) -> Self {
        Self { kind, base_dir: base_dir.into() }
    }

    pub fn unix(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(StrategyKind::Unix, base_dir)
    }

    pub fn windows(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(StrategyKind::Windows, base_dir)
    }

    pub fn agnostic(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(StrategyKind::Agnostic, base_dir)
    }

    /// Strategy following the compile target's conventions.
    pub fn platform_default(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(StrategyKind::Default, base_dir)
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn table(&self) -> &'static PlatformRules {
        match self.kind {
            StrategyKind::Unix | StrategyKind::Agnostic => &UNIX_RULES,
            StrategyKind::Windows => &WINDOWS_RULES,
            StrategyKind::Default => {
                if cfg!(windows) {
                    &WINDOWS_RULES
                } else {
                    &UNIX_RULES
                }
            }
        }
    }

    fn enforces_containment(&self) -> bool {
        matches!(self.kind, StrategyKind::Agnostic | StrategyKind::Default)
    }

    /// Check `path` against the platform validity rules.
    ///
    /// Returns `Ok(false)` for any violation; errors are reserved for the
    /// operations that must produce a path.
    pub fn validate(&self, path: &str) -> Result<bool, WorkspaceError> {
        Ok(self.violation(path).is_none())
    }

    /// Convert `path` to the platform's canonical separator, collapsing
    /// duplicates. `..` segments pass through; rejecting them is
    /// [`PathStrategy::validate`]'s job.
    pub fn normalize(&self, path: &str) -> Result<String, WorkspaceError> {
        let table = self.table();
        if path.is_empty() {
            return Err(self.path_error(path, PathViolation::Empty));
        }
        if let Some(reason) = character_violation(path, table) {
            return Err(self.path_error(path, reason));
        }
        Ok(rules::canonicalize_separators(path, table))
    }

    /// Resolve `path` against the base directory: validate, normalize, join.
    ///
    /// The empty input resolves to the base directory unchanged. Variants
    /// with containment enforcement additionally require the result to stay
    /// a descendant of the base.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, WorkspaceError> {
        if path.is_empty() {
            return Ok(self.base_dir.clone());
        }
        if let Some(reason) = self.violation(path) {
            return Err(self.path_error(path, reason));
        }

        let table = self.table();
        let normalized = rules::canonicalize_separators(path, table);
        let resolved = if rules::is_absolute(&normalized, table) {
            PathBuf::from(&normalized)
        } else {
            let mut joined = trim_trailing_separators(&self.base_dir.to_string_lossy(), table);
            // A bare-root base keeps its separator after trimming.
            if !joined.ends_with(table.separator) {
                joined.push(table.separator);
            }
            joined.push_str(&normalized);
            PathBuf::from(joined)
        };

        if self.enforces_containment() && !self.is_descendant(&resolved) {
            return Err(self.path_error(path, PathViolation::OutsideBase));
        }

        Ok(resolved)
    }

    fn violation(&self, path: &str) -> Option<PathViolation> {
        let table = self.table();
        if path.is_empty() {
            return Some(PathViolation::Empty);
        }
        if rules::has_traversal_segment(path, table) {
            return Some(PathViolation::Traversal);
        }
        if rules::has_doubled_separator(path, table) {
            return Some(PathViolation::DoubledSeparator);
        }
        character_violation(path, table)
    }

    fn is_descendant(&self, candidate: &Path) -> bool {
        let table = self.table();
        let base = trim_trailing_separators(&self.base_dir.to_string_lossy(), table);
        let candidate = candidate.to_string_lossy();
        let (base, candidate) = if table.case_insensitive {
            (base.to_lowercase(), candidate.to_lowercase())
        } else {
            (base, candidate.into_owned())
        };

        if candidate == base {
            return true;
        }
        candidate
            .strip_prefix(&base)
            .is_some_and(|rest| rest.starts_with(table.separator))
    }

    fn path_error(&self, path: &str, reason: PathViolation) -> WorkspaceError {
        WorkspaceError::Path { path: path.to_string(), reason }
    }
}

fn character_violation(path: &str, table: &PlatformRules) -> Option<PathViolation> {
    rules::forbidden_character(path, table).map(|c| {
        if c.is_control() {
            PathViolation::ControlCharacter
        } else {
            PathViolation::ForbiddenCharacter(c)
        }
    })
}

fn trim_trailing_separators(path: &str, table: &PlatformRules) -> String {
    let trimmed = path
        .trim_end_matches(|c: char| c == table.separator || table.alt_separator == Some(c));
    // A bare root ("/") must keep its separator.
    if trimmed.is_empty() && !path.is_empty() {
        path[..1].to_string()
    } else {
        trimmed.to_string()
    }
}

//! Workspace directory creation and probing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{DirectoryStructureSpec, WorkspaceError};

/// Creates, verifies, and removes the fixed workspace subdirectories.
#[derive(Debug, Clone)]
pub struct DirectoryStructureManager {
    working_dir: PathBuf,
    spec: DirectoryStructureSpec,
}

impl DirectoryStructureManager {
    pub fn new(working_dir: PathBuf, spec: DirectoryStructureSpec) -> Self {
        Self { working_dir, spec }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Create every directory in the structure spec under the working
    /// directory. Idempotent: an already-correct layout is left untouched.
    pub fn ensure_directories(&self) -> Result<(), WorkspaceError> {
        for dir in self.spec.iter() {
            ensure_dir(&self.working_dir.join(dir))?;
        }
        Ok(())
    }

    /// Create a single directory (and missing ancestors) under the working
    /// directory.
    pub fn create_directory(&self, path: &str) -> Result<(), WorkspaceError> {
        ensure_dir(&self.working_dir.join(path))
    }

    /// Recursively delete a directory under the working directory. Not
    /// reversible; callers own any backup semantics.
    pub fn remove_directory(&self, path: &str) -> Result<(), WorkspaceError> {
        let full = self.working_dir.join(path);
        fs::remove_dir_all(&full).map_err(|e| WorkspaceError::from_io(&full, e))
    }

    /// Probe the working directory itself (`None`) or a path under it.
    ///
    /// "Not found" maps to `Ok(false)`; unexpected probe errors propagate.
    pub fn exists(&self, path: Option<&str>) -> Result<bool, WorkspaceError> {
        let full = match path {
            Some(p) => self.working_dir.join(p),
            None => self.working_dir.clone(),
        };
        match fs::symlink_metadata(&full) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(WorkspaceError::from_io_write(&full, e)),
        }
    }
}

/// Recursive mkdir tolerating "already exists", with a typed failure when a
/// non-directory entry occupies the path or one of its ancestors.
pub(crate) fn ensure_dir(path: &Path) -> Result<(), WorkspaceError> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(source) => {
            // Find the entry that blocked creation; a file in the way is a
            // structural error, everything else keeps its I/O cause.
            for candidate in path.ancestors() {
                match fs::symlink_metadata(candidate) {
                    Ok(meta) if !meta.is_dir() => {
                        return Err(WorkspaceError::NotADirectory(candidate.to_path_buf()));
                    }
                    Ok(_) => break,
                    Err(_) => continue,
                }
            }
            Err(WorkspaceError::from_io_write(path, source))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(dir: &TempDir) -> DirectoryStructureManager {
        DirectoryStructureManager::new(
            dir.path().join("ws"),
            DirectoryStructureSpec::default(),
        )
    }

    #[test]
    fn ensure_directories_creates_full_layout() {
        let dir = TempDir::new().unwrap();
        let mgr = manager(&dir);
        mgr.ensure_directories().unwrap();

        for name in ["projects", "issues", "tasks", "temp", "config", "prompts", "schema"] {
            assert!(mgr.working_dir().join(name).is_dir(), "{name} should exist");
        }
    }

    #[test]
    fn ensure_directories_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mgr = manager(&dir);
        mgr.ensure_directories().unwrap();
        mgr.ensure_directories().unwrap();
        assert!(mgr.working_dir().join("config").is_dir());
    }

    #[test]
    fn ensure_directories_fails_on_file_in_the_way() {
        let dir = TempDir::new().unwrap();
        let mgr = manager(&dir);
        fs::create_dir_all(mgr.working_dir()).unwrap();
        fs::write(mgr.working_dir().join("config"), "not a directory").unwrap();

        let err = mgr.ensure_directories().unwrap_err();
        assert!(matches!(err, WorkspaceError::NotADirectory(_)), "got {err:?}");
    }

    #[test]
    fn ensure_dir_reports_blocking_ancestor() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blocker");
        fs::write(&file, "file").unwrap();

        let err = ensure_dir(&file.join("nested/deeper")).unwrap_err();
        match err {
            WorkspaceError::NotADirectory(path) => assert_eq!(path, file),
            other => panic!("expected NotADirectory, got {other:?}"),
        }
    }

    #[test]
    fn create_and_remove_directory_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mgr = manager(&dir);
        mgr.create_directory("temp/session").unwrap();
        assert!(mgr.exists(Some("temp/session")).unwrap());

        mgr.remove_directory("temp/session").unwrap();
        assert!(!mgr.exists(Some("temp/session")).unwrap());
    }

    #[test]
    fn remove_missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mgr = manager(&dir);
        let err = mgr.remove_directory("never/created").unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound(_)));
    }

    #[test]
    fn exists_probes_working_dir_when_no_path_given() {
        let dir = TempDir::new().unwrap();
        let mgr = manager(&dir);
        assert!(!mgr.exists(None).unwrap());

        mgr.ensure_directories().unwrap();
        assert!(mgr.exists(None).unwrap());
    }
}

//! Atomic create-if-absent filesystem primitives.
//!
//! Probe-then-act (stat, then write) loses a race against a concurrent
//! process working on the same directory. Writes here go to a temp file
//! first and become visible through `hard_link`, which fails atomically
//! when the destination already exists; the loser of a race simply skips.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::WorkspaceError;

/// Write `content` to `path` unless the file already exists.
///
/// Returns `Ok(true)` when this call created the file, `Ok(false)` when the
/// file was already present (including losing a creation race). The parent
/// directory must exist. Never overwrites.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool, WorkspaceError> {
    // Fast path; the hard_link below remains the authoritative check.
    if path.exists() {
        return Ok(false);
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| WorkspaceError::config(format!("invalid file path: {}", path.display())))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| WorkspaceError::config(format!("invalid file path: {}", path.display())))?;

    let staging = parent.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        std::process::id()
    ));
    fs::write(&staging, content).map_err(|e| WorkspaceError::from_io_write(&staging, e))?;

    let outcome = match fs::hard_link(&staging, path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(WorkspaceError::from_io_write(path, e)),
    };

    // Staging file is no longer needed whichever way the link went.
    let _ = fs::remove_file(&staging);
    outcome
}

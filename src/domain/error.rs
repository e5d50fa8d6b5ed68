use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dila workspace operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A stage of the `initialize()` pipeline failed.
    #[error("workspace initialization failed at stage '{stage}': {source}")]
    Init {
        stage: &'static str,
        #[source]
        source: Box<WorkspaceError>,
    },

    /// Invalid bootstrap file content or invalid configuration fields.
    #[error("{0}")]
    Config(String),

    /// Bootstrap config file absent when required.
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Path validation or security failure.
    #[error("invalid path '{path}': {reason}")]
    Path { path: String, reason: PathViolation },

    /// A filesystem entry exists but is not a directory.
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// OS-level access denial.
    #[error("permission denied: {path}")]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Expected file or directory absent.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// Any other filesystem failure, carrying the underlying cause.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reason a path was rejected during validation or resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathViolation {
    /// The input was empty.
    Empty,
    /// A segment equal to `..` was found.
    Traversal,
    /// A doubled path separator was found.
    DoubledSeparator,
    /// A control character (0x00-0x1F) was found.
    ControlCharacter,
    /// A character forbidden on the target platform was found.
    ForbiddenCharacter(char),
    /// The resolved path escapes the base directory.
    OutsideBase,
}

impl fmt::Display for PathViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathViolation::Empty => write!(f, "path is empty"),
            PathViolation::Traversal => write!(f, "parent directory traversal is not allowed"),
            PathViolation::DoubledSeparator => write!(f, "doubled path separator"),
            PathViolation::ControlCharacter => write!(f, "control character in path"),
            PathViolation::ForbiddenCharacter(c) => {
                write!(f, "forbidden character '{}' in path", c.escape_default())
            }
            PathViolation::OutsideBase => {
                write!(f, "resolved path escapes the base directory")
            }
        }
    }
}

impl WorkspaceError {
    pub(crate) fn config<S: Into<String>>(message: S) -> Self {
        WorkspaceError::Config(message.into())
    }

    /// Classify an I/O error from a read/probe operation on `path`.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => WorkspaceError::Permission { path, source },
            io::ErrorKind::NotFound => WorkspaceError::NotFound(path),
            _ => WorkspaceError::Io { path, source },
        }
    }

    /// Classify an I/O error from a write operation on `path`.
    ///
    /// Unlike [`WorkspaceError::from_io`] this never maps to `NotFound`: a
    /// missing-ancestor failure during a write is an I/O fault, not an
    /// "expected entry absent" condition.
    pub(crate) fn from_io_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => WorkspaceError::Permission { path, source },
            _ => WorkspaceError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_classifies_permission_denied() {
        let err = WorkspaceError::from_io(
            "/tmp/x",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, WorkspaceError::Permission { .. }));
    }

    #[test]
    fn from_io_classifies_not_found() {
        let err =
            WorkspaceError::from_io("/tmp/x", io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(matches!(err, WorkspaceError::NotFound(_)));
    }

    #[test]
    fn from_io_write_never_yields_not_found() {
        let err = WorkspaceError::from_io_write(
            "/tmp/x",
            io::Error::new(io::ErrorKind::NotFound, "missing ancestor"),
        );
        assert!(matches!(err, WorkspaceError::Io { .. }));
    }

    #[test]
    fn init_error_carries_stage_and_cause() {
        let inner = WorkspaceError::NotADirectory(PathBuf::from("/tmp/ws/config"));
        let err = WorkspaceError::Init { stage: "base directories", source: Box::new(inner) };
        let text = err.to_string();
        assert!(text.contains("base directories"));
        assert!(text.contains("not a directory"));
    }
}

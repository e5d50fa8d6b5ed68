//! Domain types for the dila workspace.

pub mod config;
pub mod error;
pub mod paths;
pub mod structure;

pub use config::WorkspaceConfig;
pub use error::{PathViolation, WorkspaceError};
pub use paths::{PathResolver, PathStrategy, StrategyKind};
pub use structure::DirectoryStructureSpec;

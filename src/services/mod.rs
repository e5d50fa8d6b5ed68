//! Filesystem-facing workspace services.

pub mod bootstrap;
pub mod deployer;
pub mod directories;
pub(crate) mod fs_atomic;
pub mod orchestrator;

pub use bootstrap::ConfigBootstrapper;
pub use deployer::{DeployOutcome, TemplateAssetDeployer};
pub use directories::DirectoryStructureManager;
pub use orchestrator::WorkspaceOrchestrator;

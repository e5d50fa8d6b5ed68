//! Composition root for workspace initialization and path access.

use std::path::PathBuf;

use crate::domain::{
    DirectoryStructureSpec, PathResolver, PathStrategy, WorkspaceConfig, WorkspaceError,
};
use crate::services::bootstrap::ConfigBootstrapper;
use crate::services::deployer::TemplateAssetDeployer;
use crate::services::directories::DirectoryStructureManager;
use crate::templates;

/// Composes the directory manager, path resolver, template deployer, and
/// config bootstrapper behind one contract.
///
/// One orchestrator instance owns one working directory; there is no shared
/// global state.
#[derive(Debug, Clone)]
pub struct WorkspaceOrchestrator {
    config: WorkspaceConfig,
    directories: DirectoryStructureManager,
    resolver: PathResolver,
    deployer: TemplateAssetDeployer,
    bootstrapper: ConfigBootstrapper,
}

impl WorkspaceOrchestrator {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self::with_spec(config, DirectoryStructureSpec::default())
    }

    /// Build an orchestrator with a custom directory structure (tests).
    pub fn with_spec(config: WorkspaceConfig, spec: DirectoryStructureSpec) -> Self {
        let working_dir = config.working_dir().to_path_buf();
        Self {
            directories: DirectoryStructureManager::new(working_dir.clone(), spec),
            resolver: PathResolver::new(PathStrategy::platform_default(working_dir.clone())),
            deployer: TemplateAssetDeployer::new(),
            bootstrapper: ConfigBootstrapper::new(working_dir),
            config,
        }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Run the full bootstrap pipeline.
    ///
    /// Stages run strictly in order; the first failure aborts the sequence
    /// and surfaces as an `Init` error naming the stage. Every stage is
    /// idempotent, so re-running after a partial success converges to the
    /// same final state.
    pub fn initialize(&self) -> Result<(), WorkspaceError> {
        stage("base directories", || self.directories.ensure_directories())?;
        stage("template directories", || {
            self.directories.create_directory(self.config.prompt_base_dir())?;
            self.directories.create_directory(self.config.schema_base_dir())
        })?;
        stage("config bootstrap", || self.bootstrapper.bootstrap(&self.config).map(|_| ()))?;
        stage("prompt templates", || {
            let dest = self.config.working_dir().join(self.config.prompt_base_dir());
            self.deployer.deploy(&dest, &templates::prompt_assets()).map(|_| ())
        })?;
        stage("schema templates", || {
            let dest = self.config.working_dir().join(self.config.schema_base_dir());
            self.deployer.deploy(&dest, &templates::schema_assets()).map(|_| ())
        })
    }

    /// Fail unless the working directory exists on disk.
    pub fn validate_config(&self) -> Result<(), WorkspaceError> {
        if !self.directories.exists(None)? {
            return Err(WorkspaceError::config(format!(
                "working directory does not exist: {}",
                self.config.working_dir().display()
            )));
        }
        Ok(())
    }

    /// Re-read the bootstrap file, replacing the in-memory config.
    ///
    /// On failure the previous config is left unchanged.
    pub fn reload_config(&mut self) -> Result<(), WorkspaceError> {
        let next = self.bootstrapper.reload()?;
        self.config = next;
        Ok(())
    }

    pub fn resolve_path(&self, path: &str) -> Result<PathBuf, WorkspaceError> {
        self.resolver.resolve(path)
    }

    pub fn create_directory(&self, path: &str) -> Result<(), WorkspaceError> {
        self.directories.create_directory(path)
    }

    pub fn remove_directory(&self, path: &str) -> Result<(), WorkspaceError> {
        self.directories.remove_directory(path)
    }

    pub fn exists(&self, path: Option<&str>) -> Result<bool, WorkspaceError> {
        self.directories.exists(path)
    }

    /// Swap the path resolution strategy at runtime.
    pub fn update_strategy(&mut self, strategy: PathStrategy) {
        self.resolver.update_strategy(strategy);
    }
}

fn stage<F>(name: &'static str, run: F) -> Result<(), WorkspaceError>
where
    F: FnOnce() -> Result<(), WorkspaceError>,
{
    run().map_err(|source| WorkspaceError::Init { stage: name, source: Box::new(source) })
}

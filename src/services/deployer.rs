//! Idempotent deployment of embedded template assets.

use std::path::Path;

use crate::domain::WorkspaceError;
use crate::services::{directories, fs_atomic};
use crate::templates::TemplateAsset;

/// Outcome of one deployment pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Files written by this pass.
    pub written: usize,
    /// Files skipped because they already existed.
    pub skipped: usize,
}

/// Writes bundled template content into a workspace directory.
///
/// Deployment is create-if-missing, never overwrite: a file that already
/// exists is skipped regardless of content, so user edits survive
/// re-initialization. The asset map itself is never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateAssetDeployer;

impl TemplateAssetDeployer {
    pub fn new() -> Self {
        Self
    }

    /// Deploy every asset under `destination_base`.
    ///
    /// The first failure aborts remaining writes; files already written
    /// stay in place (no rollback).
    pub fn deploy(
        &self,
        destination_base: &Path,
        assets: &[TemplateAsset],
    ) -> Result<DeployOutcome, WorkspaceError> {
        let mut outcome = DeployOutcome::default();
        for asset in assets {
            let destination = destination_base.join(&asset.path);
            if let Some(parent) = destination.parent() {
                directories::ensure_dir(parent)?;
            }
            if fs_atomic::write_if_absent(&destination, asset.content)? {
                outcome.written += 1;
            } else {
                outcome.skipped += 1;
            }
        }
        Ok(outcome)
    }
}

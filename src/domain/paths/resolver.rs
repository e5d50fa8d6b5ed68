//! Resolver wrapping a single replaceable strategy.

use std::path::PathBuf;

use crate::domain::WorkspaceError;
use crate::domain::paths::PathStrategy;

/// Holds exactly one [`PathStrategy`] and forwards every call to it.
///
/// `update_strategy` is a single assignment; no operation can observe a
/// half-updated strategy. Strategy errors propagate unchanged.
#[derive(Debug, Clone)]
pub struct PathResolver {
    strategy: PathStrategy,
}

impl PathResolver {
    pub fn new(strategy: PathStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &PathStrategy {
        &self.strategy
    }

    /// Replace the held strategy atomically.
    pub fn update_strategy(&mut self, strategy: PathStrategy) {
        self.strategy = strategy;
    }

    pub fn resolve(&self, path: &str) -> Result<PathBuf, WorkspaceError> {
        self.strategy.resolve(path)
    }

    pub fn normalize(&self, path: &str) -> Result<String, WorkspaceError> {
        self.strategy.normalize(path)
    }

    pub fn validate(&self, path: &str) -> Result<bool, WorkspaceError> {
        self.strategy.validate(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paths::StrategyKind;

    #[test]
    fn delegates_to_held_strategy() {
        let resolver = PathResolver::new(PathStrategy::unix("/workspace"));
        assert_eq!(resolver.resolve("a/b").unwrap(), PathBuf::from("/workspace/a/b"));
        assert_eq!(resolver.normalize("a//b").unwrap(), "a/b");
        assert!(resolver.validate("a/b").unwrap());
    }

    #[test]
    fn update_strategy_replaces_wholesale() {
        let mut resolver = PathResolver::new(PathStrategy::unix("/workspace"));
        resolver.update_strategy(PathStrategy::windows("C:\\workspace"));

        assert_eq!(resolver.strategy().kind(), StrategyKind::Windows);
        assert_eq!(
            resolver.resolve("dir/file.md").unwrap(),
            PathBuf::from("C:\\workspace\\dir\\file.md")
        );
    }

    #[test]
    fn strategy_errors_propagate_unchanged() {
        let resolver = PathResolver::new(PathStrategy::agnostic("/workspace"));
        assert!(resolver.resolve("a/../b").is_err());
    }
}

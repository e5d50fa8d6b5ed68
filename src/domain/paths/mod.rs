//! Cross-platform path validation and resolution.

pub mod resolver;
pub mod rules;
pub mod strategy;

pub use resolver::PathResolver;
pub use strategy::{PathStrategy, StrategyKind};

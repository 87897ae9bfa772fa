//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (project file plus local overrides)
//! - Conventional and prefixed environment variable overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};

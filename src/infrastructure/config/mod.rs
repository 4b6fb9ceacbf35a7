//! Configuration loading infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML and JSON file loading
//! - Layered overrides (later files win)
//! - Validation into an immutable [`StyleConfig`](crate::StyleConfig)

pub mod loader;

pub use loader::{ConfigLoader, LoadError};

//! Domain layer for style configuration
//!
//! Value types, the validated configuration record and its error model.

pub mod error;
pub mod models;

pub use error::{ConfigurationError, Violation, ViolationKind};

//! Infrastructure layer module
//!
//! Adapters around the domain:
//! - Configuration loading (figment)
//! - Export to the build tool's JSON shape
//! - Logging infrastructure

pub mod config;
pub mod export;
pub mod logging;

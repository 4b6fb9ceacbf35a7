//! Service layer
//!
//! Coordinates domain types into validated configurations.

pub mod validator;

pub use validator::ConfigValidator;

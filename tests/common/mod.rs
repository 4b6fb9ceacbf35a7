//! Common test utilities for integration tests
//!
//! Shared declaration fixtures used across test files.

#![allow(dead_code)]

use std::io::Write;
use styleconf::{ConfigDeclaration, ContainerDeclaration, SemanticRole, ThemeDeclaration};
use tempfile::NamedTempFile;

/// Colors of the project theme, keyed by role
pub const MYTHEME: [(SemanticRole, &str); 9] = [
    (SemanticRole::Primary, "#588E29"),
    (SemanticRole::Secondary, "#a3e635"),
    (SemanticRole::Accent, "#588e29"),
    (SemanticRole::Neutral, "#412234"),
    (SemanticRole::Base, "#f8ede1"),
    (SemanticRole::Info, "#93E6FB"),
    (SemanticRole::Success, "#80CED1"),
    (SemanticRole::Warning, "#EFD8BD"),
    (SemanticRole::Error, "#E58B8B"),
];

/// Theme declaration filling every role
pub fn complete_theme(name: &str) -> ThemeDeclaration {
    ThemeDeclaration {
        name: name.to_string(),
        colors: MYTHEME
            .iter()
            .map(|(role, color)| (role.as_str().to_string(), (*color).to_string()))
            .collect(),
    }
}

/// One HTML glob, `DEFAULT: 1rem`, `mytheme`, daisyui then typography
pub fn scenario_declaration() -> ConfigDeclaration {
    ConfigDeclaration {
        content: vec!["./src/**/*.html".to_string()],
        container: ContainerDeclaration {
            center: false,
            padding: [("DEFAULT".to_string(), "1rem".to_string())].into(),
        },
        themes: vec![complete_theme("mytheme")],
        plugins: vec!["daisyui".to_string(), "typography".to_string()],
    }
}

/// Write contents to a temporary file with the given suffix
pub fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

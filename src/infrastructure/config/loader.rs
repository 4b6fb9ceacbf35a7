use figment::providers::{Format, Json, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::error::ConfigurationError;
use crate::domain::models::{ConfigDeclaration, StyleConfig};
use crate::services::ConfigValidator;

/// Failure to produce a [`StyleConfig`] from a document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("None of the configuration layers exist: {0:?}")]
    NoSources(Vec<PathBuf>),

    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Validate the built-in project declaration
    pub fn builtin() -> Result<StyleConfig, ConfigurationError> {
        ConfigValidator::validate(&ConfigDeclaration::builtin())
    }

    /// Load configuration from an in-memory YAML document
    pub fn load_from_str(yaml: &str) -> Result<StyleConfig, LoadError> {
        Self::extract(&Figment::from(Yaml::string(yaml)))
    }

    /// Load configuration from a specific file
    ///
    /// `.json` files are read as JSON, anything else as YAML.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<StyleConfig, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "loading style configuration");
        Self::extract(&merge_file(Figment::new(), path))
    }

    /// Load configuration with hierarchical merging
    ///
    /// Layers are merged in order, so later files win. Nested maps such as
    /// `container.padding` merge key by key; lists are replaced whole.
    /// Missing layers are skipped, e.g. an optional `styles.local.yaml`.
    pub fn load_layered<I, P>(paths: I) -> Result<StyleConfig, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut figment = Figment::new();
        let mut tried = Vec::new();
        let mut found = 0usize;

        for path in paths {
            let path = path.as_ref();
            tried.push(path.to_path_buf());

            if path.exists() {
                debug!(path = %path.display(), "merging configuration layer");
                figment = merge_file(figment, path);
                found += 1;
            } else {
                debug!(path = %path.display(), "skipping missing configuration layer");
            }
        }

        if found == 0 {
            return Err(LoadError::NoSources(tried));
        }

        Self::extract(&figment)
    }

    fn extract(figment: &Figment) -> Result<StyleConfig, LoadError> {
        let declaration: ConfigDeclaration = figment.extract().map_err(Box::new)?;
        Ok(ConfigValidator::validate(&declaration)?)
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        figment.merge(Json::file(path))
    } else {
        figment.merge(Yaml::file(path))
    }
}

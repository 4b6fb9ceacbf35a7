//! The validated, immutable style configuration

use super::declaration::{ConfigDeclaration, ContainerDeclaration, ThemeDeclaration};
use super::plugin::PluginId;
use super::spacing::{ContainerConfig, SpacingScale};
use super::theme::ColorTheme;
use crate::domain::error::{ConfigurationError, Violation};

/// A style configuration whose every invariant has been checked
///
/// Only obtainable through validation (see
/// [`ConfigValidator`](crate::services::ConfigValidator)), and read-only
/// afterwards, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    content: Vec<String>,
    container: ContainerConfig,
    themes: Vec<ColorTheme>,
    plugins: Vec<PluginId>,
}

impl StyleConfig {
    pub(crate) const fn from_parts(
        content: Vec<String>,
        container: ContainerConfig,
        themes: Vec<ColorTheme>,
        plugins: Vec<PluginId>,
    ) -> Self {
        Self {
            content,
            container,
            themes,
            plugins,
        }
    }

    /// Glob patterns of files to scan, in declared order
    pub fn content_patterns(&self) -> &[String] {
        &self.content
    }

    /// Container padding scale; always has a `DEFAULT` entry
    pub const fn spacing_scale(&self) -> &SpacingScale {
        &self.container.padding
    }

    pub const fn container(&self) -> &ContainerConfig {
        &self.container
    }

    /// Look up a registered theme by name
    pub fn color_theme(&self, name: &str) -> Result<&ColorTheme, ConfigurationError> {
        self.themes
            .iter()
            .find(|theme| theme.name() == name)
            .ok_or_else(|| ConfigurationError::single(Violation::UnknownTheme(name.to_string())))
    }

    /// All themes in declared order
    pub fn themes(&self) -> &[ColorTheme] {
        &self.themes
    }

    /// The theme applied when none is selected: the first one declared
    pub fn default_theme(&self) -> Option<&ColorTheme> {
        self.themes.first()
    }

    /// Plugins in the order they should be applied
    pub fn plugin_activation_order(&self) -> &[PluginId] {
        &self.plugins
    }

    /// Canonical declaration describing this configuration
    pub fn to_declaration(&self) -> ConfigDeclaration {
        ConfigDeclaration {
            content: self.content.clone(),
            container: ContainerDeclaration {
                center: self.container.center,
                padding: self
                    .container
                    .padding
                    .iter()
                    .map(|(bp, length)| (bp.as_str().to_string(), length.as_str().to_string()))
                    .collect(),
            },
            themes: self
                .themes
                .iter()
                .map(|theme| ThemeDeclaration {
                    name: theme.name().to_string(),
                    colors: theme
                        .colors()
                        .iter()
                        .map(|(role, color)| (role.as_str().to_string(), color.as_str().to_string()))
                        .collect(),
                })
                .collect(),
            plugins: self
                .plugins
                .iter()
                .map(|plugin| plugin.as_str().to_string())
                .collect(),
        }
    }
}

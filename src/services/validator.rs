//! Declaration validation
//!
//! Walks each section of a [`ConfigDeclaration`] once, collecting every
//! violation instead of stopping at the first.

use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

use crate::domain::error::{ConfigurationError, Violation};
use crate::domain::models::{
    Breakpoint, ColorTheme, ColorValue, ConfigDeclaration, ContainerConfig, ContainerDeclaration,
    Length, PluginId, SemanticRole, SpacingScale, StyleConfig, ThemeDeclaration,
};

/// Turns a raw declaration into a [`StyleConfig`]
#[derive(Debug, Default)]
pub struct ConfigValidator {
    violations: Vec<Violation>,
}

impl ConfigValidator {
    /// Validate a declaration, reporting all violations together
    pub fn validate(declaration: &ConfigDeclaration) -> Result<StyleConfig, ConfigurationError> {
        debug!(
            patterns = declaration.content.len(),
            breakpoints = declaration.container.padding.len(),
            themes = declaration.themes.len(),
            plugins = declaration.plugins.len(),
            "validating style configuration"
        );

        let mut validator = Self::default();
        let content = validator.content(&declaration.content);
        let container = validator.container(&declaration.container);
        let themes = validator.themes(&declaration.themes);
        let plugins = validator.plugins(&declaration.plugins);

        match (ConfigurationError::from_violations(validator.violations), container) {
            (Some(err), _) => {
                warn!(violations = err.violations().len(), "style configuration rejected");
                Err(err)
            }
            (None, Some(container)) => {
                info!(
                    patterns = content.len(),
                    themes = themes.len(),
                    plugins = plugins.len(),
                    "style configuration validated"
                );
                Ok(StyleConfig::from_parts(content, container, themes, plugins))
            }
            (None, None) => Err(ConfigurationError::single(Violation::MissingDefaultSpacing)),
        }
    }

    fn content(&mut self, patterns: &[String]) -> Vec<String> {
        if patterns.is_empty() {
            self.violations.push(Violation::EmptyContentPatterns);
        }

        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                self.violations.push(Violation::BlankContentPattern(index));
            }
        }

        patterns.to_vec()
    }

    fn container(&mut self, container: &ContainerDeclaration) -> Option<ContainerConfig> {
        let mut default = None;
        let mut lengths = Vec::new();
        let mut has_default_key = false;

        for (key, value) in &container.padding {
            let Some(breakpoint) = Breakpoint::parse(key) else {
                self.violations
                    .push(Violation::UnknownBreakpoint(key.clone()));
                continue;
            };
            has_default_key |= breakpoint == Breakpoint::Default;

            match Length::parse(value) {
                Some(length) if breakpoint == Breakpoint::Default => default = Some(length),
                Some(length) => lengths.push((breakpoint, length)),
                None => self.violations.push(Violation::InvalidLength {
                    breakpoint: key.clone(),
                    value: value.clone(),
                }),
            }
        }

        // An unparseable DEFAULT is already reported as InvalidLength
        if !has_default_key {
            self.violations.push(Violation::MissingDefaultSpacing);
        }

        let padding = lengths
            .into_iter()
            .fold(SpacingScale::new(default?), |scale, (bp, length)| {
                scale.with(bp, length)
            });

        Some(ContainerConfig {
            center: container.center,
            padding,
        })
    }

    fn themes(&mut self, themes: &[ThemeDeclaration]) -> Vec<ColorTheme> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut valid = Vec::with_capacity(themes.len());

        for (index, theme) in themes.iter().enumerate() {
            let before = self.violations.len();

            // Names are compared without surrounding whitespace
            let name = theme.name.trim();
            if name.is_empty() {
                self.violations.push(Violation::BlankThemeName(index));
            } else if !seen.insert(name) && reported.insert(name) {
                self.violations
                    .push(Violation::DuplicateTheme(name.to_string()));
            }

            let colors = self.colors(theme);

            if self.violations.len() == before {
                valid.push(ColorTheme::new(theme.name.clone(), colors));
            }
        }

        valid
    }

    fn colors(&mut self, theme: &ThemeDeclaration) -> BTreeMap<SemanticRole, ColorValue> {
        let mut declared = HashSet::new();
        let mut colors = BTreeMap::new();

        for (key, value) in &theme.colors {
            let Some(role) = SemanticRole::parse(key) else {
                self.violations.push(Violation::UnknownColorRole {
                    theme: theme.name.clone(),
                    role: key.clone(),
                });
                continue;
            };

            if !declared.insert(role) {
                self.violations.push(Violation::DuplicateColorRole {
                    theme: theme.name.clone(),
                    role,
                });
                continue;
            }

            match ColorValue::parse(value) {
                Some(color) => {
                    colors.insert(role, color);
                }
                None => self.violations.push(Violation::InvalidColor {
                    theme: theme.name.clone(),
                    role,
                    value: value.clone(),
                }),
            }
        }

        let missing: Vec<_> = SemanticRole::ALL
            .into_iter()
            .filter(|role| !declared.contains(role))
            .collect();

        if !missing.is_empty() {
            self.violations.push(Violation::IncompleteTheme {
                theme: theme.name.clone(),
                missing,
            });
        }

        colors
    }

    fn plugins(&mut self, plugins: &[String]) -> Vec<PluginId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut valid = Vec::with_capacity(plugins.len());

        for (index, raw) in plugins.iter().enumerate() {
            let Some(plugin) = PluginId::parse(raw) else {
                self.violations.push(Violation::BlankPlugin(index));
                continue;
            };

            let key = raw.trim();
            if !seen.insert(key) {
                if reported.insert(key) {
                    self.violations.push(Violation::DuplicatePlugin(key.to_string()));
                }
                continue;
            }

            valid.push(plugin);
        }

        valid
    }
}

impl TryFrom<&ConfigDeclaration> for StyleConfig {
    type Error = ConfigurationError;

    fn try_from(declaration: &ConfigDeclaration) -> Result<Self, Self::Error> {
        ConfigValidator::validate(declaration)
    }
}

impl TryFrom<ConfigDeclaration> for StyleConfig {
    type Error = ConfigurationError;

    fn try_from(declaration: ConfigDeclaration) -> Result<Self, Self::Error> {
        ConfigValidator::validate(&declaration)
    }
}

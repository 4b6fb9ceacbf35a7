//! Color themes registered with the component plugin

use std::collections::BTreeMap;
use std::fmt;

/// Named purpose for a color, independent of its literal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticRole {
    Primary,
    Secondary,
    Accent,
    Neutral,
    /// Page background, spelled `base-100` by the theme plugin
    Base,
    Info,
    Success,
    Warning,
    Error,
}

impl SemanticRole {
    /// Every role a complete theme must define
    pub const ALL: [Self; 9] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::Base,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Base => "base-100",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Parse a role key. `base` is accepted as shorthand for `base-100`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "accent" => Some(Self::Accent),
            "neutral" => Some(Self::Neutral),
            "base" | "base-100" => Some(Self::Base),
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hex color literal, kept exactly as declared
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorValue(String);

impl ColorValue {
    /// Accepts `#` followed by 3, 4, 6 or 8 hex digits.
    pub fn parse(value: &str) -> Option<Self> {
        is_hex_color(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// A complete, named palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    name: String,
    colors: BTreeMap<SemanticRole, ColorValue>,
}

impl ColorTheme {
    /// Callers guarantee every role in [`SemanticRole::ALL`] is present.
    pub(crate) const fn new(name: String, colors: BTreeMap<SemanticRole, ColorValue>) -> Self {
        Self { name, colors }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn colors(&self) -> &BTreeMap<SemanticRole, ColorValue> {
        &self.colors
    }

    pub fn get(&self, role: SemanticRole) -> Option<&ColorValue> {
        self.colors.get(&role)
    }
}

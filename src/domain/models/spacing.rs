//! Responsive container spacing

use std::collections::BTreeMap;
use std::fmt;

/// Units accepted after a numeric length
const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex", "pt", "pc", "in", "cm", "mm",
];

/// Named layout threshold, ordered from narrowest to widest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Fallback applied below the first breakpoint
    Default,
    Sm,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Self; 5] = [Self::Default, Self::Sm, Self::Lg, Self::Xl, Self::Xxl];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == key)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS length literal such as `1rem`, kept exactly as declared
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length(String);

impl Length {
    pub fn parse(value: &str) -> Option<Self> {
        is_css_length(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_css_length(value: &str) -> bool {
    if value == "0" {
        return true;
    }

    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    let is_number = match number.split_once('.') {
        Some((whole, fraction)) => digits(whole) && !fraction.is_empty() && digits(fraction),
        None => !number.is_empty(),
    };

    is_number && LENGTH_UNITS.contains(&unit)
}

/// Breakpoint to length mapping that always defines [`Breakpoint::Default`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingScale {
    default: Length,
    overrides: BTreeMap<Breakpoint, Length>,
}

impl SpacingScale {
    pub fn new(default: Length) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// Set the length for a breakpoint. Setting `Default` replaces the fallback.
    #[must_use]
    pub fn with(mut self, breakpoint: Breakpoint, length: Length) -> Self {
        if breakpoint == Breakpoint::Default {
            self.default = length;
        } else {
            self.overrides.insert(breakpoint, length);
        }
        self
    }

    pub const fn default_length(&self) -> &Length {
        &self.default
    }

    /// Length declared for exactly this breakpoint
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Length> {
        match breakpoint {
            Breakpoint::Default => Some(&self.default),
            other => self.overrides.get(&other),
        }
    }

    /// Length in effect at a breakpoint: its own entry, else the nearest
    /// narrower one, else `DEFAULT`.
    pub fn resolve(&self, breakpoint: Breakpoint) -> &Length {
        self.overrides
            .range(..=breakpoint)
            .next_back()
            .map_or(&self.default, |(_, length)| length)
    }

    /// Declared entries, `DEFAULT` first, then by width
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &Length)> {
        std::iter::once((Breakpoint::Default, &self.default))
            .chain(self.overrides.iter().map(|(bp, length)| (*bp, length)))
    }

    pub fn len(&self) -> usize {
        self.overrides.len() + 1
    }

    /// Always false: `DEFAULT` is mandatory.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Layout container settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    pub center: bool,
    pub padding: SpacingScale,
}

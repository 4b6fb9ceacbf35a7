use thiserror::Error;

use super::models::theme::SemanticRole;

/// Category tag for a single [`Violation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    EmptyContentPatterns,
    BlankContentPattern,
    MissingDefaultSpacing,
    UnknownBreakpoint,
    InvalidLength,
    UnknownTheme,
    IncompleteTheme,
    DuplicateTheme,
    BlankThemeName,
    UnknownColorRole,
    DuplicateColorRole,
    InvalidColor,
    DuplicatePlugin,
    BlankPlugin,
}

/// One broken invariant found while validating a declaration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("content patterns cannot be empty: no source file would be scanned")]
    EmptyContentPatterns,

    #[error("content pattern at index {0} is blank")]
    BlankContentPattern(usize),

    #[error("container padding is missing the DEFAULT entry")]
    MissingDefaultSpacing,

    #[error("unknown breakpoint '{0}'. Must be one of: DEFAULT, sm, lg, xl, 2xl")]
    UnknownBreakpoint(String),

    #[error("invalid length '{value}' for breakpoint {breakpoint}")]
    InvalidLength { breakpoint: String, value: String },

    #[error("theme '{0}' is not registered")]
    UnknownTheme(String),

    #[error("theme '{theme}' is missing required roles: {}", join_roles(.missing))]
    IncompleteTheme {
        theme: String,
        missing: Vec<SemanticRole>,
    },

    #[error("theme '{0}' is registered more than once")]
    DuplicateTheme(String),

    #[error("theme at index {0} has a blank name")]
    BlankThemeName(usize),

    #[error("theme '{theme}' declares unknown color role '{role}'")]
    UnknownColorRole { theme: String, role: String },

    #[error("theme '{theme}' declares role {role} more than once")]
    DuplicateColorRole { theme: String, role: SemanticRole },

    #[error("theme '{theme}' has invalid color '{value}' for role {role}")]
    InvalidColor {
        theme: String,
        role: SemanticRole,
        value: String,
    },

    #[error("plugin '{0}' is activated more than once")]
    DuplicatePlugin(String),

    #[error("plugin at index {0} has a blank identifier")]
    BlankPlugin(usize),
}

impl Violation {
    pub const fn kind(&self) -> ViolationKind {
        match self {
            Self::EmptyContentPatterns => ViolationKind::EmptyContentPatterns,
            Self::BlankContentPattern(_) => ViolationKind::BlankContentPattern,
            Self::MissingDefaultSpacing => ViolationKind::MissingDefaultSpacing,
            Self::UnknownBreakpoint(_) => ViolationKind::UnknownBreakpoint,
            Self::InvalidLength { .. } => ViolationKind::InvalidLength,
            Self::UnknownTheme(_) => ViolationKind::UnknownTheme,
            Self::IncompleteTheme { .. } => ViolationKind::IncompleteTheme,
            Self::DuplicateTheme(_) => ViolationKind::DuplicateTheme,
            Self::BlankThemeName(_) => ViolationKind::BlankThemeName,
            Self::UnknownColorRole { .. } => ViolationKind::UnknownColorRole,
            Self::DuplicateColorRole { .. } => ViolationKind::DuplicateColorRole,
            Self::InvalidColor { .. } => ViolationKind::InvalidColor,
            Self::DuplicatePlugin(_) => ViolationKind::DuplicatePlugin,
            Self::BlankPlugin(_) => ViolationKind::BlankPlugin,
        }
    }
}

/// Every violation found in a declaration, reported together
///
/// Always holds at least one violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "invalid style configuration ({}):{}",
    count_violations(.violations),
    list_violations(.violations)
)]
pub struct ConfigurationError {
    violations: Vec<Violation>,
}

impl ConfigurationError {
    /// Wrap collected violations; `None` when there is nothing to report.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn kinds(&self) -> impl Iterator<Item = ViolationKind> + '_ {
        self.violations.iter().map(Violation::kind)
    }

    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.kinds().any(|k| k == kind)
    }
}

fn join_roles(roles: &[SemanticRole]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn count_violations(violations: &[Violation]) -> String {
    match violations.len() {
        1 => "1 violation".to_string(),
        n => format!("{n} violations"),
    }
}

fn list_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("\n  - {v}"))
        .collect()
}

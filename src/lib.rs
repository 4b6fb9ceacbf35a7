//! Styleconf - validated styling configuration
//!
//! Styleconf holds the declaration a utility-first CSS build tool is driven
//! by: which source files to scan for class names, the container spacing
//! scale, the registered color themes and the ordered plugin list. A
//! declaration is validated once, every violation reported together, and
//! the result is an immutable [`StyleConfig`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): value types, the validated record and errors
//! - **Service Layer** (`services`): declaration validation
//! - **Infrastructure Layer** (`infrastructure`): figment loading, export, logging
//!
//! # Example
//!
//! ```
//! use styleconf::ConfigLoader;
//!
//! let config = ConfigLoader::builtin()?;
//! let theme = config.color_theme("mytheme")?;
//! assert_eq!(theme.colors().len(), 9);
//! # Ok::<(), styleconf::ConfigurationError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Breakpoint, ColorTheme, ColorValue, ConfigDeclaration, ContainerConfig, ContainerDeclaration,
    Length, PluginId, SemanticRole, SpacingScale, StyleConfig, ThemeDeclaration,
};
pub use domain::{ConfigurationError, Violation, ViolationKind};
pub use infrastructure::config::{ConfigLoader, LoadError};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
pub use services::ConfigValidator;

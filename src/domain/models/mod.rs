pub mod declaration;
pub mod plugin;
pub mod spacing;
pub mod style_config;
pub mod theme;

pub use declaration::{ConfigDeclaration, ContainerDeclaration, ThemeDeclaration};
pub use plugin::PluginId;
pub use spacing::{Breakpoint, ContainerConfig, Length, SpacingScale};
pub use style_config::StyleConfig;
pub use theme::{ColorTheme, ColorValue, SemanticRole};

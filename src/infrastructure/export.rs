//! Rendering a validated configuration for the CSS build tool

use serde_json::{json, Map, Value};

use crate::domain::models::StyleConfig;

impl StyleConfig {
    /// The configuration in the shape the Tailwind CLI and daisyUI expect
    ///
    /// Themes become daisyUI's list of single-key objects,
    /// `[{"mytheme": {"primary": "#588E29", ...}}]`.
    pub fn to_tailwind_json(&self) -> Value {
        let padding: Map<String, Value> = self
            .spacing_scale()
            .iter()
            .map(|(bp, length)| (bp.as_str().to_string(), json!(length.as_str())))
            .collect();

        let themes: Vec<Value> = self
            .themes()
            .iter()
            .map(|theme| {
                let colors: Map<String, Value> = theme
                    .colors()
                    .iter()
                    .map(|(role, color)| (role.as_str().to_string(), json!(color.as_str())))
                    .collect();

                let mut entry = Map::new();
                entry.insert(theme.name().to_string(), Value::Object(colors));
                Value::Object(entry)
            })
            .collect();

        let plugins: Vec<&str> = self
            .plugin_activation_order()
            .iter()
            .map(|plugin| plugin.as_str())
            .collect();

        json!({
            "content": self.content_patterns(),
            "theme": {
                "container": {
                    "center": self.container().center,
                    "padding": padding,
                },
            },
            "daisyui": {
                "themes": themes,
            },
            "plugins": plugins,
        })
    }

    /// Canonical declaration as YAML, loadable by
    /// [`ConfigLoader::load_from_str`](crate::ConfigLoader::load_from_str)
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.to_declaration())
    }
}

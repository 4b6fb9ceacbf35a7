//! Raw, unvalidated shape of a style configuration
//!
//! Everything here is plain strings so that a structurally broken document
//! still deserializes and can be reported violation by violation.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Top-level declaration as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDeclaration {
    /// Glob patterns of files scanned for class names
    pub content: Vec<String>,

    /// Layout container settings
    pub container: ContainerDeclaration,

    /// Registered color themes, first one is the default
    pub themes: Vec<ThemeDeclaration>,

    /// Plugins in activation order
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerDeclaration {
    /// Center the container horizontally
    pub center: bool,

    /// Breakpoint label to CSS length; bare numbers such as `0` are kept
    /// as their decimal text
    #[serde(deserialize_with = "lengths_as_text")]
    pub padding: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDeclaration {
    pub name: String,

    /// Semantic role to hex color
    pub colors: BTreeMap<String, String>,
}

impl ConfigDeclaration {
    /// The project's own styling declaration
    pub fn builtin() -> Self {
        Self {
            content: vec![
                "./web/src/**/*.rs".to_string(),
                "./web/**/*.{scss,css,html}".to_string(),
            ],
            container: ContainerDeclaration {
                center: true,
                padding: string_map([
                    ("DEFAULT", "1rem"),
                    ("sm", "2rem"),
                    ("lg", "4rem"),
                    ("xl", "8rem"),
                    ("2xl", "16rem"),
                ]),
            },
            themes: vec![ThemeDeclaration {
                name: "mytheme".to_string(),
                colors: string_map([
                    ("primary", "#588E29"),
                    ("secondary", "#a3e635"),
                    ("accent", "#588e29"),
                    ("neutral", "#412234"),
                    ("base-100", "#f8ede1"),
                    ("info", "#93E6FB"),
                    ("success", "#80CED1"),
                    ("warning", "#EFD8BD"),
                    ("error", "#E58B8B"),
                ]),
            }],
            plugins: vec!["daisyui".to_string(), "@tailwindcss/typography".to_string()],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthLiteral {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl LengthLiteral {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unsigned(n) => n.to_string(),
            Self::Signed(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

fn lengths_as_text<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, LengthLiteral>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, value.into_text()))
        .collect())
}

fn string_map<const N: usize>(entries: [(&str, &str); N]) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

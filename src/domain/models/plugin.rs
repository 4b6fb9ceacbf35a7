use std::fmt;

/// Identifier of a plugin handed to the build tool, e.g. `daisyui`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginId(String);

impl PluginId {
    /// `None` for a blank identifier. The literal is kept untouched.
    pub fn parse(id: &str) -> Option<Self> {
        (!id.trim().is_empty()).then(|| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PluginId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            PluginId::parse("@tailwindcss/typography").map(|p| p.0),
            Some("@tailwindcss/typography".to_string())
        );
        assert!(PluginId::parse("").is_none());
        assert!(PluginId::parse("   ").is_none());
    }
}

use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The bundled theme document.
pub const THEME_ASSET: &str = include_str!("../../assets/theme.toml");

/// Declarative input for the external styling tool. Nothing reads it at runtime
/// apart from the `theme` command that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub content: Vec<String>,
    pub colors: ThemePalette,
    #[serde(default)]
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: "#2c3e50".to_string(),
            secondary: "#34495e".to_string(),
            accent: "#3498db".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content: vec![
                "./index.html".to_string(),
                "./src/**/*.{vue,js,ts,jsx,tsx}".to_string(),
            ],
            colors: ThemePalette::default(),
            plugins: Vec::new(),
        }
    }
}

impl ThemeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ApiError::ConfigValidationError {
            field: "theme".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Renders `{content, theme: {extend: {colors}}, plugins}`.
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::json!({
            "content": self.content,
            "theme": {
                "extend": {
                    "colors": {
                        "primary": self.colors.primary,
                        "secondary": self.colors.secondary,
                        "accent": self.colors.accent,
                    }
                }
            },
            "plugins": self.plugins,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}

impl Validate for ThemeConfig {
    fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(ApiError::MissingConfigError {
                field: "theme.content".to_string(),
            });
        }
        for glob in &self.content {
            validation::validate_non_empty_string("theme.content", glob)?;
        }
        validation::validate_hex_color("theme.colors.primary", &self.colors.primary)?;
        validation::validate_hex_color("theme.colors.secondary", &self.colors.secondary)?;
        validation::validate_hex_color("theme.colors.accent", &self.colors.accent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_asset_matches_default() {
        let theme = ThemeConfig::from_toml_str(THEME_ASSET).unwrap();
        assert_eq!(theme, ThemeConfig::default());
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_document_shape() {
        let doc = ThemeConfig::default().to_document();
        assert_eq!(doc["theme"]["extend"]["colors"]["accent"], "#3498db");
        assert_eq!(doc["content"][1], "./src/**/*.{vue,js,ts,jsx,tsx}");
        assert_eq!(doc["plugins"], serde_json::json!([]));
    }

    #[test]
    fn test_validate_rejects_bad_palette() {
        let mut theme = ThemeConfig::default();
        theme.colors.secondary = "blue".to_string();
        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("theme.colors.secondary"));

        let theme = ThemeConfig {
            content: Vec::new(),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            theme.validate(),
            Err(ApiError::MissingConfigError { .. })
        ));
    }
}

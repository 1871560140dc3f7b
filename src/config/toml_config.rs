use crate::config::theme::ThemeConfig;
use crate::config::ClientConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// Environment variable naming a config file to load when none is given.
pub const CONFIG_PATH_ENV: &str = "ORDER_STATUS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
    pub theme: Option<ThemeConfig>,
}

impl AppConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ApiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path`, else the file named by `ORDER_STATUS_CONFIG`, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            tracing::debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        match std::env::var(CONFIG_PATH_ENV) {
            Ok(env_path) if !env_path.is_empty() => {
                tracing::debug!("Loading configuration from ${}={}", CONFIG_PATH_ENV, env_path);
                Self::from_file(env_path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme.clone().unwrap_or_default()
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn timeout(&self) -> Duration {
        self.client.timeout()
    }

    fn default_headers(&self) -> &HashMap<String, String> {
        self.client.default_headers()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.client.validate()?;
        if let Some(theme) = &self.theme {
            theme.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.base_url(), "http://localhost:8000/api");
        assert_eq!(config.timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_partial_client_section() {
        let config = AppConfig::from_toml_str(
            r#"
[client]
base_url = "https://orders.example.com/api"
"#,
        )
        .unwrap();

        assert_eq!(config.client.base_url, "https://orders.example.com/api");
        assert_eq!(config.client.timeout_ms, 5000);
        assert_eq!(config.client.headers.len(), 2);
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("ORDER_STATUS_TEST_HOST", "orders.internal:9000");
        let config = AppConfig::from_toml_str(
            r#"
[client]
base_url = "http://${ORDER_STATUS_TEST_HOST}/api"
timeout_ms = 1500
"#,
        )
        .unwrap();
        std::env::remove_var("ORDER_STATUS_TEST_HOST");

        assert_eq!(config.client.base_url, "http://orders.internal:9000/api");
        assert_eq!(config.client.timeout_ms, 1500);
    }

    #[test]
    fn test_unknown_env_var_left_literal() {
        let out = AppConfig::substitute_env_vars("x = \"${ORDER_STATUS_SURELY_UNSET_VAR}\"");
        assert_eq!(out, "x = \"${ORDER_STATUS_SURELY_UNSET_VAR}\"");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[client\nbase_url =").unwrap_err();
        assert!(matches!(err, ApiError::ConfigValidationError { .. }));
    }
}

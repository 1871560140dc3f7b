use order_status_client::utils::validation::Validate;
use order_status_client::{ApiClient, AppConfig, ConfigProvider, ThemeConfig};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("order-status.toml");
    std::fs::write(
        &path,
        r##"
[client]
base_url = "https://orders.example.com/api"
timeout_ms = 8000

[client.headers]
X-Client = "storefront"

[theme]
content = ["./templates/**/*.html"]

[theme.colors]
primary = "#111111"
secondary = "#222"
accent = "#abcdef"
"##,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.base_url(), "https://orders.example.com/api");
    assert_eq!(config.timeout(), Duration::from_secs(8));
    assert_eq!(config.default_headers().len(), 3);

    let theme = config.theme();
    assert_eq!(theme.content, vec!["./templates/**/*.html".to_string()]);
    assert_eq!(theme.colors.secondary, "#222");
    assert!(theme.plugins.is_empty());

    let client = ApiClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://orders.example.com/api");
    assert_eq!(client.timeout(), Duration::from_millis(8000));
    assert_eq!(
        client.default_headers().get("x-client").map(String::as_str),
        Some("storefront")
    );
    assert_eq!(
        client.default_headers().get("accept").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = AppConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, order_status_client::ApiError::IoError(_)));
}

#[test]
fn test_invalid_theme_fails_validation() {
    let config = AppConfig::from_toml_str(
        r##"
[theme]
content = ["./index.html"]

[theme.colors]
primary = "navy"
secondary = "#34495e"
accent = "#3498db"
"##,
    )
    .unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn test_theme_defaults_when_section_absent() {
    let config = AppConfig::from_toml_str("[client]\ntimeout_ms = 5000\n").unwrap();
    assert_eq!(config.theme(), ThemeConfig::default());

    let rendered = config.theme().to_json_pretty().unwrap();
    assert!(rendered.contains("\"primary\": \"#2c3e50\""));
    assert!(rendered.contains("./index.html"));
}

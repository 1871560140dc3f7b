use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Connection failed: {0}")]
    Connection(reqwest::Error),

    #[error("API request failed: {0}")]
    Request(reqwest::Error),

    /// `body` holds the response bytes exactly as received.
    #[error("Server responded with status {status}: {}", String::from_utf8_lossy(.body))]
    Status { status: u16, body: Vec<u8> },

    #[error("Response decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ApiError {
    /// Maps a transport error onto the variant the caller can act on.
    pub fn from_transport(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout { timeout_ms }
        } else if err.is_connect() {
            ApiError::Connection(err)
        } else {
            ApiError::Request(err)
        }
    }

    /// HTTP status carried by a non-success response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Lossy text view of a non-success response body.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        match self {
            ApiError::Status { body, .. } => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Timeout { timeout_ms } => {
                format!("The order service did not answer within {}ms", timeout_ms)
            }
            ApiError::Connection(_) => "Could not connect to the order service".to_string(),
            ApiError::Request(e) => format!("The request could not be completed: {}", e),
            ApiError::Status { status, body } if body.is_empty() => {
                format!("The order service returned HTTP {}", status)
            }
            ApiError::Status { status, body } => format!(
                "The order service returned HTTP {}: {}",
                status,
                String::from_utf8_lossy(body)
            ),
            ApiError::Decode(_) => "The order service returned a malformed response".to_string(),
            ApiError::InvalidUrl { url, .. } => format!("'{}' is not a usable address", url),
            ApiError::InvalidHeader { name, .. } => {
                format!("Header '{}' cannot be sent", name)
            }
            ApiError::IoError(e) => format!("File access failed: {}", e),
            ApiError::ConfigError { message } => format!("Configuration problem: {}", message),
            ApiError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            ApiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ApiError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::Timeout { .. } => "Retry later or raise --timeout-ms",
            ApiError::Connection(_) => "Check that the backend is running and --base-url is correct",
            ApiError::Request(_) => "Run with --verbose to see the request details",
            ApiError::Status { status, .. } if (400..500).contains(status) => {
                "Check the customer and invoice numbers"
            }
            ApiError::Status { .. } => "The backend reported a failure, try again later",
            ApiError::Decode(_) => "Make sure --base-url points at the order API",
            ApiError::InvalidUrl { .. } => "Use an absolute http:// or https:// base address",
            ApiError::InvalidHeader { .. } => "Remove non-ASCII characters from the header",
            ApiError::IoError(_) => "Check the file path and permissions",
            ApiError::ConfigError { .. }
            | ApiError::ConfigValidationError { .. }
            | ApiError::InvalidConfigValueError { .. }
            | ApiError::MissingConfigError { .. } => "Fix the configuration file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

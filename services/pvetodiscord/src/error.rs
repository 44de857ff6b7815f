//! Error types for the webhook relay

/// Errors that can occur while relaying a notification
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to decode webhook request: {0}")]
    Decode(String),

    #[error("Missing or non-string field '{0}' in webhook request")]
    MissingField(String),

    #[error("Failed to write log file: {0}")]
    Persistence(String),

    #[error("Discord webhook returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

//! Configuration types for the webhook relay

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::payload::Author;
use crate::severity::ColorTable;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub formatter: FormatterConfig,
    #[serde(default)]
    pub request_fields: RequestFields,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Expose `GET /count`
    #[serde(default = "default_true")]
    pub count_endpoint: bool,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            count_endpoint: true,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Where full reports are written and served from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_logs_directory")]
    pub directory: PathBuf,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            directory: default_logs_directory(),
        }
    }
}

/// Rendering rules for outbound notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Content shorter than this many characters is sent inline
    #[serde(default = "default_inline_threshold")]
    pub inline_threshold: usize,
    /// Titles containing this marker are always summarized
    #[serde(default = "default_archive_marker")]
    pub archive_marker: Option<String>,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_author")]
    pub author: Option<Author>,
    #[serde(default = "default_footer_text")]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub colors: ColorTable,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            inline_threshold: default_inline_threshold(),
            archive_marker: default_archive_marker(),
            username: default_username(),
            author: default_author(),
            footer_text: default_footer_text(),
            colors: ColorTable::default(),
        }
    }
}

/// JSON field names of the inbound webhook request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFields {
    #[serde(default = "default_webhook_field")]
    pub discord_webhook: String,
    #[serde(default = "default_content_field")]
    pub message_content: String,
    #[serde(default = "default_log_url_field")]
    pub url_log_accessible: String,
    #[serde(default = "default_severity_field")]
    pub severity: String,
    #[serde(default = "default_title_field")]
    pub title: String,
}

impl Default for RequestFields {
    fn default() -> Self {
        Self {
            discord_webhook: default_webhook_field(),
            message_content: default_content_field(),
            url_log_accessible: default_log_url_field(),
            severity: default_severity_field(),
            title: default_title_field(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_logs_directory() -> PathBuf {
    PathBuf::from("logs")
}

fn default_inline_threshold() -> usize {
    4096
}

fn default_archive_marker() -> Option<String> {
    Some("vzdump".to_string())
}

fn default_username() -> String {
    "Ordis".to_string()
}

fn default_author() -> Option<Author> {
    Some(Author {
        name: "Proxmox VE".to_string(),
        icon_url: "https://pbs.proxmox.com/docs/_static/favicon.ico".to_string(),
    })
}

fn default_footer_text() -> Option<String> {
    Some("Ordis via pvetodiscord".to_string())
}

fn default_webhook_field() -> String {
    "discordWebhook".to_string()
}

fn default_content_field() -> String {
    "messageContent".to_string()
}

fn default_log_url_field() -> String {
    "urlLogAccessible".to_string()
}

fn default_severity_field() -> String {
    "severity".to_string()
}

fn default_title_field() -> String {
    "messageTitle".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::RelayError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

//! BDD test world for pvetodiscord

use std::sync::Arc;

use cucumber::World;
use pvetodiscord::config::FormatterConfig;
use pvetodiscord::formatter::RenderStrategy;
use pvetodiscord::request::NotificationRequest;

use crate::doubles::{RecordingHttpClient, RecordingPersister};

#[derive(Debug, Default, World)]
pub struct RelayWorld {
    // Summarizer testing
    pub report: String,
    pub summary: Option<String>,

    // Formatter testing
    pub formatter_config: FormatterConfig,
    pub persister: Option<Arc<RecordingPersister>>,
    pub request: Option<NotificationRequest>,
    pub strategy: Option<RenderStrategy>,
    pub description: Option<String>,
    pub color: Option<String>,

    // Webhook testing
    pub http: Option<Arc<RecordingHttpClient>>,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}

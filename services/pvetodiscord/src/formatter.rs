//! Builds the Discord payload for a notification request

use std::sync::Arc;

use crate::config::FormatterConfig;
use crate::payload::{Embed, Footer, WebhookPayload};
use crate::persister::LogPersister;
use crate::request::NotificationRequest;
use crate::summarizer::summarize;

/// Shortest summary worth putting in a code block
const MIN_SUMMARY_LEN: usize = 2;

const PERSISTENCE_FALLBACK: &str = "The detailed log could not be saved.";

/// How the request content ends up in the embed description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Raw content in a literal block
    Inline,
    /// Summary table in a literal block plus a link to the persisted report
    Summarized,
}

/// Turns requests into webhook payloads
pub struct Formatter {
    config: FormatterConfig,
    persister: Arc<dyn LogPersister>,
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("config", &self.config)
            .finish()
    }
}

impl Formatter {
    pub fn new(config: FormatterConfig, persister: Arc<dyn LogPersister>) -> Self {
        tracing::debug!(
            "Created Formatter with inline threshold {} and archive marker {:?}",
            config.inline_threshold,
            config.archive_marker
        );
        Self { config, persister }
    }

    /// Choose the rendering strategy for a request
    pub fn strategy_for(&self, request: &NotificationRequest) -> RenderStrategy {
        let fits_inline = request.message_content.chars().count() < self.config.inline_threshold;
        let is_archive_report = self
            .config
            .archive_marker
            .as_deref()
            .is_some_and(|marker| request.title.contains(marker));

        if fits_inline && !is_archive_report {
            RenderStrategy::Inline
        } else {
            RenderStrategy::Summarized
        }
    }

    /// Render the embed description, persisting the report when summarizing
    pub async fn describe(&self, request: &NotificationRequest) -> String {
        match self.strategy_for(request) {
            RenderStrategy::Inline => format!("```{}```", request.message_content),
            RenderStrategy::Summarized => self.describe_summarized(request).await,
        }
    }

    async fn describe_summarized(&self, request: &NotificationRequest) -> String {
        let summary = summarize(&request.message_content);

        let tail = match self.persister.persist(&request.message_content).await {
            Ok(file_name) => format!(
                "You can find the detailed log [here]({}{})",
                request.url_log_accessible, file_name
            ),
            Err(e) => {
                tracing::error!("Failed to write log file: {}", e);
                PERSISTENCE_FALLBACK.to_string()
            }
        };

        if summary.len() < MIN_SUMMARY_LEN {
            tail
        } else {
            format!("```{}``` {}", summary, tail)
        }
    }

    /// Build the full webhook payload for a request
    pub async fn build_payload(&self, request: &NotificationRequest) -> WebhookPayload {
        let description = self.describe(request).await;
        let color = self.config.colors.color_for(request.severity);

        tracing::debug!(
            "Formatted '{}' with severity {} ({} description chars)",
            request.title,
            request.severity,
            description.chars().count()
        );

        WebhookPayload {
            username: self.config.username.clone(),
            content: String::new(),
            embeds: vec![Embed {
                author: self.config.author.clone(),
                title: request.title.clone(),
                description,
                color: color.to_string(),
                footer: self.config.footer_text.clone().map(|text| Footer { text }),
            }],
        }
    }
}

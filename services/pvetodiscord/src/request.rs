//! Decoding of inbound webhook requests

use serde_json::{Map, Value};

use crate::config::RequestFields;
use crate::severity::Severity;
use crate::{RelayError, Result};

/// A decoded notification request from Proxmox VE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub discord_webhook: String,
    pub message_content: String,
    pub url_log_accessible: String,
    pub severity: Severity,
    pub title: String,
}

impl NotificationRequest {
    /// Decode a request body.
    ///
    /// The body must be a JSON object. Every configured field except the
    /// severity must be present and hold a string; an absent severity means
    /// notice, a present one must still be a string.
    pub fn from_json(body: &[u8], fields: &RequestFields) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RelayError::Decode(e.to_string()))?;
        let kind = json_type_name(&value);
        let Value::Object(object) = value else {
            return Err(RelayError::Decode(format!("expected a JSON object, got {kind}")));
        };

        let severity = match object.get(&fields.severity) {
            None | Some(Value::Null) => Severity::default(),
            Some(Value::String(label)) => Severity::from_label(label),
            Some(_) => return Err(RelayError::MissingField(fields.severity.clone())),
        };

        Ok(Self {
            discord_webhook: required_string(&object, &fields.discord_webhook)?,
            message_content: required_string(&object, &fields.message_content)?,
            url_log_accessible: required_string(&object, &fields.url_log_accessible)?,
            severity,
            title: required_string(&object, &fields.title)?,
        })
    }
}

fn required_string(object: &Map<String, Value>, name: &str) -> Result<String> {
    match object.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(RelayError::MissingField(name.to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

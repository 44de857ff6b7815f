//! Severity labels and their embed colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of a notification, controls the embed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Info,
    #[default]
    Notice,
    Warning,
    Error,
}

impl Severity {
    /// Map a label to a severity. Matching is exact and case-sensitive;
    /// anything unrecognized is a notice.
    pub fn from_label(label: &str) -> Self {
        match label {
            "info" => Severity::Info,
            "notice" => Severity::Notice,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Notice,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Notice => write!(f, "notice"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Embed color per severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    #[serde(default = "default_info_color")]
    pub info: u32,
    #[serde(default = "default_notice_color")]
    pub notice: u32,
    #[serde(default = "default_warning_color")]
    pub warning: u32,
    #[serde(default = "default_error_color")]
    pub error: u32,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            info: default_info_color(),
            notice: default_notice_color(),
            warning: default_warning_color(),
            error: default_error_color(),
        }
    }
}

impl ColorTable {
    pub fn color_for(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Info => self.info,
            Severity::Notice => self.notice,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

fn default_info_color() -> u32 {
    2123412
}

fn default_notice_color() -> u32 {
    9807270
}

fn default_warning_color() -> u32 {
    15105570
}

fn default_error_color() -> u32 {
    15548997
}

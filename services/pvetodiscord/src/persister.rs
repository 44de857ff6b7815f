//! Persistence of full reports to the logs directory

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};

use crate::RelayError;

const FILENAME_FORMAT: &str = "%Y-%m-%d.%H-%M-%S.log";

/// Abstraction over report storage for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait LogPersister: Send + Sync {
    /// Store the content and return the generated file name
    async fn persist(&self, content: &str) -> crate::Result<String>;
}

/// File name for a report written at `timestamp`.
///
/// Second precision: two reports within the same second share a name and
/// the later write replaces the earlier one.
pub fn log_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(FILENAME_FORMAT).to_string()
}

/// Writes reports into a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FsLogPersister {
    directory: PathBuf,
}

impl FsLogPersister {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl LogPersister for FsLogPersister {
    async fn persist(&self, content: &str) -> crate::Result<String> {
        let file_name = log_file_name(&Local::now());
        let path = self.directory.join(&file_name);

        if let Err(e) = tokio::fs::write(&path, content).await {
            return Err(RelayError::Persistence(format!("writing {}: {}", path.display(), e)));
        }

        tracing::info!(
            "Log file {} written to disk ({} bytes)",
            file_name,
            content.len()
        );
        Ok(file_name)
    }
}

//! Recording test doubles for the persistence and HTTP seams

use std::sync::Mutex;

use async_trait::async_trait;
use pvetodiscord::io::{HttpClient, HttpResponse};
use pvetodiscord::persister::LogPersister;
use pvetodiscord::RelayError;

pub const PERSISTED_FILE_NAME: &str = "2024-05-01.12-00-00.log";

/// Persister that remembers every report instead of writing it
#[derive(Debug, Default)]
pub struct RecordingPersister {
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingPersister {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LogPersister for RecordingPersister {
    async fn persist(&self, content: &str) -> pvetodiscord::Result<String> {
        self.calls.lock().unwrap().push(content.to_string());
        if self.fail {
            return Err(RelayError::Persistence("disk full".to_string()));
        }
        Ok(PERSISTED_FILE_NAME.to_string())
    }
}

/// Discord stand-in that answers with a fixed status, or refuses connections
#[derive(Debug)]
pub struct RecordingHttpClient {
    pub status: Option<u16>,
    pub body: String,
    pub requests: Mutex<Vec<(String, String)>>,
}

impl RecordingHttpClient {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: None,
            body: String::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for RecordingHttpClient {
    async fn post_json(&self, url: &str, body: String) -> pvetodiscord::Result<HttpResponse> {
        self.requests.lock().unwrap().push((url.to_string(), body));
        match self.status {
            Some(status) => Ok(HttpResponse {
                status,
                body: self.body.clone(),
            }),
            None => Err(RelayError::Http(format!("POST {url} failed: connection refused"))),
        }
    }
}

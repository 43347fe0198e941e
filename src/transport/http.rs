//! HTTP ingestion transport
//!
//! Posts each record as a JSON body to the configured ingestion URL
//! with agent auth headers. One request per record, fire-and-forget:
//! no retry, no queue, and no request timeout (a known gap, not a
//! guarantee).

use super::Transport;
use crate::config::AgentConfig;
use crate::error::{Result, TelemetryError};
use crate::types::TelemetryRecord;
use async_trait::async_trait;

/// Best-effort HTTP POST transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh HTTP client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, record: &TelemetryRecord, config: &AgentConfig) -> Result<()> {
        let response = self
            .client
            .post(config.ingestion_url.as_deref().unwrap_or_default())
            .header("Content-Type", "application/json")
            .header("X-Agent-Key", config.agent_key.as_deref().unwrap_or(""))
            .header("X-Project-Id", config.project_id.as_deref().unwrap_or(""))
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Ingest {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}

//! In-memory transport for testing and single-process use
//!
//! Captures sent records instead of performing network I/O, and can be
//! flipped into a failing mode to exercise the isolate-and-report path.

use super::Transport;
use crate::config::AgentConfig;
use crate::error::{Result, TelemetryError};
use crate::types::TelemetryRecord;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Transport that records payloads in memory
#[derive(Default)]
pub struct MemoryTransport {
    sent: Mutex<Vec<TelemetryRecord>>,
    failing: AtomicBool,
}

impl MemoryTransport {
    /// Create an empty, succeeding transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of all records sent so far
    pub async fn sent(&self) -> Vec<TelemetryRecord> {
        self.sent.lock().await.clone()
    }

    /// Number of records sent so far
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&self, record: &TelemetryRecord, _config: &AgentConfig) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TelemetryError::Ingest { status: 500 });
        }
        self.sent.lock().await.push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventKind;

    #[tokio::test]
    async fn test_captures_records() {
        let transport = MemoryTransport::new();
        let config = AgentConfig::default();

        let record = TelemetryRecord::new(EventKind::LogEvent);
        transport.send(&record, &config).await.unwrap();

        assert_eq!(transport.sent_count().await, 1);
        assert_eq!(transport.sent().await[0].event_type, EventKind::LogEvent);
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let transport = MemoryTransport::new();
        let config = AgentConfig::default();
        let record = TelemetryRecord::new(EventKind::HttpCall);

        transport.set_failing(true);
        assert!(transport.send(&record, &config).await.is_err());
        assert_eq!(transport.sent_count().await, 0);

        transport.set_failing(false);
        assert!(transport.send(&record, &config).await.is_ok());
        assert_eq!(transport.sent_count().await, 1);
    }
}

//! Transport trait — the seam between record dispatch and the network
//!
//! Implementations deliver one normalized record to the ingestion
//! endpoint. Delivery is best-effort by design: a transport performs a
//! single attempt with no retry, queue, or buffer, and its failures are
//! isolated at the dispatch boundary rather than surfaced to the host.

use crate::config::AgentConfig;
use crate::error::Result;
use crate::types::TelemetryRecord;
use async_trait::async_trait;

pub mod http;
pub mod memory;

/// Core trait for telemetry transports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver one record using the configuration captured at dispatch
    /// time (never a cached copy)
    async fn send(&self, record: &TelemetryRecord, config: &AgentConfig) -> Result<()>;

    /// Transport name (e.g. "http", "memory")
    fn name(&self) -> &str;
}

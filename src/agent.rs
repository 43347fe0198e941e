//! High-level telemetry agent: lifecycle and record dispatch
//!
//! `TelemetryAgent` owns the active configuration, the transport, and
//! the refresh-scheduler handle. There is no ambient global state; host
//! applications typically keep one agent instance for the process,
//! while tests run isolated instances in parallel.

use crate::config::AgentConfig;
use crate::error::{Result, TelemetryError};
use crate::normalize;
use crate::scheduler::RefreshScheduler;
use crate::transport::http::HttpTransport;
use crate::transport::Transport;
use crate::types::{
    HttpCallContext, LlmCallContext, LogEventContext, PolicyViolationContext, TelemetryRecord,
};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Telemetry agent over a pluggable transport
pub struct TelemetryAgent {
    transport: Arc<dyn Transport>,

    /// Active configuration; `None` until `init`, cleared by `shutdown`
    config: RwLock<Option<AgentConfig>>,

    /// Handle for the recurring policy-refresh task
    refresher: Mutex<RefreshScheduler>,
}

impl TelemetryAgent {
    /// Create an agent over the given transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create an agent sharing an existing transport handle
    ///
    /// Useful in tests that inspect the transport after dispatching.
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config: RwLock::new(None),
            refresher: Mutex::new(RefreshScheduler::new()),
        }
    }

    /// Production agent posting to the configured ingestion URL
    pub fn http() -> Self {
        Self::new(HttpTransport::new())
    }

    /// Get the transport name
    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Install configuration and start the refresh scheduler
    ///
    /// Environment-sourced defaults are merged with `overrides`
    /// (overrides win field by field) and the refresh interval defaults
    /// to 60s when unspecified. Re-init replaces the previous
    /// configuration; the scheduler is restarted at the new interval,
    /// or stopped when the interval is zero.
    pub async fn init(&self, overrides: AgentConfig) {
        let config = AgentConfig::from_env()
            .merged_with(overrides)
            .with_default_interval();
        let interval_ms = config.fetch_policies_interval_ms.unwrap_or(0);

        {
            let mut current = self.config.write().await;
            *current = Some(config);
        }

        let mut refresher = self.refresher.lock().await;
        if interval_ms > 0 {
            refresher.start(interval_ms);
        } else {
            refresher.stop();
        }

        tracing::info!(
            transport = self.transport.name(),
            interval_ms,
            "Telemetry agent initialized"
        );
    }

    /// Current configuration, or an integration error
    ///
    /// Fails with `NotInitialized` before `init` (or after `shutdown`),
    /// and `MissingField` when `ingestion_url` or `agent_key` is
    /// absent. Dispatch calls this immediately before every send and
    /// never caches the result.
    pub async fn get_active_or_fail(&self) -> Result<AgentConfig> {
        let guard = self.config.read().await;
        let config = guard.as_ref().ok_or(TelemetryError::NotInitialized)?;
        config.validate()?;
        Ok(config.clone())
    }

    /// Whether configuration is currently installed
    pub async fn is_initialized(&self) -> bool {
        self.config.read().await.is_some()
    }

    /// Whether the refresh scheduler is currently running
    pub async fn refresh_running(&self) -> bool {
        self.refresher.lock().await.is_running()
    }

    /// Cadence of the running refresh scheduler, if any
    pub async fn refresh_interval_ms(&self) -> Option<u64> {
        self.refresher.lock().await.interval_ms()
    }

    /// Stop the refresh scheduler and clear configuration
    ///
    /// Idempotent; in-flight transport sends are not cancelled and may
    /// outlive this call.
    pub async fn shutdown(&self) {
        self.refresher.lock().await.stop();

        let mut current = self.config.write().await;
        if current.take().is_some() {
            tracing::info!("Telemetry agent shut down");
        }
    }

    /// Record an observed LLM invocation
    pub async fn record_llm_call(&self, ctx: LlmCallContext) -> Result<()> {
        self.dispatch(normalize::normalize_llm_call(ctx)).await
    }

    /// Record an observed outbound HTTP call
    pub async fn record_http_call(&self, ctx: HttpCallContext) -> Result<()> {
        self.dispatch(normalize::normalize_http_call(ctx)).await
    }

    /// Record an observed application log event
    pub async fn record_log_event(&self, ctx: LogEventContext) -> Result<()> {
        self.dispatch(normalize::normalize_log_event(ctx)).await
    }

    /// Record an observed policy violation
    pub async fn record_policy_violation(&self, ctx: PolicyViolationContext) -> Result<()> {
        self.dispatch(normalize::normalize_policy_violation(ctx))
            .await
    }

    /// Send a normalized record through the transport
    ///
    /// Integration errors propagate to the caller; transport faults are
    /// logged and swallowed so telemetry never disrupts the host.
    async fn dispatch(&self, mut record: TelemetryRecord) -> Result<()> {
        let config = self.get_active_or_fail().await?;

        if record.catalog_agent_id.is_none() {
            record.catalog_agent_id = config.agent_id.clone();
        }

        if let Err(e) = self.transport.send(&record, &config).await {
            tracing::warn!(
                transport = self.transport.name(),
                event_type = ?record.event_type,
                error = %e,
                "Failed to deliver telemetry event"
            );
        }

        Ok(())
    }
}

//! # catalog-telemetry
//!
//! In-process telemetry agent for applications that call LLM providers
//! and external HTTP endpoints.
//!
//! ## Overview
//!
//! The agent observes selected call sites (LLM invocations, outbound
//! HTTP calls, log events, policy violations), locally classifies the
//! associated text for PII and credential-like secrets, normalizes the
//! observation into a compact wire record, and forwards it best-effort
//! to a remote ingestion endpoint. Telemetry never blocks or crashes
//! the host: transport failures are logged and swallowed, and only
//! integration errors (agent not initialized, missing required
//! configuration) surface to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_telemetry::{AgentConfig, LlmCallContext, TelemetryAgent};
//!
//! # async fn example() -> catalog_telemetry::Result<()> {
//! let agent = TelemetryAgent::http();
//!
//! agent.init(AgentConfig {
//!     ingestion_url: Some("https://ingest.example.com/v1/events".into()),
//!     agent_key: Some("key-123".into()),
//!     ..Default::default()
//! }).await;
//!
//! agent.record_llm_call(LlmCallContext {
//!     provider: "openai".into(),
//!     model: Some("gpt-4o".into()),
//!     prompt: "Draft a reply to jane.doe@example.com".into(),
//!     ..Default::default()
//! }).await?;
//!
//! agent.shutdown().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **classifier** — pure regex classifiers mapping text to flag sets
//! - **normalize** — call context → `TelemetryRecord` wire payload
//! - **TelemetryAgent** — configuration lifecycle and record dispatch
//! - **Transport** trait — HTTP for production, in-memory for tests
//! - **RefreshScheduler** — recurring background policy-refresh task

pub mod agent;
pub mod classifier;
pub mod config;
pub mod error;
pub mod normalize;
pub mod scheduler;
pub mod transport;
pub mod types;

// Re-export core types
pub use agent::TelemetryAgent;
pub use classifier::{classify_pii, classify_secrets};
pub use config::{AgentConfig, DEFAULT_REFRESH_INTERVAL_MS};
pub use error::{Result, TelemetryError};
pub use scheduler::RefreshScheduler;
pub use types::{
    EventKind, HttpCallContext, LlmCallContext, LogEventContext, LogLevel, PiiFlags,
    PolicyViolationContext, SecretFlags, Severity, TelemetryRecord,
};

// Re-export transports for convenience
pub use transport::http::HttpTransport;
pub use transport::memory::MemoryTransport;
pub use transport::Transport;

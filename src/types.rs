//! Core types for the catalog-telemetry system
//!
//! Call contexts describe one observed call site and are built by the
//! host per call, never stored. `TelemetryRecord` is the flat wire
//! payload; all field names serialize as snake_case.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four observed call-site kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    LlmCall,
    HttpCall,
    LogEvent,
    PolicyViolation,
}

/// Log severity for observed log events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Severity of a policy violation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

/// An observed LLM invocation
#[derive(Debug, Clone, Default)]
pub struct LlmCallContext {
    pub provider: String,
    pub model: Option<String>,
    pub region: Option<String>,
    pub route: Option<String>,
    pub tenant_id: Option<String>,
    pub prompt: String,
    pub response: Option<String>,
}

/// An observed outbound HTTP call
#[derive(Debug, Clone, Default)]
pub struct HttpCallContext {
    pub host: String,
    pub path: Option<String>,
    pub ip_address: Option<String>,
    pub route: Option<String>,
    pub tenant_id: Option<String>,
    pub payload_sample: Option<String>,
}

/// An observed application log event
#[derive(Debug, Clone, Default)]
pub struct LogEventContext {
    pub level: LogLevel,
    pub message: String,
    pub route: Option<String>,
    pub tenant_id: Option<String>,
}

/// An observed policy violation
#[derive(Debug, Clone, Default)]
pub struct PolicyViolationContext {
    pub violation_type: String,
    pub severity: Severity,
    pub route: Option<String>,
    pub tenant_id: Option<String>,
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
}

/// PII detector flags
///
/// A missing key means "not evaluated", never a negative result:
/// `None` fields are omitted from the wire payload, so the default
/// (all-`None`) value serializes as an empty mapping. The classifier
/// always fills the required detectors (email, phone, generic_id);
/// the optional detectors are filled only for non-empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_id: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<bool>,
}

/// Secret-pattern detector flags
///
/// Same omitted-means-unevaluated semantics as [`PiiFlags`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_pattern: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_pattern: Option<bool>,
}

/// A normalized telemetry event — the wire payload
///
/// Flat structure, created fresh per call, sent once, never persisted.
/// Sensitive text is represented by length only; the raw prompt,
/// response, or payload sample never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub event_type: EventKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// Length-only proxy for the prompt text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_length: Option<usize>,

    /// Length-only proxy for the response text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_length: Option<usize>,

    #[serde(default)]
    pub pii_flags: PiiFlags,

    #[serde(default)]
    pub secret_flags: SecretFlags,

    /// Violation-type → true, set only for policy violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_flags: Option<BTreeMap<String, bool>>,

    /// Free-form per-event metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// Agent identity, injected from configuration when the caller
    /// didn't supply one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_agent_id: Option<String>,
}

impl TelemetryRecord {
    /// Create an empty record of the given kind
    pub fn new(event_type: EventKind) -> Self {
        Self {
            event_type,
            provider: None,
            model: None,
            region: None,
            host: None,
            path: None,
            ip_address: None,
            route: None,
            tenant_id: None,
            prompt_length: None,
            response_length: None,
            pii_flags: PiiFlags::default(),
            secret_flags: SecretFlags::default(),
            policy_flags: None,
            metadata: None,
            catalog_agent_id: None,
        }
    }
}

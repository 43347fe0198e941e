//! Call-context normalization into wire records
//!
//! One constructor per call-context variant. Each runs the classifier
//! over the variant's primary sensitive text field and shapes the
//! resulting `TelemetryRecord`. The empty-vs-omitted asymmetry across
//! variants is intentional: a classified empty string yields all-false
//! required flags, while an absent payload sample or a non-classified
//! variant leaves the flag mappings unevaluated.

use crate::classifier::{classify_pii, classify_secrets};
use crate::types::{
    EventKind, HttpCallContext, LlmCallContext, LogEventContext, PolicyViolationContext,
    TelemetryRecord,
};
use std::collections::BTreeMap;

/// Normalize an observed LLM invocation
///
/// The prompt is classified locally; only prompt/response lengths cross
/// the wire, never the raw text.
pub fn normalize_llm_call(ctx: LlmCallContext) -> TelemetryRecord {
    let mut record = TelemetryRecord::new(EventKind::LlmCall);
    record.pii_flags = classify_pii(&ctx.prompt);
    record.secret_flags = classify_secrets(&ctx.prompt);
    record.prompt_length = Some(ctx.prompt.len());
    record.response_length = ctx.response.map(|r| r.len());
    record.provider = Some(ctx.provider);
    record.model = ctx.model;
    record.region = ctx.region;
    record.route = ctx.route;
    record.tenant_id = ctx.tenant_id;
    record
}

/// Normalize an observed outbound HTTP call
///
/// The payload sample is classified only when present; an absent sample
/// leaves the flag mappings empty (not evaluated), not all-false.
pub fn normalize_http_call(ctx: HttpCallContext) -> TelemetryRecord {
    let mut record = TelemetryRecord::new(EventKind::HttpCall);
    if let Some(sample) = &ctx.payload_sample {
        record.pii_flags = classify_pii(sample);
        record.secret_flags = classify_secrets(sample);
    }
    record.host = Some(ctx.host);
    record.path = ctx.path;
    record.ip_address = ctx.ip_address;
    record.route = ctx.route;
    record.tenant_id = ctx.tenant_id;
    record
}

/// Normalize an observed log event
///
/// Level and classification flags ride in `metadata` for log events;
/// the top-level flag mappings stay unevaluated.
pub fn normalize_log_event(ctx: LogEventContext) -> TelemetryRecord {
    let mut record = TelemetryRecord::new(EventKind::LogEvent);

    let pii = classify_pii(&ctx.message);
    let secrets = classify_secrets(&ctx.message);

    let mut metadata = serde_json::Map::new();
    metadata.insert(
        "level".to_string(),
        serde_json::to_value(ctx.level).unwrap_or_default(),
    );
    metadata.insert(
        "pii_flags".to_string(),
        serde_json::to_value(&pii).unwrap_or_default(),
    );
    metadata.insert(
        "secret_flags".to_string(),
        serde_json::to_value(&secrets).unwrap_or_default(),
    );

    record.metadata = Some(metadata);
    record.route = ctx.route;
    record.tenant_id = ctx.tenant_id;
    record
}

/// Normalize an observed policy violation
///
/// No text is classified; the violation type becomes a single-entry
/// `policy_flags` mapping and severity plus caller details fold into
/// `metadata`.
pub fn normalize_policy_violation(ctx: PolicyViolationContext) -> TelemetryRecord {
    let mut record = TelemetryRecord::new(EventKind::PolicyViolation);

    let mut policy_flags = BTreeMap::new();
    policy_flags.insert(ctx.violation_type, true);
    record.policy_flags = Some(policy_flags);

    let mut metadata = serde_json::Map::new();
    metadata.insert(
        "severity".to_string(),
        serde_json::to_value(ctx.severity).unwrap_or_default(),
    );
    if let Some(details) = ctx.details {
        for (key, value) in details {
            metadata.insert(key, value);
        }
    }

    record.metadata = Some(metadata);
    record.route = ctx.route;
    record.tenant_id = ctx.tenant_id;
    record
}

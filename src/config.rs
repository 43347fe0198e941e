//! Agent configuration and environment sourcing
//!
//! Configuration is an explicitly owned handle installed on the agent
//! by `init` and cleared by `shutdown`, not ambient global state, so
//! tests can run isolated agent instances in parallel.

use crate::error::{Result, TelemetryError};
use serde::{Deserialize, Serialize};

/// Environment variable providing the default project id
pub const ENV_PROJECT_ID: &str = "CATALOG_PROJECT_ID";
/// Environment variable providing the default ingestion URL
pub const ENV_INGESTION_URL: &str = "CATALOG_INGESTION_URL";
/// Environment variable providing the default agent key
pub const ENV_AGENT_KEY: &str = "CATALOG_AGENT_KEY";
/// Environment variable providing the default agent id
pub const ENV_AGENT_ID: &str = "CATALOG_AGENT_ID";

/// Default policy-refresh cadence when `init` leaves it unspecified
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Telemetry agent configuration
///
/// All fields are optional at construction; `ingestion_url` and
/// `agent_key` must be present before any dispatch. An interval of
/// zero (or absent after merging, though `init` fills the default)
/// disables the refresh scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_policies_interval_ms: Option<u64>,
}

impl AgentConfig {
    /// Read environment-sourced defaults
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Self {
        Self {
            project_id: env_var(ENV_PROJECT_ID),
            ingestion_url: env_var(ENV_INGESTION_URL),
            agent_key: env_var(ENV_AGENT_KEY),
            agent_id: env_var(ENV_AGENT_ID),
            fetch_policies_interval_ms: None,
        }
    }

    /// Merge `overrides` over `self`, field by field; overrides win
    pub fn merged_with(mut self, overrides: AgentConfig) -> Self {
        if overrides.project_id.is_some() {
            self.project_id = overrides.project_id;
        }
        if overrides.ingestion_url.is_some() {
            self.ingestion_url = overrides.ingestion_url;
        }
        if overrides.agent_key.is_some() {
            self.agent_key = overrides.agent_key;
        }
        if overrides.agent_id.is_some() {
            self.agent_id = overrides.agent_id;
        }
        if overrides.fetch_policies_interval_ms.is_some() {
            self.fetch_policies_interval_ms = overrides.fetch_policies_interval_ms;
        }
        self
    }

    /// Fill the default refresh interval when none was supplied
    pub fn with_default_interval(mut self) -> Self {
        if self.fetch_policies_interval_ms.is_none() {
            self.fetch_policies_interval_ms = Some(DEFAULT_REFRESH_INTERVAL_MS);
        }
        self
    }

    /// Check the fields required before any dispatch
    pub fn validate(&self) -> Result<()> {
        if self.ingestion_url.is_none() {
            return Err(TelemetryError::MissingField {
                field: "ingestion_url",
            });
        }
        if self.agent_key.is_none() {
            return Err(TelemetryError::MissingField { field: "agent_key" });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_win() {
        let defaults = AgentConfig {
            project_id: Some("env-project".into()),
            ingestion_url: Some("https://env.example.com/ingest".into()),
            agent_key: Some("env-key".into()),
            agent_id: None,
            fetch_policies_interval_ms: None,
        };

        let overrides = AgentConfig {
            ingestion_url: Some("https://override.example.com/ingest".into()),
            agent_id: Some("agent-42".into()),
            ..Default::default()
        };

        let merged = defaults.merged_with(overrides);
        assert_eq!(merged.project_id.as_deref(), Some("env-project"));
        assert_eq!(
            merged.ingestion_url.as_deref(),
            Some("https://override.example.com/ingest")
        );
        assert_eq!(merged.agent_key.as_deref(), Some("env-key"));
        assert_eq!(merged.agent_id.as_deref(), Some("agent-42"));
    }

    #[test]
    fn test_default_interval_applied() {
        let config = AgentConfig::default().with_default_interval();
        assert_eq!(
            config.fetch_policies_interval_ms,
            Some(DEFAULT_REFRESH_INTERVAL_MS)
        );
    }

    #[test]
    fn test_explicit_interval_kept() {
        let config = AgentConfig {
            fetch_policies_interval_ms: Some(0),
            ..Default::default()
        }
        .with_default_interval();
        assert_eq!(config.fetch_policies_interval_ms, Some(0));
    }

    #[test]
    fn test_validate_missing_url() {
        let config = AgentConfig {
            agent_key: Some("k".into()),
            ..Default::default()
        };
        match config.validate() {
            Err(TelemetryError::MissingField { field }) => assert_eq!(field, "ingestion_url"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_missing_key() {
        let config = AgentConfig {
            ingestion_url: Some("https://x/ingest".into()),
            ..Default::default()
        };
        match config.validate() {
            Err(TelemetryError::MissingField { field }) => assert_eq!(field, "agent_key"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_complete() {
        let config = AgentConfig {
            ingestion_url: Some("https://x/ingest".into()),
            agent_key: Some("k1".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization_skips_none() {
        let config = AgentConfig {
            ingestion_url: Some("https://x/ingest".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("ingestion_url"));
        assert!(!json.contains("project_id"));
        assert!(!json.contains("agent_key"));
    }
}

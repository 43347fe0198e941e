//! Error types for catalog-telemetry

use thiserror::Error;

/// Errors that can occur in the telemetry agent
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Agent used before `init` (or after `shutdown`)
    #[error("Telemetry agent not initialized")]
    NotInitialized,

    /// A required configuration field is absent
    #[error("Missing required configuration field: {field}")]
    MissingField { field: &'static str },

    /// Network-level failure talking to the ingestion endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ingestion endpoint returned a non-success status
    #[error("Ingestion endpoint rejected event: HTTP {status}")]
    Ingest { status: u16 },

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Policy refresh hook failure
    #[error("Policy refresh failed: {0}")]
    Refresh(String),
}

impl TelemetryError {
    /// Whether this is an integration error (a caller bug).
    ///
    /// Integration errors propagate out of the record-* entry points.
    /// Everything else is a transient telemetry fault, isolated and
    /// logged at the transport or scheduler boundary.
    pub fn is_integration(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::MissingField { .. })
    }
}

/// Result type alias for telemetry operations
pub type Result<T> = std::result::Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_errors() {
        assert!(TelemetryError::NotInitialized.is_integration());
        assert!(TelemetryError::MissingField {
            field: "ingestion_url"
        }
        .is_integration());
    }

    #[test]
    fn test_transient_errors() {
        assert!(!TelemetryError::Ingest { status: 503 }.is_integration());
        assert!(!TelemetryError::Refresh("timeout".into()).is_integration());
    }

    #[test]
    fn test_error_display() {
        let err = TelemetryError::MissingField {
            field: "agent_key",
        };
        assert_eq!(
            err.to_string(),
            "Missing required configuration field: agent_key"
        );

        let err = TelemetryError::Ingest { status: 500 };
        assert!(err.to_string().contains("500"));
    }
}

//! Error types for alaska_core operations.

use crate::verify::Violation;
use thiserror::Error;

/// Core error type for the bear service client.
#[derive(Error, Debug)]
pub enum AlaskaError {
    /// The HTTP round trip could not complete (connection refused, DNS, timeout).
    #[error("{method} {url} failed: {source}")]
    Transport {
        /// HTTP method of the failed request
        method: String,
        /// Target URL of the failed request
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The response did not honour the service contract.
    #[error("contract violation: {0}")]
    ContractViolation(#[from] Violation),

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded (usually the request line)
        context: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// String is not one of the known bear types.
    #[error("unknown bear type: {0:?}")]
    InvalidBearType(String),

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The service never answered the readiness probe.
    #[error("service at {url} not ready after {waited_ms}ms: {reason}")]
    NotReady {
        /// Probed URL
        url: String,
        /// How long the wait loop ran
        waited_ms: u128,
        /// Reason reported by the last probe
        reason: String,
    },
}

impl AlaskaError {
    /// Returns true for status or field mismatches.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }

    /// Returns the violation when this is a contract error.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::ContractViolation(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Transport { .. } => Some(
                "Is the service running? Check the base URL or run 'alaska wait' first.",
            ),
            Self::NotReady { .. } => {
                Some("Start the service or raise [readiness] timeout_secs in the config.")
            }
            Self::InvalidBearType(_) => Some("Valid bear types are POLAR, BROWN, BLACK and GUMMY."),
            Self::ConfigError(_) => Some("Check the config file or pass --base-url explicitly."),
            _ => None,
        }
    }
}

/// Convenience Result type for alaska_core operations.
pub type Result<T> = std::result::Result<T, AlaskaError>;

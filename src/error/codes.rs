//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 3xx: Config errors
//! - 5xx: Fetch errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes.
///
/// Each variant maps to a numeric code (e.g., `FetchNetwork` -> E501).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Fetch errors (5xx)
    // ========================================
    /// E501: The catalogue source could not be reached
    FetchNetwork,
    /// E502: The catalogue payload could not be decoded
    FetchDecoding,
    /// E503: No catalogue source is available
    FetchUnavailable,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: IO operation failed
    IoError,
    /// E602: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Tracing subscriber could not be installed
    LoggingInit,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `FetchNetwork` -> 501).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,
            Self::FetchNetwork => 501,
            Self::FetchDecoding => 502,
            Self::FetchUnavailable => 503,
            Self::IoError => 601,
            Self::SerializationError => 602,
            Self::LoggingInit => 901,
        }
    }

    /// Get the error code as a formatted string (e.g., "E501").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => {
                "Check TOML syntax in confscout.toml and the CONFSCOUT_* environment variables"
            }
            Self::ConfigMissingRequired => {
                "Set the missing value in confscout.toml or through its CONFSCOUT_* environment variable"
            }
            Self::FetchNetwork => {
                "Check connectivity to the catalogue source; the previous catalogue stays usable"
            }
            Self::FetchDecoding => {
                "The catalogue payload is malformed. Check it against the expected conference JSON layout"
            }
            Self::FetchUnavailable => {
                "Configure a catalogue source with `catalog.source` or CONFSCOUT_CATALOG_SOURCE"
            }
            Self::IoError => "Check file permissions and ensure the path is accessible",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::LoggingInit => {
                "A global tracing subscriber is already installed; initialize logging once per process"
            }
        }
    }

    /// Get the category name for this error code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            3 => "config",
            5 => "fetch",
            6 => "storage",
            _ => "internal",
        }
    }

    /// Whether the user can plausibly recover by retrying or fixing input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::LoggingInit)
    }

    /// All error codes, in numeric order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::FetchNetwork,
            Self::FetchDecoding,
            Self::FetchUnavailable,
            Self::IoError,
            Self::SerializationError,
            Self::LoggingInit,
        ]
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}

//! Error handling for confscout.
//!
//! This module provides:
//! - [`FetchError`]: the failure reported by a catalogue fetch, forwarded to
//!   catalog observers verbatim
//! - [`ScoutError`]: the crate error for config, logging and IO
//! - [`ErrorCode`]: standardized error codes for machine parsing

mod codes;

use std::io;

use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Failure reported by a [`ConferenceFetcher`](crate::catalog::ConferenceFetcher).
///
/// The catalog never retries or wraps it; observers receive exactly what the
/// fetcher returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Catalogue source unavailable: {0}")]
    Unavailable(String),
}

impl FetchError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Network(_) => ErrorCode::FetchNetwork,
            Self::Decoding(_) => ErrorCode::FetchDecoding,
            Self::Unavailable(_) => ErrorCode::FetchUnavailable,
        }
    }
}

/// Main error type for confscout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl ScoutError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Fetch(err) => err.code(),
            Self::Logging(_) => ErrorCode::LoggingInit,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            Self::Fetch(err) => Some(serde_json::json!({ "fetch_error": err.to_string() })),
            _ => None,
        }
    }

    /// Recovery hint for this error.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        self.code().suggestion()
    }
}

/// Result type alias using ScoutError.
pub type Result<T> = std::result::Result<T, ScoutError>;

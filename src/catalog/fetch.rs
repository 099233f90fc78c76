//! Catalogue fetch collaborators.
//!
//! [`ConferenceFetcher`] is the seam the catalog depends on. Two reference
//! implementations ship with the crate:
//! - [`StaticFetcher`]: serves an in-memory corpus, with error injection for
//!   tests
//! - [`JsonFileFetcher`]: decodes a JSON catalogue from disk
//!
//! Network transport, retry and backoff belong to the embedding application.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use super::model::{Conference, PresentationType};
use crate::config::CatalogConfig;
use crate::error::{self, FetchError};

/// Loads the full conference corpus.
pub trait ConferenceFetcher: Send + Sync {
    /// Fetch every conference for the given presentation.
    ///
    /// Called from a background thread by
    /// [`TalkCatalog::request_fetch`](super::TalkCatalog::request_fetch).
    fn fetch(&self, presentation: PresentationType) -> Result<Vec<Conference>, FetchError>;
}

/// Decode a JSON catalogue: an array of conferences.
pub fn decode_conferences(raw: &str) -> Result<Vec<Conference>, FetchError> {
    serde_json::from_str(raw).map_err(|err| FetchError::Decoding(err.to_string()))
}

/// In-memory fetcher.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    corpus: Mutex<Vec<Conference>>,
    injected: Mutex<Option<FetchError>>,
}

impl StaticFetcher {
    pub fn new(corpus: Vec<Conference>) -> Self {
        Self {
            corpus: Mutex::new(corpus),
            injected: Mutex::new(None),
        }
    }

    /// Replace the corpus served by subsequent fetches.
    pub fn set_corpus(&self, corpus: Vec<Conference>) {
        *self.corpus.lock() = corpus;
    }

    /// Fail every subsequent fetch with `error` until cleared.
    pub fn inject_error(&self, error: FetchError) {
        *self.injected.lock() = Some(error);
    }

    pub fn clear_error(&self) {
        *self.injected.lock() = None;
    }
}

impl ConferenceFetcher for StaticFetcher {
    fn fetch(&self, _presentation: PresentationType) -> Result<Vec<Conference>, FetchError> {
        if let Some(err) = self.injected.lock().clone() {
            return Err(err);
        }
        Ok(self.corpus.lock().clone())
    }
}

/// Reads the catalogue from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileFetcher {
    path: PathBuf,
}

impl JsonFileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Fetcher for the configured `catalog.source`.
    pub fn from_config(config: &CatalogConfig) -> error::Result<Self> {
        Ok(Self::new(config.require_source()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConferenceFetcher for JsonFileFetcher {
    fn fetch(&self, presentation: PresentationType) -> Result<Vec<Conference>, FetchError> {
        debug!(path = %self.path.display(), %presentation, "reading catalogue file");
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            FetchError::Unavailable(format!("read {}: {err}", self.path.display()))
        })?;
        decode_conferences(&raw)
    }
}

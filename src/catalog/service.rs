//! The talk catalog: single owner of the fetched corpus.
//!
//! `backup` is the full corpus as last fetched and the only input to filter
//! and suggestion passes. `conferences` is the most recent derived view.
//! Every mutation and every observer notification goes through `&mut self`
//! on the owning thread.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info, warn};

use super::fetch::{ConferenceFetcher, JsonFileFetcher};
use super::filters::filter_conferences;
use super::model::{Conference, PresentationType, talk_count};
use super::tags::TagStore;
use crate::config::{CatalogConfig, SuggestConfig};
use crate::error::{self, FetchError};
use crate::suggestions::{Suggestion, SuggestionIndex};

/// Receives catalog updates on the catalog's owning thread.
pub trait CatalogObserver {
    /// A new view is ready.
    fn on_data_ready(&self, conferences: &[Conference]);

    /// A fetch failed; the previous catalog contents are still in place.
    fn on_fetch_failed(&self, error: &FetchError);
}

/// Result of a background fetch, waiting in the catalog inbox.
#[derive(Debug)]
pub struct FetchCompletion {
    pub generation: u64,
    pub presentation: PresentationType,
    pub result: Result<Vec<Conference>, FetchError>,
}

pub struct TalkCatalog {
    backup: Arc<Vec<Conference>>,
    conferences: Arc<Vec<Conference>>,
    tags: Arc<dyn TagStore>,
    observers: Vec<Box<dyn CatalogObserver>>,
    suggest: SuggestConfig,
    inbox_tx: Sender<FetchCompletion>,
    inbox_rx: Receiver<FetchCompletion>,
    next_generation: u64,
    applied_generation: u64,
    in_flight: usize,
}

impl TalkCatalog {
    pub fn new(tags: Arc<dyn TagStore>) -> Self {
        let (inbox_tx, inbox_rx) = crossbeam_channel::unbounded();
        Self {
            backup: Arc::new(Vec::new()),
            conferences: Arc::new(Vec::new()),
            tags,
            observers: Vec::new(),
            suggest: SuggestConfig::default(),
            inbox_tx,
            inbox_rx,
            next_generation: 0,
            applied_generation: 0,
            in_flight: 0,
        }
    }

    #[must_use]
    pub fn with_suggest_config(mut self, config: SuggestConfig) -> Self {
        self.suggest = config;
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// Shared handle to the full, unfiltered corpus.
    pub fn snapshot(&self) -> Arc<Vec<Conference>> {
        Arc::clone(&self.backup)
    }

    /// The current derived view.
    pub fn conferences(&self) -> &[Conference] {
        &self.conferences
    }

    /// Background fetches not yet drained from the inbox.
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply a fetch result.
    ///
    /// On success both `backup` and `conferences` are replaced; a watchlist
    /// presentation is immediately narrowed to the active tags. On failure
    /// observers get the error and the catalog is left untouched.
    pub fn on_fetched(
        &mut self,
        presentation: PresentationType,
        result: Result<Vec<Conference>, FetchError>,
    ) {
        match result {
            Ok(corpus) => {
                info!(
                    %presentation,
                    conferences = corpus.len(),
                    talks = talk_count(&corpus),
                    "catalogue fetched"
                );
                self.backup = Arc::new(corpus);
                self.conferences = Arc::clone(&self.backup);

                match presentation {
                    PresentationType::Watchlist => self.refilter(""),
                    PresentationType::All => self.notify_data_ready(),
                }
            }
            Err(err) => {
                let code = err.code();
                warn!(
                    %code,
                    recoverable = code.is_recoverable(),
                    error = %err,
                    "catalogue fetch failed"
                );
                for observer in &self.observers {
                    observer.on_fetch_failed(&err);
                }
            }
        }
    }

    /// Re-derive the view from `backup` with `query` and the current active tags.
    pub fn refilter(&mut self, query: &str) {
        let active_tags = self.tags.active_tags();
        let filtered = filter_conferences(&self.backup, query, &active_tags);
        debug!(
            query,
            active_tags = active_tags.len(),
            conferences = filtered.len(),
            "refiltered catalogue"
        );
        self.conferences = Arc::new(filtered);
        self.notify_data_ready();
    }

    /// Ranked suggestions for `query` over the full corpus.
    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        self.suggestion_index().suggest(query)
    }

    /// A suggestion index pinned to the current snapshot and active tags,
    /// suitable for running on a worker thread.
    pub fn suggestion_index(&self) -> SuggestionIndex {
        SuggestionIndex::new(self.snapshot(), self.tags.active_tags())
            .with_config(self.suggest.clone())
    }

    /// Run `fetcher` on a background thread. The result is applied when the
    /// inbox is drained with [`process_pending`](Self::process_pending) or
    /// [`wait_for_fetch`](Self::wait_for_fetch).
    ///
    /// Returns the request generation; a completion older than one already
    /// processed is discarded.
    pub fn request_fetch(
        &mut self,
        fetcher: Arc<dyn ConferenceFetcher>,
        presentation: PresentationType,
    ) -> u64 {
        self.next_generation += 1;
        self.in_flight += 1;
        let generation = self.next_generation;
        let tx = self.inbox_tx.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("confscout-fetch-{generation}"))
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| fetcher.fetch(presentation)))
                    .unwrap_or_else(|payload| {
                        Err(FetchError::Unavailable(format!(
                            "fetch worker panicked: {}",
                            panic_message(payload.as_ref())
                        )))
                    });
                // The catalog may have been dropped meanwhile.
                let _ = tx.send(FetchCompletion {
                    generation,
                    presentation,
                    result,
                });
            });

        if let Err(err) = spawned {
            let _ = self.inbox_tx.send(FetchCompletion {
                generation,
                presentation,
                result: Err(FetchError::Unavailable(format!("spawn fetch worker: {err}"))),
            });
        }

        debug!(generation, %presentation, "fetch requested");
        generation
    }

    /// Fetch the JSON catalogue named by `catalog.source`, using the
    /// configured presentation.
    pub fn request_configured_fetch(&mut self, config: &CatalogConfig) -> error::Result<u64> {
        let fetcher = JsonFileFetcher::from_config(config)?;
        Ok(self.request_fetch(Arc::new(fetcher), config.presentation))
    }

    /// Apply every completion already in the inbox without blocking.
    /// Returns how many completions were drained.
    pub fn process_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(completion) = self.inbox_rx.try_recv() {
            self.complete(completion);
            drained += 1;
        }
        drained
    }

    /// Block until one in-flight fetch completes and apply it.
    /// Returns false immediately when nothing is in flight.
    pub fn wait_for_fetch(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.inbox_rx.recv() {
            Ok(completion) => {
                self.complete(completion);
                true
            }
            Err(_) => false,
        }
    }

    fn complete(&mut self, completion: FetchCompletion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if completion.generation < self.applied_generation {
            debug!(
                generation = completion.generation,
                applied = self.applied_generation,
                "discarding stale fetch"
            );
            return;
        }
        self.applied_generation = completion.generation;
        self.on_fetched(completion.presentation, completion.result);
    }

    fn notify_data_ready(&self) {
        for observer in &self.observers {
            observer.on_data_ready(&self.conferences);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

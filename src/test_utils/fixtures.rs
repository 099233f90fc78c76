//! Corpus builders and a recording observer.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::{CatalogObserver, Conference, Speaker, Talk};
use crate::error::FetchError;

/// Build a talk from a title, a "First Last" speaker and tags.
pub fn talk(title: &str, speaker: &str, tags: &[&str]) -> Talk {
    let (first, last) = speaker.split_once(' ').unwrap_or((speaker, ""));
    Talk::new(title, Speaker::new(first, last)).with_tags(tags.iter().copied())
}

/// A small two-conference corpus covering every candidate field.
pub fn sample_corpus() -> Vec<Conference> {
    vec![
        Conference::new(
            "SwiftConf",
            vec![
                Talk::new(
                    "Swift concurrency in practice",
                    Speaker::new("Ana", "Sync").with_twitter("ana_swift"),
                )
                .with_details("Actors, async/await and structured tasks")
                .with_tags(["swift", "async"]),
                talk("SwiftUI layouts", "Ben Carter", &["swift", "ui"]),
            ],
        ),
        Conference::new(
            "RustConf",
            vec![
                talk("Async Rust without tears", "Cleo Park", &["rust", "async"]),
                talk("Unsafe code guidelines", "Dan Wu", &["rust"]),
                Talk::new("Async drop", Speaker::new("Eve", "Asyncson"))
                    .with_details("Cancellation and async cleanup")
                    .with_tags(["rust", "async"]),
            ],
        ),
    ]
}

/// Synthetic corpus of `conferences` x `talks_per` talks, for benchmarks and
/// parallel-scan checks.
pub fn synthetic_corpus(conferences: usize, talks_per: usize) -> Vec<Conference> {
    const TOPICS: [&str; 6] = ["async", "rust", "swift", "sync", "actors", "generics"];
    (0..conferences)
        .map(|c| {
            let talks = (0..talks_per)
                .map(|t| {
                    let topic = TOPICS[(c + t) % TOPICS.len()];
                    let other = TOPICS[(c * 7 + t * 3) % TOPICS.len()];
                    Talk::new(
                        format!("{topic} and {other} part {t}"),
                        Speaker::new(format!("Speaker{t}"), format!("Family{c}")),
                    )
                    .with_details(format!("A talk about {other}-driven {topic} design"))
                    .with_tags([topic])
                })
                .collect();
            Conference::new(format!("conf-{c}"), talks)
        })
        .collect()
}

/// Something an observer was told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    DataReady(Vec<Conference>),
    FetchFailed(FetchError),
}

/// Observer that records every notification. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<CatalogEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CatalogEvent> {
        self.events.lock().clone()
    }

    pub fn data_ready_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, CatalogEvent::DataReady(_)))
            .count()
    }

    /// Conferences from the most recent data-ready notification.
    pub fn last_data(&self) -> Option<Vec<Conference>> {
        self.events.lock().iter().rev().find_map(|e| match e {
            CatalogEvent::DataReady(data) => Some(data.clone()),
            CatalogEvent::FetchFailed(_) => None,
        })
    }
}

impl CatalogObserver for RecordingObserver {
    fn on_data_ready(&self, conferences: &[Conference]) {
        self.events
            .lock()
            .push(CatalogEvent::DataReady(conferences.to_vec()));
    }

    fn on_fetch_failed(&self, error: &FetchError) {
        self.events.lock().push(CatalogEvent::FetchFailed(error.clone()));
    }
}

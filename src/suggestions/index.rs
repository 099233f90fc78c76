//! Autocomplete suggestions over the talk corpus
//!
//! Candidate words come from five talk fields, scanned per talk in this order:
//! speaker first name, speaker last name, twitter handle (each whole), then
//! title and details tokens. A candidate qualifies when it contains the
//! query, case-insensitively.
//!
//! ## Algorithm
//!
//! ```text
//! corpus ──▶ eligible talks ──▶ candidate words ──▶ word → accumulator
//!                                                         │
//!                 ranked Suggestions ◀── stable sort ◀────┘
//!                 (talk count desc)
//! ```
//!
//! Every distinct lower-cased word collapses into one accumulator holding the
//! union of its sources and the concatenation of its talks. Large corpora are
//! folded per conference in parallel and merged back in conference order, so
//! the result is identical to a sequential scan.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock};

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::source::SuggestionSource;
use crate::catalog::model::{Conference, TagSet, Talk, talk_count};
use crate::config::SuggestConfig;

/// Runs of characters that separate title/details tokens.
static TOKEN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\-]+").unwrap());

/// Split free text into lower-cased candidate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_SEPARATOR
        .replace_all(text, " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Byte range of the query inside a completion word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// A ranked completion for a partial query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    text: String,
    complete_word: String,
    sources: BTreeSet<SuggestionSource>,
    talks: Vec<Talk>,
    span: Option<MatchSpan>,
}

impl Suggestion {
    /// The query as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased completion word.
    pub fn complete_word(&self) -> &str {
        &self.complete_word
    }

    /// Contributing fields, in rank order.
    pub const fn sources(&self) -> &BTreeSet<SuggestionSource> {
        &self.sources
    }

    pub fn has_source(&self, source: SuggestionSource) -> bool {
        self.sources.contains(&source)
    }

    /// Talks the word was found in. A talk appears once per occurrence.
    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }

    pub fn talk_count(&self) -> usize {
        self.talks.len()
    }

    /// Where the query sits inside the completion word.
    pub const fn span(&self) -> Option<MatchSpan> {
        self.span
    }

    /// Completion word split around the matched query: (before, matched, after).
    pub fn segments(&self) -> (&str, &str, &str) {
        match self.span {
            Some(MatchSpan { start, end }) => (
                &self.complete_word[..start],
                &self.complete_word[start..end],
                &self.complete_word[end..],
            ),
            None => ("", "", &self.complete_word),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels: Vec<&str> = self.sources.iter().map(SuggestionSource::label).collect();
        // Both speaker sources share a label and sort next to each other.
        labels.dedup();
        write!(f, "{} - {} - [{}]", self.text, self.complete_word, labels.join(", "))
    }
}

/// Provenance collected for one completion word.
#[derive(Debug, Clone, Default)]
pub(crate) struct SuggestionBuilder {
    complete_word: String,
    sources: BTreeSet<SuggestionSource>,
    talks: Vec<Talk>,
}

impl SuggestionBuilder {
    fn new(complete_word: String) -> Self {
        Self {
            complete_word,
            ..Self::default()
        }
    }

    /// Record a source. Returns false if it was already present.
    pub(crate) fn add_source(&mut self, source: SuggestionSource) -> bool {
        self.sources.insert(source)
    }

    pub(crate) fn add_talk(&mut self, talk: &Talk) {
        self.talks.push(talk.clone());
    }

    fn absorb(&mut self, other: Self) {
        self.sources.extend(other.sources);
        self.talks.extend(other.talks);
    }

    fn build(self, query: &str, needle: &str) -> Suggestion {
        let span = self.complete_word.find(needle).map(|start| MatchSpan {
            start,
            end: start + needle.len(),
        });
        Suggestion {
            text: query.to_string(),
            complete_word: self.complete_word,
            sources: self.sources,
            talks: self.talks,
            span,
        }
    }
}

/// Word → provenance map that remembers first-encounter order.
#[derive(Debug, Default)]
pub(crate) struct WordAccumulator {
    positions: HashMap<String, usize>,
    entries: Vec<SuggestionBuilder>,
}

impl WordAccumulator {
    fn entry(&mut self, word: String) -> &mut SuggestionBuilder {
        let idx = match self.positions.get(&word) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.positions.insert(word.clone(), idx);
                self.entries.push(SuggestionBuilder::new(word));
                idx
            }
        };
        &mut self.entries[idx]
    }

    /// Fold one qualifying candidate word into the map.
    pub(crate) fn record(&mut self, word: String, source: SuggestionSource, talk: &Talk) {
        let entry = self.entry(word);
        entry.add_source(source);
        entry.add_talk(talk);
    }

    fn consider(&mut self, word: String, needle: &str, source: SuggestionSource, talk: &Talk) {
        if word.contains(needle) {
            self.record(word, source, talk);
        }
    }

    /// Scan every candidate field of one talk. `needle` is the lower-cased query.
    pub(crate) fn scan_talk(&mut self, talk: &Talk, needle: &str) {
        let speaker = &talk.speaker;
        self.consider(
            speaker.firstname.to_lowercase(),
            needle,
            SuggestionSource::SpeakerFirstname,
            talk,
        );
        self.consider(
            speaker.lastname.to_lowercase(),
            needle,
            SuggestionSource::SpeakerLastname,
            talk,
        );
        if let Some(handle) = &speaker.twitter {
            self.consider(handle.to_lowercase(), needle, SuggestionSource::Twitter, talk);
        }
        for word in tokenize(&talk.title) {
            self.consider(word, needle, SuggestionSource::Title, talk);
        }
        if let Some(details) = &talk.details {
            for word in tokenize(details) {
                self.consider(word, needle, SuggestionSource::Details, talk);
            }
        }
    }

    pub(crate) fn scan_conference(&mut self, conference: &Conference, needle: &str, active_tags: &TagSet) {
        for talk in conference.talks.iter().filter(|t| t.matches_all(active_tags)) {
            self.scan_talk(talk, needle);
        }
    }

    /// Append `other`, as if its talks had been scanned after ours.
    pub(crate) fn merge(&mut self, other: Self) {
        for builder in other.entries {
            let word = builder.complete_word.clone();
            self.entry(word).absorb(builder);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Materialize suggestions, ranked by talk count (stable).
    pub(crate) fn finish(self, query: &str, needle: &str) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self
            .entries
            .into_iter()
            .map(|builder| builder.build(query, needle))
            .collect();
        suggestions.sort_by_key(|s| Reverse(s.talk_count()));
        suggestions
    }
}

/// Rank suggestions for `query` over the whole corpus, sequentially.
///
/// An empty query or corpus yields no suggestions.
pub fn suggest(corpus: &[Conference], query: &str, active_tags: &TagSet) -> Vec<Suggestion> {
    let config = SuggestConfig {
        parallel_threshold: usize::MAX,
        max_results: None,
    };
    suggest_with(corpus, query, active_tags, &config)
}

/// Rank suggestions, scanning in parallel once the corpus reaches
/// `config.parallel_threshold` talks and truncating to `config.max_results`.
pub fn suggest_with(
    corpus: &[Conference],
    query: &str,
    active_tags: &TagSet,
    config: &SuggestConfig,
) -> Vec<Suggestion> {
    if query.is_empty() || corpus.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let talks = talk_count(corpus);
    let parallel = talks >= config.parallel_threshold;

    let accumulator = if parallel {
        corpus
            .par_iter()
            .map(|conference| {
                let mut partial = WordAccumulator::default();
                partial.scan_conference(conference, &needle, active_tags);
                partial
            })
            .collect::<Vec<_>>()
            .into_iter()
            .fold(WordAccumulator::default(), |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    } else {
        let mut acc = WordAccumulator::default();
        for conference in corpus {
            acc.scan_conference(conference, &needle, active_tags);
        }
        acc
    };

    debug!(
        query,
        talks,
        parallel,
        words = accumulator.len(),
        "built suggestions"
    );

    let mut suggestions = accumulator.finish(query, &needle);
    if let Some(limit) = config.max_results {
        suggestions.truncate(limit);
    }
    suggestions
}

/// Suggestion queries over one immutable corpus snapshot.
///
/// Cheap to clone and `Send`, so a query can run on a worker thread while the
/// catalog keeps accepting fetches; a replaced catalog snapshot never affects
/// an index captured earlier.
#[derive(Debug, Clone)]
pub struct SuggestionIndex {
    corpus: Arc<Vec<Conference>>,
    active_tags: TagSet,
    config: SuggestConfig,
}

impl SuggestionIndex {
    pub fn new(corpus: Arc<Vec<Conference>>, active_tags: TagSet) -> Self {
        Self {
            corpus,
            active_tags,
            config: SuggestConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SuggestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn corpus(&self) -> &Arc<Vec<Conference>> {
        &self.corpus
    }

    pub const fn active_tags(&self) -> &TagSet {
        &self.active_tags
    }

    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        suggest_with(&self.corpus, query, &self.active_tags, &self.config)
    }
}

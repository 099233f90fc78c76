//! Talk filtering by free-text query and active tags
//!
//! A talk survives when:
//! - it carries every active tag (empty tag set matches everything)
//! - the query is empty, or found case-insensitively in its title, details
//!   or speaker name
//!
//! Conferences left without talks are dropped. Order is preserved.

use tracing::trace;

use super::model::{Conference, TagSet, Talk};

/// Reusable talk filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalkFilter {
    /// Lower-cased search query (empty matches everything)
    query: String,
    /// Tags every surviving talk must carry
    tags: TagSet,
}

impl TalkFilter {
    /// Create new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_lowercase();
        self
    }

    /// Set the required tags
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Lower-cased query this filter matches against
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Tags this filter requires
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Check if the filter accepts every talk
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tags.is_empty()
    }

    /// Check if a talk passes the filter
    pub fn matches(&self, talk: &Talk) -> bool {
        talk.matches_all(&self.tags) && talk.matches_lowercase(&self.query)
    }

    /// Apply the filter to a corpus, producing new conference values
    pub fn apply(&self, corpus: &[Conference]) -> Vec<Conference> {
        let filtered: Vec<Conference> = corpus
            .iter()
            .map(|conference| conference.retain_talks(|talk| self.matches(talk)))
            .filter(|conference| !conference.talks.is_empty())
            .collect();

        trace!(
            query = %self.query,
            tags = self.tags.len(),
            conferences_in = corpus.len(),
            conferences_out = filtered.len(),
            "filtered talks"
        );
        filtered
    }
}

/// Filter a corpus down to conferences holding at least one matching talk.
pub fn filter_conferences(corpus: &[Conference], query: &str, active_tags: &TagSet) -> Vec<Conference> {
    TalkFilter::new()
        .with_query(query)
        .with_tags(active_tags.clone())
        .apply(corpus)
}

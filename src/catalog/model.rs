//! Conference catalogue data model.
//!
//! All values are immutable once fetched. Filtering produces new
//! [`Conference`] values; nothing here is mutated in place.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tag identifier.
pub type TagId = String;

/// Set of tag identifiers, kept ordered for deterministic output.
pub type TagSet = BTreeSet<TagId>;

/// A talk speaker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Speaker {
    pub firstname: String,
    pub lastname: String,
    /// Social handle, without the leading `@`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl Speaker {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            twitter: None,
        }
    }

    #[must_use]
    pub fn with_twitter(mut self, handle: impl Into<String>) -> Self {
        self.twitter = Some(handle.into());
        self
    }

    /// "Firstname Lastname", trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// A single conference talk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub speaker: Speaker,
    #[serde(default)]
    pub tags: TagSet,
}

impl Talk {
    pub fn new(title: impl Into<String>, speaker: Speaker) -> Self {
        Self {
            title: title.into(),
            details: None,
            speaker,
            tags: TagSet::new(),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TagId>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when the talk carries every active tag. An empty set matches all talks.
    pub fn matches_all(&self, active_tags: &TagSet) -> bool {
        active_tags.is_subset(&self.tags)
    }

    /// Case-insensitive substring match against title, details and speaker name.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(needle);

        contains(&self.title)
            || self.details.as_deref().is_some_and(contains)
            || contains(&self.speaker.firstname)
            || contains(&self.speaker.lastname)
            || contains(&self.speaker.full_name())
    }

    /// Case-insensitive search match. An empty query matches every talk.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// A conference: an ordered sequence of talks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub talks: Vec<Talk>,
}

impl Conference {
    pub fn new(name: impl Into<String>, talks: Vec<Talk>) -> Self {
        Self {
            name: name.into(),
            talks,
        }
    }

    /// A copy of this conference holding only the talks accepted by `keep`.
    #[must_use]
    pub fn retain_talks(&self, mut keep: impl FnMut(&Talk) -> bool) -> Self {
        Self {
            name: self.name.clone(),
            talks: self.talks.iter().filter(|t| keep(t)).cloned().collect(),
        }
    }
}

/// Total number of talks across a corpus.
pub fn talk_count(corpus: &[Conference]) -> usize {
    corpus.iter().map(|c| c.talks.len()).sum()
}

/// How the catalogue is being presented; selects post-fetch behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationType {
    /// Every fetched talk
    #[default]
    All,
    /// Only talks carrying the active tags
    Watchlist,
}

impl PresentationType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Watchlist => "watchlist",
        }
    }
}

impl fmt::Display for PresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "watchlist" => Ok(Self::Watchlist),
            other => Err(format!("unknown presentation type: {other}")),
        }
    }
}

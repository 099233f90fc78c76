//! Where a suggested word was found.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between a source label and the word in criteria text.
pub const SOURCE_CRITERIA_LIMIT: &str = ":";

/// Talk field that produced a suggestion.
///
/// Variants are declared in rank order, so the derived ordering is the
/// display order used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    SpeakerFirstname,
    SpeakerLastname,
    Title,
    Details,
    Twitter,
}

impl SuggestionSource {
    pub const ALL: [Self; 5] = [
        Self::SpeakerFirstname,
        Self::SpeakerLastname,
        Self::Title,
        Self::Details,
        Self::Twitter,
    ];

    /// Display rank, 1-based.
    pub const fn rank(&self) -> u8 {
        match self {
            Self::SpeakerFirstname => 1,
            Self::SpeakerLastname => 2,
            Self::Title => 3,
            Self::Details => 4,
            Self::Twitter => 5,
        }
    }

    /// Human label. Both speaker sources share "speaker".
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SpeakerFirstname | Self::SpeakerLastname => "speaker",
            Self::Title => "title",
            Self::Details => "details",
            Self::Twitter => "twitter",
        }
    }

    /// Icon asset key for the presentation layer.
    pub const fn icon_key(&self) -> &'static str {
        match self {
            Self::SpeakerFirstname | Self::SpeakerLastname => "speaker-black",
            Self::Title => "title",
            Self::Details => "details",
            Self::Twitter => "twitter-black",
        }
    }

    /// "label:word", the plain-text form of a source-qualified completion.
    pub fn criteria_text(&self, complete_word: &str) -> String {
        format!("{}{SOURCE_CRITERIA_LIMIT}{complete_word}", self.label())
    }

    /// True if any source carries this label.
    pub fn is_source_label(text: &str) -> bool {
        Self::ALL.iter().any(|source| source.label() == text)
    }
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

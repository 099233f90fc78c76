//! Ranked autocomplete suggestions drawn from speaker names, talk titles,
//! talk details and social handles.

pub mod index;
pub mod source;

pub use index::{MatchSpan, Suggestion, SuggestionIndex, suggest, suggest_with, tokenize};
pub use source::{SOURCE_CRITERIA_LIMIT, SuggestionSource};

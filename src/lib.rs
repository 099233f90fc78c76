pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod suggestions;
pub mod test_utils;

pub use catalog::{
    CatalogObserver, Conference, ConferenceFetcher, PresentationType, Speaker, TagSet, TagStore,
    Talk, TalkCatalog,
};
pub use error::{FetchError, Result, ScoutError};
pub use suggestions::{Suggestion, SuggestionIndex, SuggestionSource};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

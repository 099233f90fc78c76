//! Conference catalogue: data model, talk filtering, collaborators and the
//! single-owner catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────┐   background thread   ┌──────────────────────┐
//! │ ConferenceFetcher  │ ────────────────────▶ │   catalog inbox      │
//! └────────────────────┘   FetchCompletion     └──────────────────────┘
//!                                                         │ process_pending
//!                                                         ▼
//! ┌────────────────────┐  active_tags()  ┌──────────────────────────────┐
//! │     TagStore       │ ──────────────▶ │ TalkCatalog                  │
//! └────────────────────┘                 │  backup ──▶ filter ──▶ view  │
//!                                        │  backup ──▶ suggestions      │
//!                                        └──────────────────────────────┘
//!                                                         │
//!                                                         ▼
//!                                                 CatalogObserver
//! ```

pub mod fetch;
pub mod filters;
pub mod model;
pub mod service;
pub mod tags;

pub use fetch::{ConferenceFetcher, JsonFileFetcher, StaticFetcher, decode_conferences};
pub use filters::{TalkFilter, filter_conferences};
pub use model::{Conference, PresentationType, Speaker, TagId, TagSet, Talk, talk_count};
pub use service::{CatalogObserver, FetchCompletion, TalkCatalog};
pub use tags::{InMemoryTagStore, TagStore};
